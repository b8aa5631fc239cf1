//! Schedule feed loading.
//!
//! Parses the JSON schedule feed into a [`MemoryGraph`]. All validation
//! happens here at the boundary and returns tagged errors; nothing past
//! this point sees an unvalidated id or mode.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Route, RouteId, Station, StationId, TransportMode};

use super::memory::MemoryGraph;

/// Errors from loading or validating a schedule feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Reading the feed file failed.
    #[error("failed to read feed: {0}")]
    Io(#[from] std::io::Error),

    /// The feed is not valid JSON for the expected schema.
    #[error("failed to parse feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The feed parsed but violates a semantic rule.
    #[error("invalid feed: {message}")]
    Invalid { message: String },
}

impl FeedError {
    fn invalid(message: impl Into<String>) -> Self {
        FeedError::Invalid {
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedDto {
    stations: Vec<StationDto>,
    routes: Vec<RouteDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationDto {
    id: String,
    full_name: String,
    transport_mode: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteDto {
    id: String,
    short_title: String,
    full_title: String,
    transport_mode: String,
    #[serde(default)]
    route_info_url: Option<String>,
    stops: Vec<String>,
}

/// Load a schedule feed from a JSON file.
pub fn load_feed(path: impl AsRef<Path>) -> Result<MemoryGraph, FeedError> {
    let json = std::fs::read_to_string(path)?;
    load_feed_str(&json)
}

/// Load a schedule feed from a JSON string.
pub fn load_feed_str(json: &str) -> Result<MemoryGraph, FeedError> {
    let feed: FeedDto = serde_json::from_str(json)?;

    let mut graph = MemoryGraph::new();
    let mut station_ids: HashSet<StationId> = HashSet::new();

    for dto in feed.stations {
        let id = StationId::parse(&dto.id)
            .map_err(|e| FeedError::invalid(format!("station {:?}: {e}", dto.id)))?;

        if !station_ids.insert(id.clone()) {
            return Err(FeedError::invalid(format!("duplicate station id: {id}")));
        }

        let transport_mode = TransportMode::parse(&dto.transport_mode)
            .map_err(|e| FeedError::invalid(format!("station {id}: {e}")))?;

        graph.insert_station(Station {
            id,
            full_name: dto.full_name,
            transport_mode,
            latitude: dto.latitude,
            longitude: dto.longitude,
        });
    }

    let mut route_ids: HashSet<RouteId> = HashSet::new();

    for dto in feed.routes {
        let id = RouteId::parse(&dto.id)
            .map_err(|e| FeedError::invalid(format!("route {:?}: {e}", dto.id)))?;

        if !route_ids.insert(id.clone()) {
            return Err(FeedError::invalid(format!("duplicate route id: {id}")));
        }

        let transport_mode = TransportMode::parse(&dto.transport_mode)
            .map_err(|e| FeedError::invalid(format!("route {id}: {e}")))?;

        let mut stops = Vec::with_capacity(dto.stops.len());
        let mut seen: HashSet<StationId> = HashSet::new();

        for stop in &dto.stops {
            let stop_id = StationId::parse(stop)
                .map_err(|e| FeedError::invalid(format!("route {id} stop {stop:?}: {e}")))?;

            if !station_ids.contains(&stop_id) {
                return Err(FeedError::invalid(format!(
                    "route {id} references unknown station: {stop_id}"
                )));
            }
            if !seen.insert(stop_id.clone()) {
                return Err(FeedError::invalid(format!(
                    "route {id} lists station {stop_id} more than once"
                )));
            }

            stops.push(stop_id);
        }

        graph.insert_route(
            Route {
                id,
                short_title: dto.short_title,
                full_title: dto.full_title,
                transport_mode,
                route_info_url: dto.route_info_url,
            },
            stops,
        );
    }

    Ok(graph)
}
