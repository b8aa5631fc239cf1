//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire, matching the consumers of the
//! original API.

use serde::{Deserialize, Serialize};

use crate::domain::{Route, Station};
use crate::engine::{ReachabilityResult, ReachableStation};

/// Query parameters for the reachability endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachabilityRequest {
    /// Origin station id.
    pub station_id: String,

    /// Maximum number of transfers (policy range 0..=3).
    pub max_transfers: Option<u32>,
}

/// A station in a JSON response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationView {
    pub id: String,
    pub full_name: String,
    pub transport_mode: &'static str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StationView {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            full_name: station.full_name.clone(),
            transport_mode: station.transport_mode.as_str(),
            latitude: station.latitude,
            longitude: station.longitude,
        }
    }
}

/// A route in a JSON response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteView {
    pub id: String,
    pub short_title: String,
    pub full_title: String,
    pub transport_mode: &'static str,
    pub route_info_url: Option<String>,
}

impl RouteView {
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id.as_str().to_string(),
            short_title: route.short_title.clone(),
            full_title: route.full_title.clone(),
            transport_mode: route.transport_mode.as_str(),
            route_info_url: route.route_info_url.clone(),
        }
    }
}

/// A reachable station with its transfer count and serving routes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachableStationView {
    #[serde(flatten)]
    pub station: StationView,
    pub transfer_count: u32,
    pub routes: Vec<RouteView>,
}

/// Response body for the reachability endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachabilityResponse {
    pub origin: StationView,
    pub max_transfers: u32,
    pub reachable_stations: Vec<ReachableStationView>,
}

impl ReachabilityResponse {
    pub fn from_result(result: &ReachabilityResult) -> Self {
        Self {
            origin: StationView::from_station(&result.origin),
            max_transfers: result.max_transfers,
            reachable_stations: result
                .reachable_stations
                .iter()
                .map(ReachableStationView::from_reachable)
                .collect(),
        }
    }
}

impl ReachableStationView {
    fn from_reachable(reachable: &ReachableStation) -> Self {
        Self {
            station: StationView::from_station(&reachable.station),
            transfer_count: reachable.transfer_count,
            routes: reachable.routes.iter().map(RouteView::from_route).collect(),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
