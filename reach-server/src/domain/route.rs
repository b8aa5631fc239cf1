//! Route and route-stop types.

use std::fmt;

use super::TransportMode;
use super::station::StationId;

/// Error returned when parsing an invalid route id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route id: {reason}")]
pub struct InvalidRouteId {
    reason: &'static str,
}

/// An opaque route identifier.
///
/// Like [`StationId`], route ids are opaque feed-supplied strings,
/// non-empty and trimmed by construction.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    /// Parse a route id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidRouteId {
                reason: "must not be empty",
            });
        }

        Ok(RouteId(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit line serving an ordered sequence of stations.
///
/// The stop sequence itself lives in the store as [`RouteStop`] rows;
/// this is the summary used for display and result hydration.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Stable identity from the schedule feed.
    pub id: RouteId,

    /// Short display title (e.g. a line number).
    pub short_title: String,

    /// Full display title.
    pub full_title: String,

    /// Transport mode of the route.
    pub transport_mode: TransportMode,

    /// Optional link to external route information.
    pub route_info_url: Option<String>,
}

/// A single stop of a route: the (route, station, position) relationship.
///
/// `position` orders the stops along the route. It carries no
/// directionality: every stop of a route is reachable from every other
/// stop without a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteStop {
    pub route_id: RouteId,
    pub station_id: StationId,
    pub position: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_id() {
        let id = RouteId::parse("r100").unwrap();
        assert_eq!(id.as_str(), "r100");
    }

    #[test]
    fn reject_empty() {
        assert!(RouteId::parse("").is_err());
        assert!(RouteId::parse(" \t").is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = RouteId::parse("r7").unwrap();
        assert_eq!(format!("{}", id), "r7");
        assert_eq!(format!("{:?}", id), "RouteId(r7)");
    }

    #[test]
    fn route_stop_equality() {
        let a = RouteStop {
            route_id: RouteId::parse("r1").unwrap(),
            station_id: StationId::parse("s1").unwrap(),
            position: 0,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
