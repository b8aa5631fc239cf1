//! Station identity and metadata types.

use std::fmt;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// An opaque station identifier.
///
/// Station ids come from the schedule feed and are treated as opaque
/// strings. This type guarantees that any `StationId` value is non-empty
/// and carries no surrounding whitespace.
///
/// # Examples
///
/// ```
/// use reach_server::domain::StationId;
///
/// let id = StationId::parse("s9600213").unwrap();
/// assert_eq!(id.as_str(), "s9600213");
///
/// // Empty and whitespace-only ids are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// Surrounding whitespace is trimmed; the remainder must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct UnknownTransportMode(pub String);

/// The mode of transport a station or route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Train,
    Suburban,
    Bus,
    Tram,
    Metro,
    Water,
    Helicopter,
    Plane,
}

impl TransportMode {
    /// Parse a transport mode from its feed representation.
    pub fn parse(s: &str) -> Result<Self, UnknownTransportMode> {
        match s {
            "train" => Ok(TransportMode::Train),
            "suburban" => Ok(TransportMode::Suburban),
            "bus" => Ok(TransportMode::Bus),
            "tram" => Ok(TransportMode::Tram),
            "metro" => Ok(TransportMode::Metro),
            "water" => Ok(TransportMode::Water),
            "helicopter" => Ok(TransportMode::Helicopter),
            "plane" => Ok(TransportMode::Plane),
            other => Err(UnknownTransportMode(other.to_string())),
        }
    }

    /// Returns the feed/API representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Train => "train",
            TransportMode::Suburban => "suburban",
            TransportMode::Bus => "bus",
            TransportMode::Tram => "tram",
            TransportMode::Metro => "metro",
            TransportMode::Water => "water",
            TransportMode::Helicopter => "helicopter",
            TransportMode::Plane => "plane",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point in the transit network.
///
/// Immutable once loaded for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Stable identity from the schedule feed.
    pub id: StationId,

    /// Display name.
    pub full_name: String,

    /// Transport mode this station serves.
    pub transport_mode: TransportMode,

    /// Latitude, if the feed provided coordinates.
    pub latitude: Option<f64>,

    /// Longitude, if the feed provided coordinates.
    pub longitude: Option<f64>,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty trimmed string parses and round-trips.
        #[test]
        fn roundtrip(s in "[a-z0-9_]{1,20}") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Parsing is insensitive to surrounding whitespace.
        #[test]
        fn whitespace_trimmed(s in "[a-z0-9]{1,10}", pad in "[ \t]{0,4}") {
            let padded = format!("{pad}{s}{pad}");
            let id = StationId::parse(&padded).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Whitespace-only strings are always rejected.
        #[test]
        fn whitespace_only_rejected(s in "[ \t\n]{0,8}") {
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
