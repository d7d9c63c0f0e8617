//! Apartment profile and facade orientation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Preferred cooling start hour used when a resident states none.
pub const DEFAULT_PREFERRED_HOUR: u32 = 19;

/// Facade orientation of an apartment.
///
/// Ordered by solar heat gain for a subtropical evening: south receives
/// the most, north the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// All recognised orientations.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::South => "south",
            Orientation::East => "east",
            Orientation::West => "west",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an orientation string is not one of the four known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrientation(pub String);

impl fmt::Display for UnknownOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown orientation \"{}\", expected one of north, south, east, west",
            self.0
        )
    }
}

impl std::error::Error for UnknownOrientation {}

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| UnknownOrientation(s.to_string()))
    }
}

/// Serde default for the `preferred_start_time` wire field.
pub(crate) fn default_preferred_hour() -> u32 {
    DEFAULT_PREFERRED_HOUR
}

/// Static profile of one apartment taking part in the evening schedule.
///
/// Immutable for the duration of an optimization run. Built from the JSON
/// request or a scenario file, which each own their wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct Apartment {
    /// Opaque unique identifier.
    pub id: String,
    /// Floor number (>= 1).
    pub floor: u32,
    /// Facade orientation.
    pub orientation: Orientation,
    /// Floor area (sq ft).
    pub size: f64,
    /// Number of residents.
    pub residents: u32,
    /// Preferred cooling start hour (24h clock).
    pub preferred_start_hour: u32,
}

impl Apartment {
    /// Creates an apartment that prefers the default start hour.
    pub fn new(
        id: impl Into<String>,
        floor: u32,
        orientation: Orientation,
        size: f64,
        residents: u32,
    ) -> Self {
        Self {
            id: id.into(),
            floor,
            orientation,
            size,
            residents,
            preferred_start_hour: DEFAULT_PREFERRED_HOUR,
        }
    }

    /// Returns the apartment with a different preferred start hour.
    pub fn preferring(mut self, hour: u32) -> Self {
        self.preferred_start_hour = hour;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_parses_lowercase_names() {
        for o in Orientation::ALL {
            assert_eq!(o.as_str().parse::<Orientation>(), Ok(o));
        }
    }

    #[test]
    fn orientation_rejects_unknown_name() {
        let err = "up".parse::<Orientation>().unwrap_err();
        assert_eq!(err, UnknownOrientation("up".to_string()));
        assert!(err.to_string().contains("\"up\""));
    }

    #[test]
    fn new_apartment_prefers_seven_pm() {
        let apt = Apartment::new("A1", 3, Orientation::East, 500.0, 2);
        assert_eq!(apt.preferred_start_hour, 19);
        assert_eq!(apt.preferring(21).preferred_start_hour, 21);
    }
}
