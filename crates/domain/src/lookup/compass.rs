//! Eight-point compass rose

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Octants clockwise from north, each a 45° wedge centred on its bearing
static OCTANTS: [CompassDirection; 8] = [
    CompassDirection::North,
    CompassDirection::NorthEast,
    CompassDirection::East,
    CompassDirection::SouthEast,
    CompassDirection::South,
    CompassDirection::SouthWest,
    CompassDirection::West,
    CompassDirection::NorthWest,
];

const WEDGE: f64 = 45.0;

impl CompassDirection {
    /// Map a bearing in degrees to its octant
    ///
    /// Any finite input is normalized into `[0, 360)` first, so `-1.0`
    /// reads as `359.0`. Lower wedge bounds are inclusive. Returns `None`
    /// for NaN and infinities.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }
        let normalized = degrees.rem_euclid(360.0);
        let index = ((normalized + WEDGE / 2.0) / WEDGE).floor() as usize % OCTANTS.len();
        Some(OCTANTS[index])
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::NorthEast => "Northeast",
            Self::East => "East",
            Self::SouthEast => "Southeast",
            Self::South => "South",
            Self::SouthWest => "Southwest",
            Self::West => "West",
            Self::NorthWest => "Northwest",
        }
    }

    /// Label for an optional direction, `"Unknown"` when absent
    #[must_use]
    pub fn label_or_unknown(direction: Option<Self>) -> &'static str {
        direction.map_or("Unknown", Self::label)
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
