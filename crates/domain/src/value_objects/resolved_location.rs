//! Resolved location value object
//!
//! The outcome of geocoding a free-text place name: the coordinate of the
//! best match plus a display name assembled from its name parts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Coordinate;

/// A geocoded place: coordinate and human-readable name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    coordinate: Coordinate,
    display_name: String,
}

impl ResolvedLocation {
    /// Create a resolved location from an already formatted display name
    #[must_use]
    pub fn new(coordinate: Coordinate, display_name: impl Into<String>) -> Self {
        Self {
            coordinate,
            display_name: display_name.into(),
        }
    }

    /// Create a resolved location from geocoder name parts
    ///
    /// Joins the primary name, the administrative region and the country
    /// with `", "`, skipping absent or blank segments.
    #[must_use]
    pub fn from_parts(
        coordinate: Coordinate,
        name: &str,
        region: Option<&str>,
        country: Option<&str>,
    ) -> Self {
        let display_name = [Some(name), region, country]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            coordinate,
            display_name,
        }
    }

    /// Coordinate of the resolved place
    #[must_use]
    pub const fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Display name, e.g. `"Hanoi, Hanoi, Vietnam"`
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}
