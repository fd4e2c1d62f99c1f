//! UV index bands

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

/// Exclusive upper bounds, ascending
static BANDS: &[(f64, UvCategory)] = &[
    (3.0, UvCategory::Low),
    (6.0, UvCategory::Moderate),
    (8.0, UvCategory::High),
    (11.0, UvCategory::VeryHigh),
];

impl UvCategory {
    #[must_use]
    pub fn from_index(index: f64) -> Self {
        BANDS
            .iter()
            .find(|(upper, _)| index < *upper)
            .map_or(Self::Extreme, |(_, category)| *category)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very high",
            Self::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for UvCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
