//! US Air Quality Index bands

use serde::{Deserialize, Serialize};
use std::fmt;

use super::colors;

/// Health band of a US AQI reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Inclusive upper bounds, ascending; anything above the last is hazardous
static BANDS: &[(i32, AqiCategory)] = &[
    (50, AqiCategory::Good),
    (100, AqiCategory::Moderate),
    (150, AqiCategory::UnhealthyForSensitiveGroups),
    (200, AqiCategory::Unhealthy),
    (300, AqiCategory::VeryUnhealthy),
];

impl AqiCategory {
    /// Band containing `aqi`
    #[must_use]
    pub fn from_aqi(aqi: i32) -> Self {
        BANDS
            .iter()
            .find(|(upper, _)| aqi <= *upper)
            .map_or(Self::Hazardous, |(_, category)| *category)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for sensitive groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Self::Good => colors::GREEN,
            Self::Moderate => colors::YELLOW,
            Self::UnhealthyForSensitiveGroups => colors::ORANGE,
            Self::Unhealthy => colors::RED,
            Self::VeryUnhealthy => colors::DARK_RED,
            Self::Hazardous => colors::VERY_DARK_GRAY,
        }
    }

    /// Short legend of all bands, e.g. for reply footers
    #[must_use]
    pub fn legend() -> &'static str {
        "0-50: Good | 51-100: Moderate | 101-150: Sensitive | 151-200: Unhealthy | 201-300: Very unhealthy | 301+: Hazardous"
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
