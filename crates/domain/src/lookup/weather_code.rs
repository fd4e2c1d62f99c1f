//! WMO weather interpretation codes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use super::colors;

/// A WMO weather code as reported by Open-Meteo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(i32);

/// Known codes and their descriptions
static DESCRIPTIONS: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snowfall"),
    (73, "Moderate snowfall"),
    (75, "Heavy snowfall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Code ranges mapped to a pictogram category, first match wins
static CATEGORIES: &[(RangeInclusive<i32>, WeatherCategory)] = &[
    (0..=0, WeatherCategory::Clear),
    (1..=1, WeatherCategory::MainlyClear),
    (2..=2, WeatherCategory::PartlyCloudy),
    (3..=3, WeatherCategory::Overcast),
    (45..=45, WeatherCategory::Fog),
    (48..=48, WeatherCategory::Fog),
    (51..=57, WeatherCategory::Rain),
    (61..=67, WeatherCategory::Rain),
    (71..=77, WeatherCategory::Snow),
    (80..=82, WeatherCategory::RainShowers),
    (85..=86, WeatherCategory::SnowShowers),
    (95..=99, WeatherCategory::Thunderstorm),
];

/// Embed colors that do not depend on daylight
static COLORS: &[(RangeInclusive<i32>, u32)] = &[
    (95..=99, colors::DARK_RED),
    (80..=86, colors::BLUE),
    (51..=67, colors::NAVY),
    (71..=77, colors::WHITE),
];

impl WeatherCode {
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Raw numeric code
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Whether the code appears in the WMO description table
    #[must_use]
    pub fn is_known(self) -> bool {
        DESCRIPTIONS.iter().any(|(code, _)| *code == self.0)
    }

    /// Human-readable description, `"Unknown"` for undefined codes
    #[must_use]
    pub fn description(self) -> &'static str {
        DESCRIPTIONS
            .iter()
            .find(|(code, _)| *code == self.0)
            .map_or(UNKNOWN_DESCRIPTION, |(_, text)| text)
    }

    #[must_use]
    pub fn category(self) -> WeatherCategory {
        CATEGORIES
            .iter()
            .find(|(range, _)| range.contains(&self.0))
            .map_or(WeatherCategory::Unknown, |(_, category)| *category)
    }

    /// Pictogram for the code's category
    #[must_use]
    pub fn emoji(self) -> &'static str {
        self.category().emoji()
    }

    /// Embed color for this code
    ///
    /// Precipitation and storms have fixed colors; everything else is gold
    /// by day and purple by night.
    #[must_use]
    pub fn embed_color(self, is_day: bool) -> u32 {
        COLORS
            .iter()
            .find(|(range, _)| range.contains(&self.0))
            .map_or(
                if is_day { colors::GOLD } else { colors::PURPLE },
                |(_, color)| *color,
            )
    }
}

impl From<i32> for WeatherCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Coarse weather category used for pictograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCategory {
    Clear,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Rain,
    Snow,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    Unknown,
}

impl WeatherCategory {
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::MainlyClear => "🌤️",
            Self::PartlyCloudy => "⛅",
            Self::Overcast => "☁️",
            Self::Fog => "🌫️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::RainShowers => "🌦️",
            Self::SnowShowers => "🌨️",
            Self::Thunderstorm => "⛈️",
            Self::Unknown => "🌀",
        }
    }
}
