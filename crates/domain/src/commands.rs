//! Bot commands - Strongly typed representations of user requests

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Cities recognised in message text by the context-menu command
static KNOWN_CITIES: &[&str] = &[
    "Hanoi",
    "Ho Chi Minh",
    "Da Nang",
    "Hue",
    "Nha Trang",
    "Dalat",
    "Sa Pa",
];

/// A free-text place name with an optional ISO country-code hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationQuery {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl LocationQuery {
    /// Create a query, trimming whitespace and dropping a blank country hint
    #[must_use]
    pub fn new(city: impl Into<String>, country: Option<String>) -> Self {
        Self {
            city: city.into().trim().to_string(),
            country: country
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        }
    }

    /// Find a known city mentioned in free text
    ///
    /// Matching is case-insensitive; the first entry of the city list that
    /// occurs in `text` wins.
    #[must_use]
    pub fn from_message_text(text: &str) -> Option<Self> {
        let haystack = text.to_lowercase();
        KNOWN_CITIES
            .iter()
            .find(|city| haystack.contains(&city.to_lowercase()))
            .map(|city| Self::new(*city, None))
    }

    /// Whether the city name is empty after trimming
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.city.trim().is_empty()
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}, {country}", self.city),
            None => f.write_str(&self.city),
        }
    }
}

/// Map overlay rendered by the weather map command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapLayer {
    #[default]
    Clouds,
    Temperature,
    Precipitation,
    Pressure,
    Wind,
}

impl MapLayer {
    pub const ALL: [Self; 5] = [
        Self::Clouds,
        Self::Temperature,
        Self::Precipitation,
        Self::Pressure,
        Self::Wind,
    ];

    /// Path segment used by the map image URL
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Clouds => "clouds",
            Self::Temperature => "temperature",
            Self::Precipitation => "precipitation",
            Self::Pressure => "pressure",
            Self::Wind => "wind",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Clouds => "Clouds",
            Self::Temperature => "Temperature",
            Self::Precipitation => "Precipitation",
            Self::Pressure => "Pressure",
            Self::Wind => "Wind",
        }
    }

    /// Parse a layer slug; unrecognized values fall back to temperature
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        let slug = slug.trim();
        Self::ALL
            .into_iter()
            .find(|layer| layer.slug().eq_ignore_ascii_case(slug))
            .unwrap_or(Self::Temperature)
    }
}

impl fmt::Display for MapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// All commands the bot can execute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommand {
    /// Current conditions, optionally with cloud cover, gusts and pressure
    CurrentWeather {
        location: LocationQuery,
        #[serde(default)]
        detailed: bool,
    },

    /// Daily forecast for 1 to 16 days
    Forecast {
        location: LocationQuery,
        #[serde(default = "default_forecast_days")]
        days: u32,
    },

    AirQuality { location: LocationQuery },

    /// Link to a weather map image centred on the location
    WeatherMap {
        location: LocationQuery,
        #[serde(default)]
        layer: MapLayer,
    },

    WeatherAlert { location: LocationQuery },

    /// Compact current conditions for a city found in a message
    QuickWeather { location: LocationQuery },

    /// Archived observations for the 30 days up to `date` (default: today)
    History {
        location: LocationQuery,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<NaiveDate>,
    },
}

const fn default_forecast_days() -> u32 {
    7
}

impl BotCommand {
    /// Location every command targets
    #[must_use]
    pub const fn location(&self) -> &LocationQuery {
        match self {
            Self::CurrentWeather { location, .. }
            | Self::Forecast { location, .. }
            | Self::AirQuality { location }
            | Self::WeatherMap { location, .. }
            | Self::WeatherAlert { location }
            | Self::QuickWeather { location }
            | Self::History { location, .. } => location,
        }
    }

    /// Short name used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CurrentWeather { .. } => "weather",
            Self::Forecast { .. } => "forecast",
            Self::AirQuality { .. } => "airquality",
            Self::WeatherMap { .. } => "weathermap",
            Self::WeatherAlert { .. } => "weatheralert",
            Self::QuickWeather { .. } => "quickweather",
            Self::History { .. } => "history",
        }
    }

    /// Check that the command carries a usable location
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.location().is_blank() {
            return Err(DomainError::invalid_command(format!(
                "{} requires a city name",
                self.name()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hanoi() -> LocationQuery {
        LocationQuery::new("Hanoi", Some("VN".to_string()))
    }

    #[test]
    fn location_query_trims_input() {
        let query = LocationQuery::new("  Berlin ", Some("  ".to_string()));
        assert_eq!(query.city, "Berlin");
        assert_eq!(query.country, None);
        assert_eq!(query.to_string(), "Berlin");
        assert_eq!(hanoi().to_string(), "Hanoi, VN");
    }

    #[test]
    fn extracts_known_city_from_text() {
        let query = LocationQuery::from_message_text("heading to DA NANG tomorrow, bring an umbrella?")
            .expect("city found");
        assert_eq!(query.city, "Da Nang");
        assert!(LocationQuery::from_message_text("no place mentioned here").is_none());
    }

    #[test]
    fn extraction_prefers_list_order() {
        let query =
            LocationQuery::from_message_text("Sa Pa or Hanoi?").expect("city found");
        assert_eq!(query.city, "Hanoi");
    }

    #[test]
    fn map_layer_from_slug() {
        assert_eq!(MapLayer::from_slug("wind"), MapLayer::Wind);
        assert_eq!(MapLayer::from_slug("CLOUDS"), MapLayer::Clouds);
        assert_eq!(MapLayer::from_slug("radar"), MapLayer::Temperature);
        assert_eq!(MapLayer::default(), MapLayer::Clouds);
    }

    #[test]
    fn command_serializes_to_tagged_json() {
        let cmd = BotCommand::Forecast {
            location: hanoi(),
            days: 3,
        };
        let json = serde_json::to_value(&cmd).expect("serialize");
        assert_eq!(json["type"], "forecast");
        assert_eq!(json["location"]["city"], "Hanoi");
        assert_eq!(json["days"], 3);
    }

    #[test]
    fn command_defaults_when_deserializing() {
        let cmd: BotCommand =
            serde_json::from_str(r#"{"type":"forecast","location":{"city":"Oslo"}}"#)
                .expect("deserialize");
        assert_eq!(
            cmd,
            BotCommand::Forecast {
                location: LocationQuery::new("Oslo", None),
                days: 7,
            }
        );

        let cmd: BotCommand =
            serde_json::from_str(r#"{"type":"weather_map","location":{"city":"Oslo"}}"#)
                .expect("deserialize");
        assert!(matches!(
            cmd,
            BotCommand::WeatherMap {
                layer: MapLayer::Clouds,
                ..
            }
        ));
    }

    #[test]
    fn history_date_is_optional() {
        let cmd: BotCommand = serde_json::from_str(
            r#"{"type":"history","location":{"city":"Hue"},"date":"2024-05-31"}"#,
        )
        .expect("deserialize");
        assert_eq!(
            cmd,
            BotCommand::History {
                location: LocationQuery::new("Hue", None),
                date: NaiveDate::from_ymd_opt(2024, 5, 31),
            }
        );

        let cmd: BotCommand =
            serde_json::from_str(r#"{"type":"history","location":{"city":"Hue"}}"#)
                .expect("deserialize");
        assert!(matches!(cmd, BotCommand::History { date: None, .. }));
        assert_eq!(cmd.name(), "history");
    }

    #[test]
    fn validate_rejects_blank_city() {
        let cmd = BotCommand::AirQuality {
            location: LocationQuery::new("   ", None),
        };
        assert!(cmd.validate().is_err());

        let cmd = BotCommand::WeatherAlert { location: hanoi() };
        assert!(cmd.validate().is_ok());
        assert_eq!(cmd.name(), "weatheralert");
    }
}
