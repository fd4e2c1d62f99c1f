//! Open-Meteo settings.

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// Weather provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSettings {
    /// Forecast API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Geocoding API base URL
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Air-quality API base URL
    #[serde(default = "default_air_quality_url")]
    pub air_quality_url: String,

    /// Historical archive API base URL
    #[serde(default = "default_archive_url")]
    pub archive_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language for geocoding results
    #[serde(default = "default_language")]
    pub language: String,

    /// Forecast length used when a command does not specify one
    #[serde(default = "default_forecast_days")]
    pub default_forecast_days: u32,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_air_quality_url() -> String {
    "https://air-quality-api.open-meteo.com/v1".to_string()
}

fn default_archive_url() -> String {
    "https://archive-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

const fn default_forecast_days() -> u32 {
    7
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            geocoding_url: default_geocoding_url(),
            air_quality_url: default_air_quality_url(),
            archive_url: default_archive_url(),
            timeout_secs: default_timeout(),
            language: default_language(),
            default_forecast_days: default_forecast_days(),
        }
    }
}

impl From<&WeatherSettings> for WeatherConfig {
    fn from(settings: &WeatherSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            geocoding_url: settings.geocoding_url.clone(),
            air_quality_url: settings.air_quality_url.clone(),
            archive_url: settings.archive_url.clone(),
            timeout_secs: settings.timeout_secs,
            language: settings.language.clone(),
        }
    }
}
