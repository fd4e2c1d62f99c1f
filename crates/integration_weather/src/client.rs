//! Open-Meteo client
//!
//! HTTP client for the Open-Meteo geocoding, forecast and air-quality APIs.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use domain::{
    AirQuality, Coordinate, CurrentConditions, ForecastSet, HourlyForecast, ResolvedLocation,
    WeatherAlert, WeatherHistory,
};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{AirQualityResponse, ArchiveResponse, ForecastResponse, GeocodingResponse};

/// Fields requested for current conditions
const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,\
precipitation,weather_code,cloud_cover,wind_speed_10m,wind_direction_10m,wind_gusts_10m,\
pressure_msl,uv_index,visibility,is_day";

/// Fields requested for daily aggregates
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

/// Fields requested from the archive API
const ARCHIVE_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,wind_speed_10m_max";

/// Days covered by a history request, before the end date
pub const HISTORY_SPAN_DAYS: u64 = 30;

/// Fields requested from the air-quality API
const AIR_QUALITY_FIELDS: &str =
    "us_aqi,pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,sulphur_dioxide,ozone";

/// Forecast length bounds accepted by the API
const MIN_FORECAST_DAYS: u32 = 1;
const MAX_FORECAST_DAYS: u32 = 16;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Geocoding returned no results
    #[error("Location not found: {0}")]
    NotFound(String),

    /// Successful response without an expected section or field
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Operation not offered by this provider
    #[error("{0} is not supported by Open-Meteo")]
    Unsupported(&'static str),
}

/// Open-Meteo client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Air-quality API base URL (default: <https://air-quality-api.open-meteo.com/v1>)
    #[serde(default = "default_air_quality_url")]
    pub air_quality_url: String,

    /// Historical archive API base URL (default: <https://archive-api.open-meteo.com/v1>)
    #[serde(default = "default_archive_url")]
    pub archive_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language for geocoding result names (default: en)
    #[serde(default = "default_language")]
    pub language: String,
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

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            geocoding_url: default_geocoding_url(),
            air_quality_url: default_air_quality_url(),
            archive_url: default_archive_url(),
            timeout_secs: default_timeout(),
            language: default_language(),
        }
    }
}

/// Weather client trait for geocoding and weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Resolve a place name to its best match
    async fn geocode(
        &self,
        name: &str,
        country: Option<&str>,
    ) -> Result<ResolvedLocation, WeatherError>;

    /// Conditions at the current instant
    async fn current(&self, coordinate: &Coordinate) -> Result<CurrentConditions, WeatherError>;

    /// Daily forecast; `days` is clamped to 1..=16
    async fn daily_forecast(
        &self,
        coordinate: &Coordinate,
        days: u32,
    ) -> Result<ForecastSet, WeatherError>;

    /// Current air quality
    async fn air_quality(&self, coordinate: &Coordinate) -> Result<AirQuality, WeatherError>;

    /// Hourly forecast
    async fn hourly_forecast(
        &self,
        coordinate: &Coordinate,
        hours: u32,
    ) -> Result<Vec<HourlyForecast>, WeatherError>;

    /// Active weather warnings
    async fn weather_alerts(&self, coordinate: &Coordinate)
    -> Result<Vec<WeatherAlert>, WeatherError>;

    /// Archived daily observations for the 30 days up to and including `end`
    async fn historical(
        &self,
        coordinate: &Coordinate,
        end: NaiveDate,
    ) -> Result<WeatherHistory, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Active configuration
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    fn clamp_days(days: u32) -> u32 {
        days.clamp(MIN_FORECAST_DAYS, MAX_FORECAST_DAYS)
    }

    fn coordinate_params(coordinate: &Coordinate) -> [(&'static str, String); 2] {
        [
            ("latitude", coordinate.latitude().to_string()),
            ("longitude", coordinate.longitude().to_string()),
        ]
    }

    /// Send a GET request and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        debug!(url = %url, "Sending Open-Meteo request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        Self::check_status(response)?
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    fn check_status(response: Response) -> Result<Response, WeatherError> {
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(response)
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn geocode(
        &self,
        name: &str,
        country: Option<&str>,
    ) -> Result<ResolvedLocation, WeatherError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeatherError::NotFound("empty location name".to_string()));
        }

        let mut query = vec![
            ("name", name.to_string()),
            ("count", "1".to_string()),
            ("language", self.config.language.clone()),
            ("format", "json".to_string()),
        ];
        if let Some(country) = country.map(str::trim).filter(|c| !c.is_empty()) {
            query.push(("countryCode", country.to_uppercase()));
        }

        let url = format!("{}/search", self.config.geocoding_url);
        let response: GeocodingResponse = self.get_json(&url, &query).await?;

        let first = response
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::NotFound(name.to_string()))?;

        first.into_location()
    }

    #[instrument(skip(self), fields(lat = %coordinate.latitude(), lon = %coordinate.longitude()))]
    async fn current(&self, coordinate: &Coordinate) -> Result<CurrentConditions, WeatherError> {
        let mut query = Self::coordinate_params(coordinate).to_vec();
        query.push(("current", CURRENT_FIELDS.to_string()));
        query.push(("timezone", "auto".to_string()));

        let url = format!("{}/forecast", self.config.base_url);
        let response: ForecastResponse = self.get_json(&url, &query).await?;

        response
            .current
            .ok_or_else(|| WeatherError::MissingData("current".to_string()))?
            .into_conditions(response.utc_offset_seconds)
    }

    #[instrument(skip(self), fields(lat = %coordinate.latitude(), lon = %coordinate.longitude()))]
    async fn daily_forecast(
        &self,
        coordinate: &Coordinate,
        days: u32,
    ) -> Result<ForecastSet, WeatherError> {
        let days = Self::clamp_days(days);

        let mut query = Self::coordinate_params(coordinate).to_vec();
        query.push(("daily", DAILY_FIELDS.to_string()));
        query.push(("forecast_days", days.to_string()));
        query.push(("timezone", "auto".to_string()));

        let url = format!("{}/forecast", self.config.base_url);
        let response: ForecastResponse = self.get_json(&url, &query).await?;

        let forecast = response
            .daily
            .ok_or_else(|| WeatherError::MissingData("daily".to_string()))?
            .into_forecast(*coordinate)?;
        debug!(requested = days, received = forecast.len(), "Parsed daily forecast");
        Ok(forecast)
    }

    #[instrument(skip(self), fields(lat = %coordinate.latitude(), lon = %coordinate.longitude()))]
    async fn air_quality(&self, coordinate: &Coordinate) -> Result<AirQuality, WeatherError> {
        let mut query = Self::coordinate_params(coordinate).to_vec();
        query.push(("current", AIR_QUALITY_FIELDS.to_string()));
        query.push(("timezone", "auto".to_string()));

        let url = format!("{}/air-quality", self.config.air_quality_url);
        let response: AirQualityResponse = self.get_json(&url, &query).await?;

        response
            .current
            .ok_or_else(|| WeatherError::MissingData("current".to_string()))?
            .into_air_quality()
    }

    async fn hourly_forecast(
        &self,
        _coordinate: &Coordinate,
        _hours: u32,
    ) -> Result<Vec<HourlyForecast>, WeatherError> {
        Err(WeatherError::Unsupported("Hourly forecast"))
    }

    async fn weather_alerts(
        &self,
        _coordinate: &Coordinate,
    ) -> Result<Vec<WeatherAlert>, WeatherError> {
        Err(WeatherError::Unsupported("Weather alerts"))
    }

    #[instrument(skip(self), fields(lat = %coordinate.latitude(), lon = %coordinate.longitude()))]
    async fn historical(
        &self,
        coordinate: &Coordinate,
        end: NaiveDate,
    ) -> Result<WeatherHistory, WeatherError> {
        let start = end - Days::new(HISTORY_SPAN_DAYS);

        let mut query = Self::coordinate_params(coordinate).to_vec();
        query.push(("daily", ARCHIVE_FIELDS.to_string()));
        query.push(("start_date", start.format("%Y-%m-%d").to_string()));
        query.push(("end_date", end.format("%Y-%m-%d").to_string()));
        query.push(("timezone", "auto".to_string()));

        let url = format!("{}/archive", self.config.archive_url);
        let response: ArchiveResponse = self.get_json(&url, &query).await?;

        let history = response
            .daily
            .ok_or_else(|| WeatherError::MissingData("daily".to_string()))?
            .into_history(*coordinate, start, end)?;
        debug!(%start, %end, received = history.len(), "Parsed archive data");
        Ok(history)
    }
}
