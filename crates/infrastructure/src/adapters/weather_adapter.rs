//! Weather adapter - Implements GeocodingPort and WeatherPort using integration_weather

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{GeocodingPort, WeatherPort},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{
    AirQuality, Coordinate, CurrentConditions, ForecastSet, HourlyForecast, LocationQuery,
    ResolvedLocation, WeatherAlert, WeatherHistory,
};
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for the Open-Meteo geocoding, forecast, archive and air-quality APIs
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter").finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Wrap an existing weather client
    pub fn new(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Create an Open-Meteo backed adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::NotFound(name) => ApplicationError::NotFound(name),
            WeatherError::MissingData(e) | WeatherError::ParseError(e) => {
                ApplicationError::DataUnavailable(e)
            },
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::Transport(e),
            WeatherError::RateLimitExceeded => {
                ApplicationError::Transport("rate limit exceeded".to_string())
            },
            WeatherError::Unsupported(what) => ApplicationError::Unsupported(what.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %query.city))]
    async fn resolve(&self, query: &LocationQuery) -> Result<ResolvedLocation, ApplicationError> {
        let location = self
            .client
            .geocode(&query.city, query.country.as_deref())
            .await
            .map_err(Self::map_error)?;

        debug!(location = %location, "Resolved location");
        Ok(location)
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn current_conditions(
        &self,
        coordinate: &Coordinate,
    ) -> Result<CurrentConditions, ApplicationError> {
        let current = self
            .client
            .current(coordinate)
            .await
            .map_err(Self::map_error)?;

        debug!(
            temperature = current.temperature,
            code = current.weather_code.code(),
            "Retrieved current conditions"
        );
        Ok(current)
    }

    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn daily_forecast(
        &self,
        coordinate: &Coordinate,
        days: u32,
    ) -> Result<ForecastSet, ApplicationError> {
        let forecast = self
            .client
            .daily_forecast(coordinate, days)
            .await
            .map_err(Self::map_error)?;

        debug!(days = forecast.len(), "Retrieved daily forecast");
        Ok(forecast)
    }

    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn air_quality(&self, coordinate: &Coordinate) -> Result<AirQuality, ApplicationError> {
        let air = self
            .client
            .air_quality(coordinate)
            .await
            .map_err(Self::map_error)?;

        debug!(aqi = air.aqi, "Retrieved air quality");
        Ok(air)
    }

    async fn hourly_forecast(
        &self,
        coordinate: &Coordinate,
        hours: u32,
    ) -> Result<Vec<HourlyForecast>, ApplicationError> {
        self.client
            .hourly_forecast(coordinate, hours)
            .await
            .map_err(Self::map_error)
    }

    async fn weather_alerts(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Vec<WeatherAlert>, ApplicationError> {
        self.client
            .weather_alerts(coordinate)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn historical(
        &self,
        coordinate: &Coordinate,
        end: NaiveDate,
    ) -> Result<WeatherHistory, ApplicationError> {
        let history = self
            .client
            .historical(coordinate, end)
            .await
            .map_err(Self::map_error)?;

        debug!(days = history.len(), "Retrieved weather history");
        Ok(history)
    }
}
