//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{
    AirQuality, Coordinate, CurrentConditions, ForecastSet, HourlyForecast, WeatherAlert,
    WeatherHistory,
};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather data operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Conditions at the current instant
    async fn current_conditions(
        &self,
        coordinate: &Coordinate,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Daily aggregates for the next `days` days (1-16)
    async fn daily_forecast(
        &self,
        coordinate: &Coordinate,
        days: u32,
    ) -> Result<ForecastSet, ApplicationError>;

    /// Current US AQI and pollutant concentrations
    async fn air_quality(&self, coordinate: &Coordinate) -> Result<AirQuality, ApplicationError>;

    /// Hour-by-hour forecast
    async fn hourly_forecast(
        &self,
        coordinate: &Coordinate,
        hours: u32,
    ) -> Result<Vec<HourlyForecast>, ApplicationError>;

    /// Active weather warnings for the area
    async fn weather_alerts(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Vec<WeatherAlert>, ApplicationError>;

    /// Observed daily aggregates for the 30 days ending on `end`
    async fn historical(
        &self,
        coordinate: &Coordinate,
        end: NaiveDate,
    ) -> Result<WeatherHistory, ApplicationError>;
}
