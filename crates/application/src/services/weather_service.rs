//! Weather service
//!
//! Resolves a location, then fetches weather data for it. Every call is a
//! fresh, strictly sequential pair of round trips.

use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use domain::{
    AirQuality, CurrentConditions, ForecastSet, LocationQuery, ResolvedLocation, WeatherAlert,
    WeatherHistory,
};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, WeatherPort},
};

/// Fewest forecast days the provider accepts
pub const MIN_FORECAST_DAYS: u32 = 1;
/// Most forecast days the provider accepts
pub const MAX_FORECAST_DAYS: u32 = 16;

/// Clamp a requested forecast length to the supported range
#[must_use]
pub fn clamp_forecast_days(days: u32) -> u32 {
    days.clamp(MIN_FORECAST_DAYS, MAX_FORECAST_DAYS)
}

/// Weather use cases over a geocoder and a weather provider
pub struct WeatherService {
    geocoding: Arc<dyn GeocodingPort>,
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    pub fn new(geocoding: Arc<dyn GeocodingPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self { geocoding, weather }
    }

    /// Resolve a place name to a location
    ///
    /// A blank city fails with `NotFound` without calling the geocoder.
    #[instrument(skip(self), fields(city = %query.city))]
    pub async fn locate(&self, query: &LocationQuery) -> Result<ResolvedLocation, ApplicationError> {
        if query.is_blank() {
            return Err(ApplicationError::NotFound("empty location".to_string()));
        }
        let location = self.geocoding.resolve(query).await?;
        debug!(location = %location, coordinate = %location.coordinate(), "Resolved location");
        Ok(location)
    }

    /// Current conditions at a place
    #[instrument(skip(self), fields(city = %query.city))]
    pub async fn current(
        &self,
        query: &LocationQuery,
    ) -> Result<(ResolvedLocation, CurrentConditions), ApplicationError> {
        let location = self.locate(query).await?;
        let current = self
            .weather
            .current_conditions(location.coordinate())
            .await?;
        Ok((location, current))
    }

    /// Daily forecast, with `days` clamped to 1..=16
    #[instrument(skip(self), fields(city = %query.city))]
    pub async fn forecast(
        &self,
        query: &LocationQuery,
        days: u32,
    ) -> Result<(ResolvedLocation, ForecastSet), ApplicationError> {
        let clamped = clamp_forecast_days(days);
        if clamped != days {
            debug!(requested = days, clamped, "Clamped forecast days");
        }
        let location = self.locate(query).await?;
        let forecast = self
            .weather
            .daily_forecast(location.coordinate(), clamped)
            .await?;
        info!(days = forecast.len(), "Fetched forecast");
        Ok((location, forecast))
    }

    /// Current air quality at a place
    #[instrument(skip(self), fields(city = %query.city))]
    pub async fn air_quality(
        &self,
        query: &LocationQuery,
    ) -> Result<(ResolvedLocation, AirQuality), ApplicationError> {
        let location = self.locate(query).await?;
        let air_quality = self.weather.air_quality(location.coordinate()).await?;
        Ok((location, air_quality))
    }

    /// Archived observations for the 30 days up to `end`
    #[instrument(skip(self), fields(city = %query.city))]
    pub async fn history(
        &self,
        query: &LocationQuery,
        end: NaiveDate,
    ) -> Result<(ResolvedLocation, WeatherHistory), ApplicationError> {
        let location = self.locate(query).await?;
        let history = self.weather.historical(location.coordinate(), end).await?;
        info!(days = history.len(), "Fetched weather history");
        Ok((location, history))
    }

    /// Active weather alerts at a place
    ///
    /// A provider without alert support yields an empty list. Any other
    /// failure propagates.
    #[instrument(skip(self), fields(city = %query.city))]
    pub async fn alerts(
        &self,
        query: &LocationQuery,
    ) -> Result<(ResolvedLocation, Vec<WeatherAlert>), ApplicationError> {
        let location = self.locate(query).await?;
        match self.weather.weather_alerts(location.coordinate()).await {
            Ok(alerts) => Ok((location, alerts)),
            Err(ApplicationError::Unsupported(what)) => {
                debug!(%what, "Alerts not supported by provider");
                Ok((location, Vec::new()))
            },
            Err(e) => Err(e),
        }
    }
}
