//! Weather entities
//!
//! Typed records decoded from the Open-Meteo forecast and air-quality APIs.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lookup::{AqiCategory, CompassDirection, UvCategory, WeatherCode};
use crate::value_objects::Coordinate;

/// Current weather at one observation instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature at 2m in °C
    pub temperature: f64,
    /// Apparent temperature in °C
    pub feels_like: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Precipitation in mm
    pub precipitation: f64,
    /// WMO weather code
    pub weather_code: WeatherCode,
    /// Total cloud cover in percent
    pub cloud_cover: f64,
    /// Wind speed at 10m in km/h
    pub wind_speed: f64,
    /// Wind direction at 10m in degrees
    pub wind_direction: f64,
    /// Wind gusts at 10m in km/h
    pub wind_gusts: f64,
    /// Mean sea level pressure in hPa
    pub pressure: f64,
    /// UV index
    pub uv_index: f64,
    /// Visibility in meters
    pub visibility: f64,
    /// Whether the observation falls in daylight
    pub is_day: bool,
    /// Observation time, local to the location
    pub observed_at: NaiveDateTime,
    /// Offset of the location's local time from UTC
    pub utc_offset_seconds: i32,
}

impl CurrentConditions {
    /// Observation time converted to UTC using the reported offset
    #[must_use]
    pub fn observed_at_utc(&self) -> DateTime<Utc> {
        let offset = chrono::Duration::seconds(i64::from(self.utc_offset_seconds));
        (self.observed_at - offset).and_utc()
    }

    /// Compass point the wind blows from, `None` for non-finite readings
    #[must_use]
    pub fn compass(&self) -> Option<CompassDirection> {
        CompassDirection::from_degrees(self.wind_direction)
    }

    /// UV exposure band
    #[must_use]
    pub fn uv_category(&self) -> UvCategory {
        UvCategory::from_index(self.uv_index)
    }

    /// Visibility converted to kilometers
    #[must_use]
    pub fn visibility_km(&self) -> f64 {
        self.visibility / 1000.0
    }
}

/// Daily aggregate for a single forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: WeatherCode,
    /// Maximum temperature in °C
    pub temperature_max: f64,
    /// Minimum temperature in °C
    pub temperature_min: f64,
}

/// A multi-day forecast for one coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSet {
    pub coordinate: Coordinate,
    /// Days in ascending order, as returned upstream
    pub days: Vec<DailyForecast>,
}

impl ForecastSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Observed daily aggregate from the weather archive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDay {
    pub date: NaiveDate,
    pub weather_code: WeatherCode,
    /// Maximum temperature in °C
    pub temperature_max: f64,
    /// Minimum temperature in °C
    pub temperature_min: f64,
    /// Precipitation sum in mm
    pub precipitation_sum: f64,
    /// Maximum wind speed at 10m in km/h
    pub wind_speed_max: f64,
}

/// Archived observations for a date range, ascending by date
///
/// Days the archive has not filled in yet are absent, so `days` may be
/// shorter than the requested range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherHistory {
    pub coordinate: Coordinate,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<HistoricalDay>,
}

impl WeatherHistory {
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Mean of the daily maxima
    #[must_use]
    pub fn mean_max(&self) -> Option<f64> {
        self.mean(|day| day.temperature_max)
    }

    /// Mean of the daily minima
    #[must_use]
    pub fn mean_min(&self) -> Option<f64> {
        self.mean(|day| day.temperature_min)
    }

    #[must_use]
    pub fn total_precipitation(&self) -> f64 {
        self.days.iter().map(|day| day.precipitation_sum).sum()
    }

    /// Day with the strongest wind
    #[must_use]
    pub fn windiest(&self) -> Option<&HistoricalDay> {
        self.days
            .iter()
            .max_by(|a, b| a.wind_speed_max.total_cmp(&b.wind_speed_max))
    }

    /// Days with measurable precipitation
    #[must_use]
    pub fn wet_days(&self) -> usize {
        self.days
            .iter()
            .filter(|day| day.precipitation_sum >= 0.1)
            .count()
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean(&self, value: impl Fn(&HistoricalDay) -> f64) -> Option<f64> {
        if self.days.is_empty() {
            return None;
        }
        Some(self.days.iter().map(value).sum::<f64>() / self.days.len() as f64)
    }
}

/// Air quality at one observation instant
///
/// Pollutant concentrations are in µg/m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    /// US Air Quality Index
    pub aqi: i32,
    pub pm2_5: f64,
    pub pm10: f64,
    pub carbon_monoxide: f64,
    pub nitrogen_dioxide: f64,
    pub sulphur_dioxide: f64,
    pub ozone: f64,
    pub observed_at: NaiveDateTime,
}

impl AirQuality {
    /// Health band of the index
    #[must_use]
    pub fn category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.aqi)
    }
}

/// One hour of an hourly forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: NaiveDateTime,
    pub weather_code: WeatherCode,
    pub temperature: f64,
    /// Probability of precipitation in percent
    pub precipitation_probability: f64,
}

/// An official weather warning for an area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub headline: String,
    pub description: String,
    pub severity: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_conditions() -> CurrentConditions {
        CurrentConditions {
            temperature: 28.4,
            feels_like: 31.2,
            humidity: 78.0,
            precipitation: 0.0,
            weather_code: WeatherCode::new(2),
            cloud_cover: 40.0,
            wind_speed: 11.5,
            wind_direction: 135.0,
            wind_gusts: 22.0,
            pressure: 1008.3,
            uv_index: 6.5,
            visibility: 24_140.0,
            is_day: true,
            observed_at: NaiveDate::from_ymd_opt(2024, 6, 1)
                .and_then(|d| d.and_hms_opt(14, 0, 0))
                .expect("valid timestamp"),
            utc_offset_seconds: 7 * 3600,
        }
    }

    #[test]
    fn derived_lookups() {
        let current = sample_conditions();
        assert_eq!(current.compass(), Some(CompassDirection::SouthEast));
        assert_eq!(current.uv_category(), UvCategory::High);
        assert!((current.visibility_km() - 24.14).abs() < 1e-9);
    }

    #[test]
    fn observation_time_in_utc() {
        let current = sample_conditions();
        assert_eq!(current.observed_at_utc().to_rfc3339(), "2024-06-01T07:00:00+00:00");
    }

    #[test]
    fn non_finite_wind_direction_has_no_compass() {
        let mut current = sample_conditions();
        current.wind_direction = f64::NAN;
        assert_eq!(current.compass(), None);
    }

    #[test]
    fn air_quality_category() {
        let aq = AirQuality {
            aqi: 120,
            pm2_5: 45.0,
            pm10: 60.0,
            carbon_monoxide: 300.0,
            nitrogen_dioxide: 20.0,
            sulphur_dioxide: 5.0,
            ozone: 80.0,
            observed_at: sample_conditions().observed_at,
        };
        assert_eq!(aq.category(), AqiCategory::UnhealthyForSensitiveGroups);
    }

    fn history_day(day: u32, max: f64, min: f64, rain: f64, wind: f64) -> HistoricalDay {
        HistoricalDay {
            date: NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date"),
            weather_code: WeatherCode::new(3),
            temperature_max: max,
            temperature_min: min,
            precipitation_sum: rain,
            wind_speed_max: wind,
        }
    }

    #[test]
    fn history_summary() {
        let history = WeatherHistory {
            coordinate: Coordinate::new(21.0, 105.8).expect("valid"),
            start: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
            end: NaiveDate::from_ymd_opt(2024, 5, 3).expect("valid date"),
            days: vec![
                history_day(1, 30.0, 22.0, 0.0, 12.0),
                history_day(2, 34.0, 24.0, 5.5, 31.0),
                history_day(3, 32.0, 26.0, 1.5, 18.0),
            ],
        };

        assert_eq!(history.mean_max(), Some(32.0));
        assert_eq!(history.mean_min(), Some(24.0));
        assert!((history.total_precipitation() - 7.0).abs() < 1e-9);
        assert_eq!(history.wet_days(), 2);
        assert_eq!(
            history.windiest().map(|day| day.date.to_string()),
            Some("2024-05-02".to_string())
        );
    }

    #[test]
    fn empty_history_has_no_means() {
        let history = WeatherHistory {
            coordinate: Coordinate::new(0.0, 0.0).expect("valid"),
            start: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
            end: NaiveDate::from_ymd_opt(2024, 5, 31).expect("valid date"),
            days: vec![],
        };
        assert!(history.is_empty());
        assert_eq!(history.mean_max(), None);
        assert!(history.windiest().is_none());
    }

    #[test]
    fn forecast_set_len() {
        let set = ForecastSet {
            coordinate: Coordinate::new(0.0, 0.0).expect("valid"),
            days: vec![],
        };
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
