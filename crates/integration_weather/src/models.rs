//! Open-Meteo wire models
//!
//! Every value is optional on the wire. Conversion into domain records
//! fails on the first missing field instead of substituting defaults.

use chrono::{NaiveDate, NaiveDateTime};
use domain::{
    AirQuality, Coordinate, CurrentConditions, DailyForecast, ForecastSet, HistoricalDay,
    ResolvedLocation, WeatherCode, WeatherHistory,
};
use serde::Deserialize;

use crate::client::WeatherError;

// ── Geocoding ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl GeocodingResult {
    pub fn into_location(self) -> Result<ResolvedLocation, WeatherError> {
        let coordinate = Coordinate::new(self.latitude, self.longitude)
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;
        Ok(ResolvedLocation::from_parts(
            coordinate,
            &self.name,
            self.admin1.as_deref(),
            self.country.as_deref(),
        ))
    }
}

// ── Forecast ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    pub utc_offset_seconds: i32,
    #[serde(default)]
    pub current: Option<CurrentData>,
    #[serde(default)]
    pub daily: Option<DailyData>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CurrentData {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub precipitation: Option<f64>,
    pub weather_code: Option<i32>,
    pub cloud_cover: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
    pub wind_gusts_10m: Option<f64>,
    pub pressure_msl: Option<f64>,
    pub uv_index: Option<f64>,
    pub visibility: Option<f64>,
    pub is_day: Option<i32>,
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, WeatherError> {
    value.ok_or_else(|| WeatherError::MissingData(field.to_string()))
}

impl CurrentData {
    pub fn into_conditions(self, utc_offset_seconds: i32) -> Result<CurrentConditions, WeatherError> {
        let time = require(self.time, "current.time")?;

        Ok(CurrentConditions {
            temperature: require(self.temperature_2m, "current.temperature_2m")?,
            feels_like: require(self.apparent_temperature, "current.apparent_temperature")?,
            humidity: require(self.relative_humidity_2m, "current.relative_humidity_2m")?,
            precipitation: require(self.precipitation, "current.precipitation")?,
            weather_code: WeatherCode::new(require(self.weather_code, "current.weather_code")?),
            cloud_cover: require(self.cloud_cover, "current.cloud_cover")?,
            wind_speed: require(self.wind_speed_10m, "current.wind_speed_10m")?,
            wind_direction: require(self.wind_direction_10m, "current.wind_direction_10m")?,
            wind_gusts: require(self.wind_gusts_10m, "current.wind_gusts_10m")?,
            pressure: require(self.pressure_msl, "current.pressure_msl")?,
            uv_index: require(self.uv_index, "current.uv_index")?,
            visibility: require(self.visibility, "current.visibility")?,
            is_day: require(self.is_day, "current.is_day")? == 1,
            observed_at: parse_local_time(&time)?,
            utc_offset_seconds,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DailyData {
    pub time: Option<Vec<String>>,
    pub weather_code: Option<Vec<Option<i32>>>,
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
}

impl DailyData {
    /// Zip the parallel arrays into one record per day
    ///
    /// Stops at the shortest array. A null entry inside an array fails the
    /// conversion.
    pub fn into_forecast(self, coordinate: Coordinate) -> Result<ForecastSet, WeatherError> {
        let time = require(self.time, "daily.time")?;
        let codes = require(self.weather_code, "daily.weather_code")?;
        let max = require(self.temperature_2m_max, "daily.temperature_2m_max")?;
        let min = require(self.temperature_2m_min, "daily.temperature_2m_min")?;

        let days = time
            .iter()
            .zip(codes)
            .zip(max)
            .zip(min)
            .enumerate()
            .map(|(i, (((date, code), max), min))| {
                Ok(DailyForecast {
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                        .map_err(|e| WeatherError::ParseError(format!("Invalid date {date}: {e}")))?,
                    weather_code: WeatherCode::new(require(
                        code,
                        &format!("daily.weather_code[{i}]"),
                    )?),
                    temperature_max: require(max, &format!("daily.temperature_2m_max[{i}]"))?,
                    temperature_min: require(min, &format!("daily.temperature_2m_min[{i}]"))?,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        Ok(ForecastSet { coordinate, days })
    }
}

// ── Archive ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct ArchiveResponse {
    #[serde(default)]
    pub daily: Option<ArchiveDailyData>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ArchiveDailyData {
    pub time: Option<Vec<String>>,
    pub weather_code: Option<Vec<Option<i32>>>,
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    pub precipitation_sum: Option<Vec<Option<f64>>>,
    pub wind_speed_10m_max: Option<Vec<Option<f64>>>,
}

impl ArchiveDailyData {
    /// Zip the parallel arrays into one record per observed day
    ///
    /// The archive lags a few days behind, leaving nulls at the end of the
    /// range. Days with any null value are skipped rather than failing.
    pub fn into_history(
        self,
        coordinate: Coordinate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<WeatherHistory, WeatherError> {
        let time = require(self.time, "daily.time")?;
        let codes = require(self.weather_code, "daily.weather_code")?;
        let max = require(self.temperature_2m_max, "daily.temperature_2m_max")?;
        let min = require(self.temperature_2m_min, "daily.temperature_2m_min")?;
        let rain = require(self.precipitation_sum, "daily.precipitation_sum")?;
        let wind = require(self.wind_speed_10m_max, "daily.wind_speed_10m_max")?;

        let mut days = Vec::with_capacity(time.len());
        for (((((date, code), max), min), rain), wind) in
            time.iter().zip(codes).zip(max).zip(min).zip(rain).zip(wind)
        {
            let (Some(code), Some(max), Some(min), Some(rain), Some(wind)) =
                (code, max, min, rain, wind)
            else {
                continue;
            };
            days.push(HistoricalDay {
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .map_err(|e| WeatherError::ParseError(format!("Invalid date {date}: {e}")))?,
                weather_code: WeatherCode::new(code),
                temperature_max: max,
                temperature_min: min,
                precipitation_sum: rain,
                wind_speed_max: wind,
            });
        }

        Ok(WeatherHistory {
            coordinate,
            start,
            end,
            days,
        })
    }
}

// ── Air quality ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct AirQualityResponse {
    #[serde(default)]
    pub current: Option<AirQualityData>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AirQualityData {
    pub time: Option<String>,
    pub us_aqi: Option<i32>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub carbon_monoxide: Option<f64>,
    pub nitrogen_dioxide: Option<f64>,
    pub sulphur_dioxide: Option<f64>,
    pub ozone: Option<f64>,
}

impl AirQualityData {
    pub fn into_air_quality(self) -> Result<AirQuality, WeatherError> {
        let time = require(self.time, "current.time")?;

        Ok(AirQuality {
            aqi: require(self.us_aqi, "current.us_aqi")?,
            pm2_5: require(self.pm2_5, "current.pm2_5")?,
            pm10: require(self.pm10, "current.pm10")?,
            carbon_monoxide: require(self.carbon_monoxide, "current.carbon_monoxide")?,
            nitrogen_dioxide: require(self.nitrogen_dioxide, "current.nitrogen_dioxide")?,
            sulphur_dioxide: require(self.sulphur_dioxide, "current.sulphur_dioxide")?,
            ozone: require(self.ozone, "current.ozone")?,
            observed_at: parse_local_time(&time)?,
        })
    }
}

/// Parse an Open-Meteo local timestamp (`2024-01-15T12:00`)
pub(crate) fn parse_local_time(s: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| WeatherError::ParseError(format!("Invalid datetime format: {s}")))
}
