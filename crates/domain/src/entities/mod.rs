//! Domain entities - Immutable weather snapshots
//!
//! Every record here is built once from an upstream response and never
//! mutated afterwards.

mod weather;

pub use weather::{
    AirQuality, CurrentConditions, DailyForecast, ForecastSet, HistoricalDay, HourlyForecast,
    WeatherAlert, WeatherHistory,
};
