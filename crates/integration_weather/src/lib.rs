//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo geocoding, forecast, archive and air-quality APIs
//! (<https://open-meteo.com>). None of them require an API key.

pub mod client;
mod models;

pub use client::{HISTORY_SPAN_DAYS, OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
