//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the Open-Meteo client and
//! provides configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, DiscordConfig, LogFormat, LoggingConfig, ServerConfig, WeatherSettings,
};
pub use telemetry::{TelemetryError, init_logging};
