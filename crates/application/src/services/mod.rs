//! Application services - Use case implementations

mod command_service;
mod reply;
pub mod reply_formatter;
mod weather_service;

pub use command_service::CommandService;
pub use reply::{Embed, EmbedField, Reply};
pub use weather_service::{
    MAX_FORECAST_DAYS, MIN_FORECAST_DAYS, WeatherService, clamp_forecast_days,
};
