//! Domain layer for WeatherBot
//!
//! Contains the weather snapshots, location value objects, WMO/AQI/UV/wind
//! lookup tables and the bot command vocabulary. This layer performs no I/O.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod lookup;
pub mod value_objects;

pub use commands::{BotCommand, LocationQuery, MapLayer};
pub use entities::*;
pub use errors::DomainError;
pub use lookup::{AqiCategory, CompassDirection, UvCategory, WeatherCategory, WeatherCode};
pub use value_objects::*;
