//! WeatherBot HTTP presentation layer
//!
//! Serves the Discord interactions webhook and a small JSON command API.

pub mod cooldown;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use cooldown::CooldownTracker;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
