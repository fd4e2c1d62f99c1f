//! Application layer - Use cases and orchestration
//!
//! Defines the geocoding and weather ports, the weather use cases and the
//! reply model rendered back to chat users.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
