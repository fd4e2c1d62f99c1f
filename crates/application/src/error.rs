//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding returned no match
    #[error("Location not found: {0}")]
    NotFound(String),

    /// A successful response lacked an expected section or field
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Network failure or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Operation declared but not implemented by the provider
    #[error("Not supported: {0}")]
    Unsupported(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Message safe to show to chat users
    ///
    /// Never includes upstream URLs or response bodies.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => {
                "📍 Location not found. Check the city name and try again.".to_string()
            },
            Self::Domain(err) => format!("⚠️ {err}"),
            Self::Unsupported(what) => format!("🚧 {what} is not supported yet."),
            Self::DataUnavailable(_) | Self::Transport(_) => {
                "❌ Could not fetch weather data right now. Please try again later.".to_string()
            },
            Self::Configuration(_) | Self::Internal(_) => {
                "❌ Something went wrong on our side. Please try again later.".to_string()
            },
        }
    }

    /// Whether the error came from an upstream provider rather than the user
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::DataUnavailable(_) | Self::Transport(_))
    }
}
