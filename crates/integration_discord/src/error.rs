//! Discord integration errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing option: {0}")]
    MissingOption(&'static str),

    #[error("No city name found in the message")]
    NoCityInMessage,
}

impl DiscordError {
    /// Text shown to the invoking user for command conversion failures
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownCommand(name) => format!("❌ Unknown command: {name}"),
            Self::MissingOption(name) => format!("❌ Missing required option: {name}"),
            Self::NoCityInMessage => "❌ No city name found in the message.".to_string(),
            _ => "❌ Something went wrong. Please try again later.".to_string(),
        }
    }
}
