//! Discord integration
//!
//! Receives slash-command interactions over HTTP, verifies their Ed25519
//! signatures, converts them to bot commands and talks to the Discord REST
//! API to deliver deferred replies and register commands.

pub mod client;
pub mod commands;
pub mod embed;
pub mod error;
pub mod interaction;
pub mod signature;

pub use client::{DiscordClient, DiscordClientConfig};
pub use commands::{CommandDefinition, command_definitions, parse_command};
pub use embed::{MessagePayload, WireEmbed};
pub use error::DiscordError;
pub use interaction::{Interaction, InteractionResponse, InteractionType};
pub use signature::SignatureVerifier;
