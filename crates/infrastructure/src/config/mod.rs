//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `discord`: Discord application credentials and limits
//! - `weather`: Open-Meteo endpoints and defaults
//! - `logging`: Log filter and output format
//!
//! Sources are layered: built-in defaults, then an optional `config.toml`,
//! then `WEATHERBOT_*` environment variables (`__` separates nested keys,
//! e.g. `WEATHERBOT_SERVER__PORT=8080`).

mod discord;
mod logging;
mod server;
mod weather;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};

pub use discord::DiscordConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use weather::WeatherSettings;

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "WEATHERBOT";

/// Conventional variable holding the bot token
const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Discord configuration
    #[serde(default)]
    pub discord: DiscordConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            // Load from file if exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables (e.g., WEATHERBOT_DISCORD__PUBLIC_KEY)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config
            .discord
            .fill_bot_token(std::env::var(DISCORD_TOKEN_VAR).ok());
        Ok(config)
    }

    /// Parse configuration from TOML text layered over the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)
    }
}
