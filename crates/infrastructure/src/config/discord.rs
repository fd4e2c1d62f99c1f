//! Discord application configuration.

use std::fmt;

use integration_discord::DiscordClientConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Discord application configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Application (client) ID
    #[serde(default)]
    pub application_id: Option<String>,

    /// Hex-encoded Ed25519 public key used to verify interaction requests
    #[serde(default)]
    pub public_key: Option<String>,

    /// Bot token for command registration (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub bot_token: Option<SecretString>,

    /// Register commands in this guild only (instant update, useful while testing)
    #[serde(default)]
    pub guild_id: Option<String>,

    /// REST API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-user cooldown for the alert command in seconds (default: 30)
    #[serde(default = "default_alert_cooldown")]
    pub alert_cooldown_secs: u64,

    /// REST request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("application_id", &self.application_id)
            .field("public_key", &self.public_key)
            .field(
                "bot_token",
                &if self.bot_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("guild_id", &self.guild_id)
            .field("api_base_url", &self.api_base_url)
            .field("alert_cooldown_secs", &self.alert_cooldown_secs)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_api_base_url() -> String {
    "https://discord.com/api/v10".to_string()
}

const fn default_alert_cooldown() -> u64 {
    30
}

const fn default_timeout() -> u64 {
    10
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            application_id: None,
            public_key: None,
            bot_token: None,
            guild_id: None,
            api_base_url: default_api_base_url(),
            alert_cooldown_secs: default_alert_cooldown(),
            timeout_secs: default_timeout(),
        }
    }
}

impl DiscordConfig {
    /// REST client configuration, if an application ID is set
    ///
    /// Editing an interaction reply authenticates with the interaction token,
    /// so the bot token is only needed for command registration.
    pub fn client_config(&self) -> Option<DiscordClientConfig> {
        let application_id = self
            .application_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())?;

        Some(DiscordClientConfig {
            api_base_url: self.api_base_url.clone(),
            application_id: application_id.to_string(),
            bot_token: self
                .bot_token
                .as_ref()
                .map(|token| token.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
        })
    }

    /// Use `token` when no bot token was configured
    pub(crate) fn fill_bot_token(&mut self, token: Option<String>) {
        if self.bot_token.is_none() {
            self.bot_token = token
                .filter(|t| !t.trim().is_empty())
                .map(SecretString::from);
        }
    }
}
