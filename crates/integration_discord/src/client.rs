//! Discord REST client
//!
//! Edits deferred interaction responses and registers application commands.

use std::{fmt, time::Duration};

use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::{commands::CommandDefinition, embed::MessagePayload, error::DiscordError};

/// Discord client configuration
#[derive(Clone)]
pub struct DiscordClientConfig {
    /// REST API base URL (default: <https://discord.com/api/v10>)
    pub api_base_url: String,
    pub application_id: String,
    /// Bot token, only needed for command registration
    pub bot_token: Option<String>,
    pub timeout_secs: u64,
}

impl fmt::Debug for DiscordClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordClientConfig")
            .field("api_base_url", &self.api_base_url)
            .field("application_id", &self.application_id)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for DiscordClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://discord.com/api/v10".to_string(),
            application_id: String::new(),
            bot_token: None,
            timeout_secs: 10,
        }
    }
}

/// Error body returned by the Discord API
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: String,
}

/// Registered command as echoed back by the API
#[derive(Debug, Deserialize)]
pub struct RegisteredCommand {
    pub id: String,
    pub name: String,
}

/// Client for the Discord REST API
#[derive(Debug, Clone)]
pub struct DiscordClient {
    client: Client,
    config: DiscordClientConfig,
}

impl DiscordClient {
    /// Create a new Discord client
    pub fn new(config: DiscordClientConfig) -> Result<Self, DiscordError> {
        if config.application_id.is_empty() {
            return Err(DiscordError::Configuration(
                "application_id is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn application_id(&self) -> &str {
        &self.config.application_id
    }

    /// Replace the original (deferred) response of an interaction
    #[instrument(skip(self, interaction_token, payload))]
    pub async fn edit_original_response(
        &self,
        interaction_token: &str,
        payload: &MessagePayload,
    ) -> Result<(), DiscordError> {
        let url = format!(
            "{}/webhooks/{}/{}/messages/@original",
            self.config.api_base_url, self.config.application_id, interaction_token
        );
        debug!("Editing original interaction response");

        let response = self.client.patch(url).json(payload).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Overwrite the application's commands, globally or for one guild
    #[instrument(skip(self, commands), fields(count = commands.len()))]
    pub async fn register_commands(
        &self,
        guild_id: Option<&str>,
        commands: &[CommandDefinition],
    ) -> Result<Vec<RegisteredCommand>, DiscordError> {
        let token = self
            .config
            .bot_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| DiscordError::Configuration("bot_token is required".to_string()))?;

        let url = match guild_id {
            Some(guild) => format!(
                "{}/applications/{}/guilds/{guild}/commands",
                self.config.api_base_url, self.config.application_id
            ),
            None => format!(
                "{}/applications/{}/commands",
                self.config.api_base_url, self.config.application_id
            ),
        };

        let response = self
            .client
            .put(url)
            .header(reqwest::header::AUTHORIZATION, format!("Bot {token}"))
            .json(commands)
            .send()
            .await?;

        let registered: Vec<RegisteredCommand> = Self::check(response).await?.json().await?;
        info!(
            registered = registered.len(),
            scope = guild_id.unwrap_or("global"),
            "Registered application commands"
        );
        Ok(registered)
    }

    async fn check(response: Response) -> Result<Response, DiscordError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ApiErrorResponse>()
            .await
            .map(|e| e.message)
            .unwrap_or_default();
        Err(DiscordError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
