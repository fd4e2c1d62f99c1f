//! Application state shared across handlers

use std::{sync::Arc, time::Duration};

use application::CommandService;
use integration_discord::{DiscordClient, SignatureVerifier};

use crate::cooldown::CooldownTracker;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Executes bot commands
    pub commands: CommandService,
    /// Interaction signature verifier; `None` disables the interactions endpoint
    pub verifier: Option<Arc<SignatureVerifier>>,
    /// REST client for deferred follow-ups; `None` renders replies inline
    pub discord: Option<Arc<DiscordClient>>,
    /// Cooldown for the alert command
    pub alert_cooldown: Arc<CooldownTracker>,
}

impl AppState {
    pub fn new(commands: CommandService, alert_cooldown: Duration) -> Self {
        Self {
            commands,
            verifier: None,
            discord: None,
            alert_cooldown: Arc::new(CooldownTracker::new(alert_cooldown)),
        }
    }

    #[must_use]
    pub fn with_verifier(mut self, verifier: SignatureVerifier) -> Self {
        self.verifier = Some(Arc::new(verifier));
        self
    }

    #[must_use]
    pub fn with_discord_client(mut self, client: DiscordClient) -> Self {
        self.discord = Some(Arc::new(client));
        self
    }
}
