//! Interaction payloads
//!
//! Inbound interaction model and the responses sent back on the same
//! HTTP request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::embed::MessagePayload;

/// Message flag hiding a reply from everyone but the invoking user
pub const EPHEMERAL_FLAG: u64 = 1 << 6;

/// Kind of an inbound interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Other(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub application_id: String,
    #[serde(rename = "type")]
    pub interaction_type: u8,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub data: Option<CommandData>,
    #[serde(default)]
    pub guild_id: Option<String>,
    /// Present for guild invocations
    #[serde(default)]
    pub member: Option<Member>,
    /// Present for DM invocations
    #[serde(default)]
    pub user: Option<User>,
}

impl Interaction {
    pub fn kind(&self) -> InteractionType {
        InteractionType::from(self.interaction_type)
    }

    /// ID of the invoking user, wherever Discord put it
    pub fn user_id(&self) -> Option<&str> {
        self.member
            .as_ref()
            .and_then(|m| m.user.as_ref())
            .or(self.user.as_ref())
            .map(|u| u.id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// 1 = slash command, 3 = message context menu
    #[serde(rename = "type", default = "default_command_type")]
    pub command_type: u8,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub resolved: Option<ResolvedData>,
}

const fn default_command_type() -> u8 {
    1
}

impl CommandData {
    pub fn option(&self, name: &str) -> Option<&serde_json::Value> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .and_then(|o| o.value.as_ref())
    }

    /// Content of the message a context-menu command targets
    pub fn target_message_content(&self) -> Option<&str> {
        let target = self.target_id.as_deref()?;
        self.resolved
            .as_ref()?
            .messages
            .get(target)
            .map(|m| m.content.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(rename = "type")]
    pub option_type: u8,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolvedData {
    #[serde(default)]
    pub messages: HashMap<String, ResolvedMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedMessage {
    pub id: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
}

/// Response to an interaction, sent as the HTTP response body
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub response_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessagePayload>,
}

impl InteractionResponse {
    /// Acknowledge a ping
    pub const fn pong() -> Self {
        Self {
            response_type: 1,
            data: None,
        }
    }

    /// Reply with a message immediately
    pub const fn message(payload: MessagePayload) -> Self {
        Self {
            response_type: 4,
            data: Some(payload),
        }
    }

    /// Acknowledge now and edit the original response later
    pub fn deferred(ephemeral: bool) -> Self {
        Self {
            response_type: 5,
            data: ephemeral.then(|| MessagePayload {
                flags: Some(EPHEMERAL_FLAG),
                ..MessagePayload::default()
            }),
        }
    }

    /// Text reply visible only to the invoking user
    pub fn ephemeral_text(content: impl Into<String>) -> Self {
        Self::message(MessagePayload::text(content).ephemeral())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ping() {
        let interaction: Interaction = serde_json::from_str(
            r#"{"id":"1","application_id":"42","type":1,"token":"t","version":1}"#,
        )
        .expect("deserialize");
        assert_eq!(interaction.kind(), InteractionType::Ping);
        assert!(interaction.user_id().is_none());
    }

    #[test]
    fn parses_slash_command_from_guild() {
        let interaction: Interaction = serde_json::from_value(serde_json::json!({
            "id": "1",
            "application_id": "42",
            "type": 2,
            "token": "tok",
            "guild_id": "99",
            "member": { "user": { "id": "555", "username": "alice" } },
            "data": {
                "id": "cmd",
                "name": "forecast",
                "type": 1,
                "options": [
                    { "name": "city", "type": 3, "value": "Hanoi" },
                    { "name": "days", "type": 4, "value": 5 }
                ]
            }
        }))
        .expect("deserialize");

        assert_eq!(interaction.kind(), InteractionType::ApplicationCommand);
        assert_eq!(interaction.user_id(), Some("555"));
        let data = interaction.data.expect("data");
        assert_eq!(data.option("city").and_then(|v| v.as_str()), Some("Hanoi"));
        assert_eq!(data.option("days").and_then(serde_json::Value::as_i64), Some(5));
        assert!(data.option("country").is_none());
    }

    #[test]
    fn dm_user_id() {
        let interaction: Interaction = serde_json::from_value(serde_json::json!({
            "id": "1", "application_id": "42", "type": 2, "token": "tok",
            "user": { "id": "777" }
        }))
        .expect("deserialize");
        assert_eq!(interaction.user_id(), Some("777"));
    }

    #[test]
    fn target_message_content() {
        let data: CommandData = serde_json::from_value(serde_json::json!({
            "id": "cmd",
            "name": "Weather from message",
            "type": 3,
            "target_id": "m1",
            "resolved": { "messages": { "m1": { "id": "m1", "content": "rain in Hue?" } } }
        }))
        .expect("deserialize");
        assert_eq!(data.target_message_content(), Some("rain in Hue?"));
    }

    #[test]
    fn response_shapes() {
        let pong = serde_json::to_value(InteractionResponse::pong()).expect("serialize");
        assert_eq!(pong, serde_json::json!({ "type": 1 }));

        let deferred = serde_json::to_value(InteractionResponse::deferred(false)).expect("serialize");
        assert_eq!(deferred, serde_json::json!({ "type": 5 }));

        let hidden = serde_json::to_value(InteractionResponse::deferred(true)).expect("serialize");
        assert_eq!(hidden["data"]["flags"], 64);

        let text =
            serde_json::to_value(InteractionResponse::ephemeral_text("slow down")).expect("serialize");
        assert_eq!(text["type"], 4);
        assert_eq!(text["data"]["content"], "slow down");
        assert_eq!(text["data"]["flags"], 64);
    }
}
