//! Outbound message payloads
//!
//! Wire form of replies, shared by interaction responses and follow-up
//! edits of the original response.

use application::{Embed, Reply};
use serde::Serialize;

use crate::interaction::EPHEMERAL_FLAG;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MessagePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<WireEmbed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl MessagePayload {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Payload for a rendered reply
    ///
    /// Embeds clear any placeholder content; text replies clear embeds so
    /// an edit fully replaces the deferred message.
    pub fn from_reply(reply: &Reply) -> Self {
        match reply {
            Reply::Text { content } => Self {
                content: Some(content.clone()),
                embeds: Some(Vec::new()),
                flags: None,
            },
            Reply::Embed(embed) => Self {
                content: Some(String::new()),
                embeds: Some(vec![WireEmbed::from(embed)]),
                flags: None,
            },
        }
    }

    #[must_use]
    pub const fn ephemeral(mut self) -> Self {
        self.flags = Some(EPHEMERAL_FLAG);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WireEmbed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<WireField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<WireFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<WireImage>,
    /// ISO 8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireFooter {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireImage {
    pub url: String,
}

impl From<&Embed> for WireEmbed {
    fn from(embed: &Embed) -> Self {
        Self {
            title: embed.title.clone(),
            description: embed.description.clone(),
            color: embed.color,
            fields: embed
                .fields
                .iter()
                .map(|f| WireField {
                    name: f.name.clone(),
                    value: f.value.clone(),
                    inline: f.inline,
                })
                .collect(),
            footer: embed.footer.clone().map(|text| WireFooter { text }),
            image: embed.image_url.clone().map(|url| WireImage { url }),
            timestamp: embed.timestamp.map(|t| t.to_rfc3339()),
        }
    }
}
