//! Reply model
//!
//! Platform-neutral message returned by command handling. The Discord
//! integration converts it to its wire embed; the CLI prints it as text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reply to a bot command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Embed(Embed),
    Text { content: String },
}

impl Reply {
    /// Plain text reply
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Render the reply for a terminal
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Text { content } => content.clone(),
            Self::Embed(embed) => embed.to_plain_text(),
        }
    }

    /// The embed, if this reply carries one
    #[must_use]
    pub const fn as_embed(&self) -> Option<&Embed> {
        match self {
            Self::Embed(embed) => Some(embed),
            Self::Text { .. } => None,
        }
    }
}

impl From<Embed> for Reply {
    fn from(embed: Embed) -> Self {
        Self::Embed(embed)
    }
}

/// A name/value pair shown inside an embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

/// Rich message card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    /// 24-bit RGB color
    pub color: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Embed {
    /// Start an embed with a title and color
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields: Vec::new(),
            color,
            footer: None,
            image_url: None,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append an inline field
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: true,
        });
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    #[must_use]
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Find a field by name
    #[must_use]
    pub fn find_field(&self, name: &str) -> Option<&EmbedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Render as plain text, stripping markdown emphasis
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut lines = vec![self.title.clone()];

        if let Some(ref description) = self.description {
            lines.push(strip_emphasis(description));
        }

        if !self.fields.is_empty() {
            lines.push(String::new());
            for field in &self.fields {
                let value = strip_emphasis(&field.value).replace('\n', " - ");
                lines.push(format!("{}: {value}", field.name));
            }
        }

        if let Some(ref url) = self.image_url {
            lines.push(String::new());
            lines.push(url.clone());
        }

        if let Some(ref footer) = self.footer {
            lines.push(String::new());
            lines.push(footer.clone());
        }

        lines.join("\n")
    }
}

fn strip_emphasis(text: &str) -> String {
    text.replace("**", "")
}
