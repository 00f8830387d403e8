//! Outbound notification models

use serde::{Serialize, Serializer};

/// Telegram text formatting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// No markup; `parse_mode` is omitted from the request
    Plain,
    /// Legacy Telegram Markdown (`*bold*`, `` `code` ``)
    #[default]
    Markdown,
}

impl ParseMode {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            ParseMode::Plain => None,
            ParseMode::Markdown => Some("Markdown"),
        }
    }

    fn is_plain(&self) -> bool {
        matches!(self, ParseMode::Plain)
    }
}

impl Serialize for ParseMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(mode) => serializer.serialize_str(mode),
            None => serializer.serialize_none(),
        }
    }
}

/// A single message to deliver. Serializes to the `sendMessage` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundNotification {
    pub chat_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "ParseMode::is_plain")]
    pub parse_mode: ParseMode,
}

impl OutboundNotification {
    pub fn markdown(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: ParseMode::Markdown,
        }
    }

    pub fn plain(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: ParseMode::Plain,
        }
    }
}
