//! Telegram update models
//!
//! Inbound updates are loosely typed: every level is optional so that
//! delivery receipts, edited messages and other callbacks deserialize
//! cleanly and are then ignored. The leaves the echo reads are kept as raw
//! JSON values, so a numeric text or a string chat id is still echoed.

use serde::Deserialize;
use serde_json::Value;

use crate::constants::telegram::DEFAULT_SENDER_NAME;

/// Top-level Telegram update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramUpdate {
    #[serde(default)]
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomingMessage {
    #[serde(default)]
    pub chat: Option<Chat>,
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub from: Option<Sender>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Chat {
    #[serde(default)]
    pub id: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sender {
    #[serde(default)]
    pub first_name: Option<Value>,
}

/// A text message that should be echoed back to its chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoRequest {
    pub chat_id: String,
    pub text: String,
    pub sender_name: String,
}

impl TelegramUpdate {
    /// Parse a raw webhook body. Anything that is not a JSON object of the
    /// expected shape yields `None`.
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// Extract an echo request when the update carries a non-empty text
    /// message with a chat id.
    pub fn echo_request(self) -> Option<EchoRequest> {
        let message = self.message?;
        let text = message.text.and_then(scalar_text)?;
        let chat_id = message.chat?.id.and_then(scalar_text)?;
        let sender_name = message
            .from
            .and_then(|from| from.first_name)
            .and_then(scalar_text)
            .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string());

        Some(EchoRequest {
            chat_id,
            text,
            sender_name,
        })
    }
}

/// Text form of a string or number leaf; empty strings and other JSON types yield `None`
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
