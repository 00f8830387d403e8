//! Telegram Bot API delivery

pub mod client;

pub use client::TelegramClient;

use thiserror::Error;

/// Why a notification could not be delivered
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Telegram bot token is not configured")]
    MissingToken,

    #[error("No destination chat: payload has no chat_id and no default chat is configured")]
    MissingDestination,

    #[error("Telegram API error: {body}")]
    Upstream { status: u16, body: String },

    #[error("Telegram API request timed out")]
    Timeout,

    #[error("Telegram API request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl DeliveryError {
    /// Configuration problems are detected before any network call
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DeliveryError::MissingToken | DeliveryError::MissingDestination
        )
    }
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DeliveryError::Timeout
        } else {
            DeliveryError::Transport(err)
        }
    }
}
