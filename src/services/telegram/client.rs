use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::DeliveryError;
use crate::config::TelegramConfig;
use crate::constants::telegram::SEND_MESSAGE_METHOD;
use crate::models::OutboundNotification;
use crate::services::notification::MessageSender;

/// Sends messages through the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    api_url: String,
    bot_token: Option<String>,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl TelegramClient {
    pub fn new(config: &TelegramConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
        }
    }

    /// `sendMessage` endpoint for the configured token
    fn send_message_url(&self, token: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, token, SEND_MESSAGE_METHOD)
    }
}

#[async_trait]
impl MessageSender for TelegramClient {
    async fn send(&self, notification: &OutboundNotification) -> Result<(), DeliveryError> {
        let token = self.bot_token.as_deref().ok_or(DeliveryError::MissingToken)?;

        debug!(
            chat_id = %notification.chat_id,
            parse_mode = ?notification.parse_mode,
            "Sending Telegram message"
        );

        let response = self
            .client
            .post(self.send_message_url(token))
            .json(notification)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(
                chat_id = %notification.chat_id,
                status = %status,
                body = %body,
                "Telegram API rejected message"
            );
            return Err(DeliveryError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        info!(chat_id = %notification.chat_id, "Telegram message delivered");
        Ok(())
    }
}
