pub mod formatter;

pub use formatter::{format_echo_reply, format_payment_message};

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::models::{EchoRequest, OutboundNotification, PaymentEvent};
use crate::services::telegram::DeliveryError;

/// Delivers one notification with a single attempt
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, notification: &OutboundNotification) -> Result<(), DeliveryError>;
}

/// Turns inbound events into outbound notifications
#[derive(Clone)]
pub struct NotificationService {
    sender: Arc<dyn MessageSender>,
    default_chat_id: Option<String>,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn MessageSender>, default_chat_id: Option<String>) -> Self {
        Self {
            sender,
            default_chat_id,
        }
    }

    /// Destination for a payment notification: the payload's chat id when
    /// set, otherwise the configured default.
    pub fn resolve_destination(&self, event: &PaymentEvent) -> Option<String> {
        event
            .requested_chat_id()
            .map(str::to_string)
            .or_else(|| self.default_chat_id.clone())
    }

    /// Format and deliver a payment notification
    pub async fn notify_payment(&self, event: &PaymentEvent) -> Result<(), DeliveryError> {
        let chat_id = self
            .resolve_destination(event)
            .ok_or(DeliveryError::MissingDestination)?;

        info!(
            event_type = %event.event_type,
            contract_id = %event.contract_id,
            status = %event.status,
            chat_id = %chat_id,
            "📬 Relaying payment event"
        );

        let notification = OutboundNotification::markdown(chat_id, format_payment_message(event));
        self.sender.send(&notification).await
    }

    /// Echo a chat message back to the chat it came from
    pub async fn echo(&self, request: &EchoRequest) -> Result<(), DeliveryError> {
        debug!(
            chat_id = %request.chat_id,
            sender = %request.sender_name,
            "Echoing Telegram message"
        );

        let notification = OutboundNotification::markdown(
            request.chat_id.clone(),
            format_echo_reply(&request.text),
        );
        self.sender.send(&notification).await
    }
}
