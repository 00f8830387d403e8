// Data models and DTOs
// Inbound webhook payloads and outbound notification bodies

pub mod notification;
pub mod payment;
pub mod telegram;

pub use notification::{OutboundNotification, ParseMode};
pub use payment::{Buyer, PaymentEvent, Product, WebhookAck};
pub use telegram::{EchoRequest, TelegramUpdate};
