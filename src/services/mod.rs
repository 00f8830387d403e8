pub mod notification;
pub mod telegram;

pub use notification::{MessageSender, NotificationService};
pub use telegram::{DeliveryError, TelegramClient};
