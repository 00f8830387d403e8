//! Application constants and configuration values.
//!
//! Message wording and defaults live here so the formatter and handlers
//! share a single source.

/// Telegram Bot API constants
pub mod telegram {
    /// Public Bot API host
    pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

    /// Outbound request timeout when none is configured
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    /// Method used for every outbound notification
    pub const SEND_MESSAGE_METHOD: &str = "sendMessage";

    /// Name used when an inbound message has no `from.first_name`
    pub const DEFAULT_SENDER_NAME: &str = "Пользователь";

    /// Prefix of echo replies
    pub const ECHO_PREFIX: &str = "Эхо: ";
}

/// Payment notification template pieces
pub mod payment_message {
    pub const HEADER: &str = "*Платёж прошёл успешно!*";
    pub const AMOUNT_LABEL: &str = "💰 Сумма:";
    pub const PRODUCT_LABEL: &str = "📦 Продукт:";
    pub const BUYER_LABEL: &str = "📧 Покупатель:";
    pub const CONTRACT_LABEL: &str = "📄 Договор:";
    pub const TIME_LABEL: &str = "🕒 Время:";
    pub const STATUS_LABEL: &str = "✅ Статус:";
}

/// Server defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8000;

    /// Upper bound for handling one inbound request, outbound call included
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Header carrying the per-request id
    pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
}
