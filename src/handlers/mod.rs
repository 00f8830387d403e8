// HTTP request handlers

pub mod extractors;
pub mod health;
pub mod payment_webhook;
pub mod telegram_webhook;

pub use extractors::PayloadJson;
