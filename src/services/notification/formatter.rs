//! Rendering of notification texts

use crate::constants::payment_message::{
    AMOUNT_LABEL, BUYER_LABEL, CONTRACT_LABEL, HEADER, PRODUCT_LABEL, STATUS_LABEL, TIME_LABEL,
};
use crate::constants::telegram::ECHO_PREFIX;
use crate::models::PaymentEvent;

/// Render a payment event as a Telegram Markdown message.
///
/// The header always reports success; `eventType` and `status` do not
/// change it. `status` is only echoed on the last line.
pub fn format_payment_message(event: &PaymentEvent) -> String {
    [
        HEADER.to_string(),
        format!("{} `{} {}`", AMOUNT_LABEL, event.amount, event.currency),
        format!("{} {}", PRODUCT_LABEL, event.product.title),
        format!("{} {}", BUYER_LABEL, event.buyer.email),
        format!("{} `{}`", CONTRACT_LABEL, event.contract_id),
        format!("{} `{}`", TIME_LABEL, event.timestamp),
        format!("{} {}", STATUS_LABEL, event.status),
    ]
    .join("\n")
}

/// Reply text for the echo bot
pub fn format_echo_reply(text: &str) -> String {
    format!("{}{}", ECHO_PREFIX, text)
}
