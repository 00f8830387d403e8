//! Payment webhook models
//!
//! Shapes of the payment-provider callback. Field names follow the
//! provider's camelCase wire format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Purchased product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(example = "4b8ec623-d0d0-4ce2-90bf-e442f4095153")]
    pub id: String,
    #[schema(example = "Subscription 1243547918")]
    pub title: String,
}

/// Paying customer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Buyer {
    #[schema(example = "buyer@example.com")]
    pub email: String,
}

/// Payment event delivered by the payment provider.
///
/// Every field except `chat_id` is required. Unknown fields such as
/// `parentContractId` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEvent {
    #[schema(example = "payment.success")]
    pub event_type: String,
    pub product: Product,
    pub buyer: Buyer,
    #[schema(example = "f2bda49a-2076-4dd7-acee-0cc74a699816")]
    pub contract_id: String,
    /// Accepts a JSON number or a numeric string, keeping the digits as sent
    #[schema(value_type = f64, example = 50.0)]
    pub amount: Decimal,
    #[schema(example = "RUB")]
    pub currency: String,
    #[schema(example = "2025-03-20T02:01:46.119475Z")]
    pub timestamp: String,
    #[schema(example = "subscription-active")]
    pub status: String,
    pub error_message: String,
    /// Overrides the configured default chat when present and non-empty
    #[serde(rename = "chat_id", default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

impl PaymentEvent {
    /// Chat id from the payload when it is a non-empty string, passed through unchanged
    pub fn requested_chat_id(&self) -> Option<&str> {
        self.chat_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Acknowledgement returned by both webhooks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct WebhookAck {
    #[schema(example = "ok")]
    pub status: String,
}

impl WebhookAck {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
