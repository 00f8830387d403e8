//! OpenAPI document for the HTTP surface

use axum::response::Json;
use utoipa::OpenApi;

use crate::handlers::{health, payment_webhook, telegram_webhook};
use crate::models::{Buyer, PaymentEvent, Product, WebhookAck};

#[derive(OpenApi)]
#[openapi(
    info(title = "Payment Notifier API", version = "0.1.0"),
    paths(
        health::index,
        health::health_check,
        payment_webhook::payment_webhook,
        telegram_webhook::telegram_webhook,
    ),
    components(schemas(
        PaymentEvent,
        Product,
        Buyer,
        WebhookAck,
        health::IndexResponse,
        health::HealthStatus,
    )),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "webhooks", description = "Inbound webhooks relayed to Telegram")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
