use axum::{extract::State, response::Json};

use crate::error::Result;
use crate::handlers::extractors::PayloadJson;
use crate::models::{PaymentEvent, WebhookAck};
use crate::services::NotificationService;

/// Receive a payment event and relay it to Telegram.
///
/// The `Authorization` header some providers send is not inspected.
#[utoipa::path(
    post,
    path = "/webhook/payment",
    tag = "webhooks",
    request_body = PaymentEvent,
    responses(
        (status = 200, description = "Notification delivered", body = WebhookAck),
        (status = 422, description = "Payload does not match the payment event schema"),
        (status = 500, description = "Telegram delivery failed")
    )
)]
pub async fn payment_webhook(
    State(notification_service): State<NotificationService>,
    PayloadJson(event): PayloadJson<PaymentEvent>,
) -> Result<Json<WebhookAck>> {
    notification_service.notify_payment(&event).await?;
    Ok(Json(WebhookAck::ok()))
}
