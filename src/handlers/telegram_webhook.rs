use axum::{body::Bytes, extract::State, response::Json};
use tracing::debug;

use crate::error::Result;
use crate::models::{TelegramUpdate, WebhookAck};
use crate::services::NotificationService;

/// Echo bot webhook.
///
/// Updates without a text message (delivery receipts, member changes,
/// malformed bodies) are acknowledged and dropped.
#[utoipa::path(
    post,
    path = "/telegram/webhook",
    tag = "webhooks",
    request_body(content = String, content_type = "application/json", description = "Raw Telegram update"),
    responses(
        (status = 200, description = "Update handled or ignored", body = WebhookAck),
        (status = 500, description = "Telegram delivery failed")
    )
)]
pub async fn telegram_webhook(
    State(notification_service): State<NotificationService>,
    body: Bytes,
) -> Result<Json<WebhookAck>> {
    let Some(request) = TelegramUpdate::parse(&body).and_then(TelegramUpdate::echo_request) else {
        debug!("Ignoring Telegram update without a text message");
        return Ok(Json(WebhookAck::ok()));
    };

    notification_service.echo(&request).await?;
    Ok(Json(WebhookAck::ok()))
}
