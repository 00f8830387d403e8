use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Fixed greeting served at the root path
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IndexResponse {
    #[schema(example = "Hello World")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
    /// Whether a bot token is present; the token itself is never exposed
    pub bot_token_configured: bool,
    pub default_chat_configured: bool,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Greeting", body = IndexResponse)
    )
)]
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Hello World".to_string(),
    })
}

/// Basic health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let telegram = &state.config.telegram;

    Json(HealthStatus {
        status: if telegram.bot_token.is_some() {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        bot_token_configured: telegram.bot_token.is_some(),
        default_chat_configured: telegram.default_chat_id.is_some(),
    })
}
