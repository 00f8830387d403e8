//! Router configuration module

use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::app_state::AppState;
use crate::constants::server::REQUEST_TIMEOUT_SECS;
use crate::handlers::{health, payment_webhook, telegram_webhook};
use crate::middleware::request_logger_middleware;
use crate::openapi;

/// Build the application router.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .route("/webhook/payment", post(payment_webhook::payment_webhook))
        .route("/telegram/webhook", post(telegram_webhook::telegram_webhook))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(request_logger_middleware))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(REQUEST_TIMEOUT_SECS),
                )),
        )
        .with_state(app_state)
}
