use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::constants::server::REQUEST_ID_HEADER;

tokio::task_local! {
    static REQUEST_ID: String;
}

/// Id assigned to the request being handled on this task, if any
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|id| id.clone()).ok()
}

/// Request logging middleware that logs all incoming requests and responses
pub async fn request_logger_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        "Incoming request"
    );

    // Webhook callers may attach a signature header; it is recorded, never checked
    debug!(
        request_id = %request_id,
        has_authorization = request.headers().contains_key(AUTHORIZATION),
        "Request headers"
    );

    let response = REQUEST_ID.scope(request_id.clone(), next.run(request)).await;

    let status = response.status();
    let duration = start.elapsed();

    match status {
        StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => {
            info!(
                request_id = %request_id,
                method = %method,
                uri = %uri,
                status = %status,
                duration_ms = %duration.as_millis(),
                "Request completed successfully"
            );
        }
        status if status.is_client_error() => {
            warn!(
                request_id = %request_id,
                method = %method,
                uri = %uri,
                status = %status,
                duration_ms = %duration.as_millis(),
                "Request failed with client error"
            );
        }
        status if status.is_server_error() => {
            error!(
                request_id = %request_id,
                method = %method,
                uri = %uri,
                status = %status,
                duration_ms = %duration.as_millis(),
                "Request failed with server error"
            );
        }
        _ => {
            debug!(
                request_id = %request_id,
                method = %method,
                uri = %uri,
                status = %status,
                duration_ms = %duration.as_millis(),
                "Request completed"
            );
        }
    }

    // Add request ID to response headers for tracing
    let (mut parts, body) = response.into_parts();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }

    Response::from_parts(parts, body)
}
