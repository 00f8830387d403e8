use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use crate::middleware::current_request_id;
use crate::services::telegram::DeliveryError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation errors (3xxx)
    #[serde(rename = "VAL_3001")]
    InvalidInput,
    #[serde(rename = "VAL_3002")]
    MissingRequiredField,
    #[serde(rename = "VAL_3003")]
    InvalidFormat,
    #[serde(rename = "VAL_3005")]
    InvalidAmount,

    // External service errors (8xxx)
    #[serde(rename = "EXT_8001")]
    ExternalServiceUnavailable,
    #[serde(rename = "EXT_8002")]
    ExternalServiceTimeout,
    #[serde(rename = "EXT_8003")]
    ExternalServiceError,

    // Internal errors (9xxx)
    #[serde(rename = "INT_9998")]
    ConfigurationError,
}

impl ErrorCode {
    /// Get numeric code
    pub fn code(&self) -> u16 {
        match self {
            ErrorCode::InvalidInput => 3001,
            ErrorCode::MissingRequiredField => 3002,
            ErrorCode::InvalidFormat => 3003,
            ErrorCode::InvalidAmount => 3005,

            ErrorCode::ExternalServiceUnavailable => 8001,
            ErrorCode::ExternalServiceTimeout => 8002,
            ErrorCode::ExternalServiceError => 8003,

            ErrorCode::ConfigurationError => 9998,
        }
    }

    /// Get user-friendly message
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Invalid input provided",
            ErrorCode::MissingRequiredField => "Required field is missing",
            ErrorCode::InvalidFormat => "Invalid format provided",
            ErrorCode::InvalidAmount => "Invalid amount provided",

            ErrorCode::ExternalServiceUnavailable => "Messaging service is currently unavailable",
            ErrorCode::ExternalServiceTimeout => "Messaging service request timed out",
            ErrorCode::ExternalServiceError => "Messaging service error occurred",

            ErrorCode::ConfigurationError => "Server configuration error",
        }
    }
}

/// Structured error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub error: ErrorDetail,
    pub request_id: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub code_number: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Inbound payload does not match the expected schema.
    #[error("{message}")]
    SchemaValidation {
        code: ErrorCode,
        field: Option<String>,
        message: String,
    },

    #[error("Failed to send Telegram message: {0}")]
    Delivery(#[from] DeliveryError),
}

impl ApiError {
    /// Create validation error for specific field
    pub fn validation_field(
        code: ErrorCode,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ApiError::SchemaValidation {
            code,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Create general validation error
    pub fn validation_error(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError::SchemaValidation {
            code,
            field: None,
            message: message.into(),
        }
    }

    /// Get error code
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ApiError::SchemaValidation { code, .. } => *code,
            ApiError::Delivery(e) if e.is_configuration() => ErrorCode::ConfigurationError,
            ApiError::Delivery(DeliveryError::Timeout) => ErrorCode::ExternalServiceTimeout,
            ApiError::Delivery(DeliveryError::Transport(_)) => ErrorCode::ExternalServiceUnavailable,
            ApiError::Delivery(_) => ErrorCode::ExternalServiceError,
        }
    }

    /// Get field name for validation errors
    fn error_field(&self) -> Option<String> {
        match self {
            ApiError::SchemaValidation { field, .. } => field.clone(),
            _ => None,
        }
    }

    /// Get status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SchemaValidation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human readable detail placed at the top of the error body
    fn detail(&self) -> String {
        match self {
            ApiError::SchemaValidation {
                field: Some(field),
                message,
                ..
            } => format!("{}: {}", field, message),
            _ => self.to_string(),
        }
    }

    /// Log error with appropriate level
    fn log_error(&self, request_id: &str) {
        match self.status_code() {
            status if status.is_server_error() => {
                error!(
                    request_id = %request_id,
                    error = %self,
                    "Server error occurred"
                );
            }
            status if status.is_client_error() => {
                warn!(
                    request_id = %request_id,
                    error = %self,
                    "Client error occurred"
                );
            }
            _ => {}
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = current_request_id().unwrap_or_else(|| Uuid::new_v4().to_string());
        let status = self.status_code();
        let code = self.error_code();

        self.log_error(&request_id);

        let error_response = ErrorResponse {
            detail: self.detail(),
            error: ErrorDetail {
                code,
                code_number: code.code(),
                message: match &self {
                    ApiError::SchemaValidation { message, .. } => message.clone(),
                    _ => code.message().to_string(),
                },
                field: self.error_field(),
            },
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Convert Axum JSON rejections into schema validation errors.
///
/// Every rejection maps to 422 so that callers see one status for any
/// payload that fails to match the expected shape.
pub fn handle_rejection(err: JsonRejection) -> ApiError {
    match err {
        JsonRejection::JsonDataError(e) => describe_data_error(&e.body_text()),
        JsonRejection::JsonSyntaxError(_) => {
            ApiError::validation_error(ErrorCode::InvalidFormat, "Invalid JSON format")
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::validation_error(ErrorCode::InvalidFormat, "JSON content type required")
        }
        JsonRejection::BytesRejection(_) => {
            ApiError::validation_error(ErrorCode::InvalidInput, "Invalid request body format")
        }
        other => ApiError::validation_error(ErrorCode::InvalidInput, other.body_text()),
    }
}

/// Turn a serde data error (as rendered by axum) into a field-level error.
///
/// Input looks like
/// `Failed to deserialize the JSON body into the target type: buyer: missing field `email` at line 1 column 40`.
fn describe_data_error(body_text: &str) -> ApiError {
    let inner = body_text
        .split_once("target type: ")
        .map(|(_, rest)| rest)
        .unwrap_or(body_text);
    let inner = strip_location(inner);

    // serde paths never contain spaces, serde messages always do
    let (path, message) = match inner.split_once(": ") {
        Some((head, tail)) if !head.contains(' ') => (Some(head), tail),
        _ => (None, inner),
    };

    if let Some(missing) = extract_missing_field(message) {
        let field = match path {
            Some(parent) => format!("{}.{}", parent, missing),
            None => missing.clone(),
        };
        return ApiError::validation_field(
            ErrorCode::MissingRequiredField,
            field,
            format!("Required field '{}' is missing", missing),
        );
    }

    let code = match path {
        Some("amount") => ErrorCode::InvalidAmount,
        _ => ErrorCode::InvalidFormat,
    };

    match path {
        Some(field) => ApiError::validation_field(code, field, message),
        None => ApiError::validation_error(code, message),
    }
}

/// Drop the trailing ` at line N column M` serde appends
fn strip_location(message: &str) -> &str {
    match message.rfind(" at line ") {
        Some(idx) => &message[..idx],
        None => message,
    }
}

/// Extract missing field name from "missing field `field_name`" error message
fn extract_missing_field(error_msg: &str) -> Option<String> {
    if let Some(start) = error_msg.find("missing field `") {
        let start = start + "missing field `".len();
        if let Some(end) = error_msg[start..].find('`') {
            return Some(error_msg[start..start + end].to_string());
        }
    }
    None
}
