//! Common extractors for API handlers.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{handle_rejection, ApiError};

/// JSON body extractor whose rejections are schema validation errors.
///
/// Behaves like `axum::Json`, but a missing field, a wrong type or a
/// malformed body yields a 422 naming the offending field path. A body
/// sent without any `Content-Type` is parsed as JSON; an explicit
/// non-JSON content type is still rejected.
#[derive(Debug, Clone)]
pub struct PayloadJson<T>(pub T);

impl<T, S> FromRequest<S> for PayloadJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(CONTENT_TYPE) {
            return match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(PayloadJson(value)),
                Err(rejection) => Err(handle_rejection(rejection)),
            };
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| handle_rejection(JsonRejection::from(rejection)))?;

        match Json::<T>::from_bytes(&bytes) {
            Ok(Json(value)) => Ok(PayloadJson(value)),
            Err(rejection) => Err(handle_rejection(rejection)),
        }
    }
}
