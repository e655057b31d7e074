//! Request extractors whose rejections use the API's JSON error shape.
//!
//! Axum's stock `Json` and `Path` extractors reject with plain-text bodies.
//! These wrappers reject with [`AppError`] instead.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use casting_core::types::DbId;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// A non-empty JSON object request body.
///
/// A missing body, `{}`, malformed JSON, or any non-object JSON value is
/// rejected with 400.
#[derive(Debug)]
pub struct JsonBody(pub Map<String, Value>);

impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Unreadable body: {e}")))?;
        parse_object(&bytes).map(JsonBody)
    }
}

fn parse_object(bytes: &[u8]) -> AppResult<Map<String, Value>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("No data provided".into()));
    }
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON: {e}")))?;
    match value {
        Value::Object(map) if !map.is_empty() => Ok(map),
        Value::Object(_) => Err(AppError::BadRequest("No data provided".into())),
        _ => Err(AppError::BadRequest("Body must be a JSON object".into())),
    }
}

/// The integer `{id}` path segment of a record route.
///
/// A segment that is not an integer means no record route matched, so the
/// rejection is a 404 rather than a 400.
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for ResourceId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::RouteNotFound(e.body_text()))?;
        raw.parse::<DbId>()
            .map(ResourceId)
            .map_err(|_| AppError::RouteNotFound(parts.uri.path().to_string()))
    }
}
