use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use casting_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the fixed
/// `{ success: false, error, message }` body. Details never reach the client;
/// they are logged instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `casting_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx. Every cause maps to 422.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed or missing request body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::EmptyCollection { .. } => {
                    StatusCode::NOT_FOUND
                }
                CoreError::Validation(_) | CoreError::InvalidReleaseDate(_) => {
                    StatusCode::BAD_REQUEST
                }
                CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
            },
            AppError::Database(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Database(err) => tracing::error!(error = %err, "Database error"),
            AppError::Core(CoreError::Unauthorized(_) | CoreError::Forbidden(_)) => {
                tracing::info!(%status, reason = %self, "Request not authorized")
            }
            _ => tracing::debug!(%status, reason = %self, "Request failed"),
        }
        error_response(status)
    }
}

/// Client-facing message for a status code.
pub fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => "not authorized",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        StatusCode::REQUEST_TIMEOUT => "request timeout",
        _ => "internal server error",
    }
}

/// Build the fixed-shape JSON error response for `status`.
pub fn error_response(status: StatusCode) -> Response {
    let body = json!({
        "success": false,
        "error": status.as_u16(),
        "message": message_for(status),
    });
    (status, axum::Json(body)).into_response()
}
