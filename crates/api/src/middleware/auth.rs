//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use casting_core::error::CoreError;
use casting_core::permissions::CapabilitySet;

use crate::error::AppError;
use crate::state::AppState;

/// Caller identity extracted from a verified Bearer token.
///
/// Rejects with 401 when the header is missing, is not of the form
/// `Bearer <token>`, or the token fails verification.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The identity provider's subject id, when present.
    pub subject: Option<String>,
    /// Permissions granted by the token.
    pub capabilities: CapabilitySet,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = bearer_token(auth_header).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = state.verifier.verify(token).map_err(|e| {
            AppError::Core(CoreError::Unauthorized(format!(
                "Invalid or expired token: {e}"
            )))
        })?;

        Ok(AuthUser {
            subject: claims.sub,
            capabilities: CapabilitySet::from_claims(&claims.permissions),
        })
    }
}

/// Split `"Bearer <token>"` into the token. The scheme is case-insensitive;
/// anything other than exactly two parts is rejected.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Some(token),
        _ => None,
    }
}
