//! One-shot JWKS download used while building the [`super::jwt::TokenVerifier`].

use std::time::Duration;

use jsonwebtoken::jwk::JwkSet;

use super::jwt::KeySourceError;

/// Upper bound on the startup request to the identity provider.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Download and parse the JWKS document at `url`.
pub async fn fetch_jwks(url: &str) -> Result<JwkSet, KeySourceError> {
    tracing::info!(%url, "Fetching JWKS");

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    let set = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<JwkSet>()
        .await?;

    tracing::debug!(keys = set.keys.len(), "JWKS downloaded");
    Ok(set)
}
