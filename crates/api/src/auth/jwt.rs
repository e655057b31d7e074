//! Access-token verification.
//!
//! Tokens are issued by an external identity provider. The server only
//! verifies them: signature, expiry, and (when configured) issuer and
//! audience. Key material is loaded once at startup into a [`TokenVerifier`]
//! and never mutated afterwards.
//!
//! Two key sources are supported:
//! - a JWKS document (RS256, Auth0-style), fetched by [`super::jwks`];
//! - an HS256 shared secret, for local development and tests.

use std::collections::HashMap;

use jsonwebtoken::jwk::{AlgorithmParameters, JwkSet};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims read from a verified access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the identity provider's user id.
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default)]
    pub iat: Option<i64>,
    /// Raw permission strings, e.g. `"post:actors"`. Absent means none.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Where verification keys come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySourceConfig {
    /// HS256 with a shared secret.
    SharedSecret(String),
    /// RS256 keys published at a JWKS URL.
    Jwks(String),
}

/// Configuration for token verification.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Expected `iss` claim. Not checked when `None`.
    pub issuer: Option<String>,
    /// Expected `aud` claim. Not checked when `None`.
    pub audience: Option<String>,
    pub key_source: KeySourceConfig,
}

impl AuthConfig {
    /// Load auth configuration from environment variables.
    ///
    /// | Env Var          | Required | Default                                |
    /// |------------------|----------|----------------------------------------|
    /// | `JWT_SECRET`     | no       | -- (selects HS256 mode when set)       |
    /// | `AUTH_ISSUER`    | no       | --                                     |
    /// | `AUTH_AUDIENCE`  | no       | --                                     |
    /// | `AUTH_JWKS_URL`  | no       | `<AUTH_ISSUER>.well-known/jwks.json`   |
    ///
    /// # Panics
    ///
    /// Panics if neither a shared secret nor a JWKS location can be determined.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let issuer = non_empty("AUTH_ISSUER");
        let audience = non_empty("AUTH_AUDIENCE");

        let key_source = if let Some(secret) = non_empty("JWT_SECRET") {
            KeySourceConfig::SharedSecret(secret)
        } else if let Some(url) = non_empty("AUTH_JWKS_URL") {
            KeySourceConfig::Jwks(url)
        } else if let Some(iss) = issuer.as_deref() {
            KeySourceConfig::Jwks(jwks_url_for_issuer(iss))
        } else {
            panic!("Either JWT_SECRET or AUTH_ISSUER / AUTH_JWKS_URL must be set");
        };

        Self {
            issuer,
            audience,
            key_source,
        }
    }
}

/// Conventional JWKS location for an issuer URL.
pub fn jwks_url_for_issuer(issuer: &str) -> String {
    format!("{}/.well-known/jwks.json", issuer.trim_end_matches('/'))
}

/// Reasons a bearer token is rejected. All of them surface as 401.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token header could not be decoded: {0}")]
    Malformed(#[source] jsonwebtoken::errors::Error),

    #[error("no verification key for kid {0:?}")]
    UnknownKey(Option<String>),

    #[error("token rejected: {0}")]
    Rejected(#[source] jsonwebtoken::errors::Error),
}

/// Errors while building a [`TokenVerifier`] from a key source.
#[derive(Debug, thiserror::Error)]
pub enum KeySourceError {
    #[error("failed to download JWKS: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("JWKS key {kid:?} is unusable: {source}")]
    InvalidKey {
        kid: Option<String>,
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    #[error("JWKS contains no usable RSA or symmetric keys")]
    NoUsableKeys,
}

/// A decoding key with the validation rules for its single algorithm.
struct VerificationKey {
    key: DecodingKey,
    validation: Validation,
}

enum VerificationKeys {
    Shared(VerificationKey),
    /// Keyed by `kid`.
    Jwks(HashMap<String, VerificationKey>),
}

/// Immutable verification key material plus the validation rules to apply.
pub struct TokenVerifier {
    keys: VerificationKeys,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct("TokenVerifier");
        match &self.keys {
            VerificationKeys::Shared(_) => out.field("source", &"shared-secret"),
            VerificationKeys::Jwks(keys) => out.field("kids", &keys.keys().collect::<Vec<_>>()),
        };
        out.finish_non_exhaustive()
    }
}

impl TokenVerifier {
    /// Build from configuration, downloading the JWKS when that source is used.
    pub async fn from_config(config: &AuthConfig) -> Result<Self, KeySourceError> {
        match &config.key_source {
            KeySourceConfig::SharedSecret(secret) => Ok(Self::with_shared_secret(
                secret,
                config.issuer.as_deref(),
                config.audience.as_deref(),
            )),
            KeySourceConfig::Jwks(url) => {
                let set = super::jwks::fetch_jwks(url).await?;
                Self::from_jwk_set(&set, config.issuer.as_deref(), config.audience.as_deref())
            }
        }
    }

    /// HS256 verifier backed by a shared secret.
    pub fn with_shared_secret(secret: &str, issuer: Option<&str>, audience: Option<&str>) -> Self {
        Self {
            keys: VerificationKeys::Shared(VerificationKey {
                key: DecodingKey::from_secret(secret.as_bytes()),
                validation: build_validation(Algorithm::HS256, issuer, audience),
            }),
        }
    }

    /// Verifier backed by the keys of a JWKS document.
    ///
    /// RSA keys verify RS256 tokens and symmetric (`oct`) keys verify HS256.
    /// Each key only accepts its own algorithm. Keys without a `kid` or of
    /// another type are skipped.
    pub fn from_jwk_set(
        set: &JwkSet,
        issuer: Option<&str>,
        audience: Option<&str>,
    ) -> Result<Self, KeySourceError> {
        let mut keys = HashMap::new();

        for jwk in &set.keys {
            let kid = jwk.common.key_id.clone();
            let algorithm = match &jwk.algorithm {
                AlgorithmParameters::RSA(_) => Algorithm::RS256,
                AlgorithmParameters::OctetKey(_) => Algorithm::HS256,
                _ => {
                    tracing::warn!(?kid, "Skipping JWKS key of unsupported type");
                    continue;
                }
            };
            let Some(kid) = kid else {
                tracing::warn!("Skipping JWKS key without kid");
                continue;
            };
            let key = DecodingKey::from_jwk(jwk).map_err(|source| KeySourceError::InvalidKey {
                kid: Some(kid.clone()),
                source,
            })?;
            keys.insert(
                kid,
                VerificationKey {
                    key,
                    validation: build_validation(algorithm, issuer, audience),
                },
            );
        }

        if keys.is_empty() {
            return Err(KeySourceError::NoUsableKeys);
        }
        tracing::info!(key_count = keys.len(), "Loaded JWKS verification keys");

        Ok(Self {
            keys: VerificationKeys::Jwks(keys),
        })
    }

    /// Verify a compact JWS and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let selected = match &self.keys {
            VerificationKeys::Shared(key) => key,
            VerificationKeys::Jwks(keys) => {
                let header = decode_header(token).map_err(TokenError::Malformed)?;
                match header.kid {
                    Some(ref kid) => keys.get(kid),
                    // A single published key is unambiguous.
                    None if keys.len() == 1 => keys.values().next(),
                    None => None,
                }
                .ok_or(TokenError::UnknownKey(header.kid))?
            }
        };

        decode::<Claims>(token, &selected.key, &selected.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Rejected)
    }
}

fn build_validation(algorithm: Algorithm, issuer: Option<&str>, audience: Option<&str>) -> Validation {
    let mut validation = Validation::new(algorithm);
    if let Some(iss) = issuer {
        validation.set_issuer(&[iss]);
    }
    match audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }
    validation
}
