#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use casting_api::auth::jwt::{AuthConfig, KeySourceConfig, TokenVerifier};
use casting_api::config::{DatabaseConfig, ServerConfig};
use casting_api::router::build_app_router;
use casting_api::state::AppState;

/// HS256 secret shared by the test verifier and the token helpers.
pub const TEST_SECRET: &str = "casting-agency-integration-test-secret";

/// Every permission a full-access token carries.
pub const ALL_PERMISSIONS: [&str; 8] = [
    "get:actors",
    "post:actors",
    "patch:actors",
    "delete:actors",
    "get:movies",
    "post:movies",
    "patch:movies",
    "delete:movies",
];

/// Build a test `ServerConfig` with safe defaults.
///
/// CORS allows any origin and tokens are verified with [`TEST_SECRET`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 5,
        },
        seed_database: false,
        auth: AuthConfig {
            issuer: None,
            audience: None,
            key_source: KeySourceConfig::SharedSecret(TEST_SECRET.to_string()),
        },
    }
}

/// Build the full application router, with the production middleware stack,
/// over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let verifier = TokenVerifier::with_shared_secret(TEST_SECRET, None, None);

    build_app_router(AppState {
        pool,
        config: Arc::new(config),
        verifier: Arc::new(verifier),
    })
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

fn sign(claims: &Value, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("token encoding should succeed")
}

/// A valid token granting exactly `permissions`.
pub fn token_with(permissions: &[&str]) -> String {
    let now = chrono::Utc::now().timestamp();
    sign(
        &json!({
            "sub": "auth0|integration",
            "iat": now,
            "exp": now + 3600,
            "permissions": permissions,
        }),
        TEST_SECRET,
    )
}

/// A valid token granting every permission.
pub fn full_access_token() -> String {
    token_with(&ALL_PERMISSIONS)
}

/// A token that expired well outside the validation leeway.
pub fn expired_token() -> String {
    let now = chrono::Utc::now().timestamp();
    sign(
        &json!({
            "sub": "auth0|integration",
            "iat": now - 7200,
            "exp": now - 3600,
            "permissions": ALL_PERMISSIONS,
        }),
        TEST_SECRET,
    )
}

/// A token signed with a key the server does not trust.
pub fn foreign_token() -> String {
    let now = chrono::Utc::now().timestamp();
    sign(
        &json!({ "exp": now + 3600, "permissions": ALL_PERMISSIONS }),
        "some-other-secret-entirely",
    )
}

/// A valid token with no `permissions` claim at all.
pub fn token_without_permissions_claim() -> String {
    let now = chrono::Utc::now().timestamp();
    sign(&json!({ "sub": "auth0|bare", "exp": now + 3600 }), TEST_SECRET)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header("Authorization", format!("Bearer {token}")),
        None => builder,
    }
}

/// Send an unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

/// Send a GET with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(
        app,
        builder(Method::GET, uri, Some(token)).body(Body::empty()).unwrap(),
    )
    .await
}

/// Send a GET with a raw `Authorization` header value.
pub async fn get_with_authorization(app: Router, uri: &str, header: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Authorization", header)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_auth(
    app: Router,
    method: Method,
    uri: &str,
    body: Value,
    token: &str,
) -> Response<Body> {
    let request = builder(method, uri, Some(token))
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Send a POST with a JSON body and a Bearer token.
pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    json_auth(app, Method::POST, uri, body, token).await
}

/// Send a PATCH with a JSON body and a Bearer token.
pub async fn patch_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    json_auth(app, Method::PATCH, uri, body, token).await
}

/// Send a POST with a raw, possibly empty, body.
pub async fn post_raw_auth(app: Router, uri: &str, body: &'static str, token: &str) -> Response<Body> {
    let request = builder(Method::POST, uri, Some(token))
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Send a DELETE with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(
        app,
        builder(Method::DELETE, uri, Some(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert the fixed error envelope for `status`.
pub async fn assert_error(response: Response<Body>, status: u16, message: &str) {
    assert_eq!(response.status().as_u16(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], status);
    assert_eq!(json["message"], message);
}
