//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use casting_api::error::{error_response, AppError};
use casting_core::error::CoreError;
use casting_core::release_date::ReleaseDateError;
use http_body_util::BodyExt;

/// Helper: convert a response into its status code and parsed JSON body.
async fn into_parts(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    into_parts(err.into_response()).await
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Actor",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        serde_json::json!({ "success": false, "error": 404, "message": "resource not found" })
    );
}

#[tokio::test]
async fn empty_collection_returns_404() {
    let err = AppError::Core(CoreError::EmptyCollection { entity: "Movie" });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "resource not found");
}

#[tokio::test]
async fn validation_errors_return_400_without_detail() {
    let err = AppError::Core(CoreError::Validation("name is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], 400);
    assert_eq!(json["message"], "bad request");
}

#[tokio::test]
async fn invalid_release_date_returns_400() {
    let err = AppError::Core(CoreError::from(ReleaseDateError::WrongTokenCount(1)));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "bad request");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("No data provided".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn unauthorized_and_forbidden_share_a_message() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("no header".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], 401);
    assert_eq!(json["message"], "not authorized");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::Forbidden("get:actors".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], 403);
    assert_eq!(json["message"], "not authorized");
}

#[tokio::test]
async fn database_error_returns_422() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "unprocessable");
}

#[tokio::test]
async fn route_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::RouteNotFound("/nope".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "resource not found");
}

#[tokio::test]
async fn timeout_and_internal_responses_use_the_same_shape() {
    let (status, json) = into_parts(error_response(StatusCode::REQUEST_TIMEOUT)).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json["message"], "request timeout");

    let (status, json) = into_parts(error_response(StatusCode::INTERNAL_SERVER_ERROR)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], 500);
    assert_eq!(json["message"], "internal server error");
}

#[tokio::test]
async fn method_not_allowed_uses_the_same_shape() {
    let (status, json) = into_parts(error_response(StatusCode::METHOD_NOT_ALLOWED)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["error"], 405);
    assert_eq!(json["message"], "method not allowed");
}
