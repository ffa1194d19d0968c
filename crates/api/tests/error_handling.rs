//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use taskboard_api::error::AppError;
use taskboard_core::error::CoreError;
use taskboard_db::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_uses_entity_message() {
    let (status, json) = error_to_response(AppError::not_found("Project", "abc")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Project not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn validation_maps_to_400_with_verbatim_message() {
    let err = AppError::Core(CoreError::Validation("Title is required".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Title is required");
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let (status, json) = error_to_response(AppError::BadRequest("nope".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "nope");
}

#[tokio::test]
async fn store_error_is_sanitized_500() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/secret/path");
    let (status, json) = error_to_response(AppError::Store(StoreError::Io(io))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json.to_string().contains("/secret/path"));
}
