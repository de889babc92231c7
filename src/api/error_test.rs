use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;

use super::error::rejected_field;
use super::{ApiError, ErrorResponse};
use crate::db::DbError;
use crate::service::TodoError;

async fn body_of(error: ApiError) -> (StatusCode, ErrorResponse) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_status_codes() {
    let validation = ApiError::Validation {
        field: None,
        message: "bad".to_string(),
    };
    assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ApiError::NotFound { id: 1 }.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        ApiError::Internal.status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_not_found_body() {
    let (status, body) = body_of(ApiError::NotFound { id: 999 }).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.status, 404);
    assert_eq!(body.error, "Todo 999 not found");
    assert_eq!(body.field, None);
}

#[tokio::test]
async fn test_validation_from_service_error_keeps_field() {
    let error = ApiError::from(TodoError::Validation {
        field: "content".to_string(),
        message: "must not be empty".to_string(),
    });

    let (status, body) = body_of(error).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.status, 422);
    assert_eq!(body.error, "Invalid content: must not be empty");
    assert_eq!(body.field.as_deref(), Some("content"));
}

#[tokio::test]
async fn test_storage_error_is_not_leaked() {
    let error = ApiError::from(TodoError::Storage(DbError::Database {
        message: "disk I/O error at /secret/path".to_string(),
    }));

    let (status, body) = body_of(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Internal server error");
    assert!(!body.error.contains("secret"));
}

#[test]
fn test_not_found_from_service_error() {
    let error = ApiError::from(TodoError::NotFound { id: 5 });
    assert!(matches!(error, ApiError::NotFound { id: 5 }));
}

#[test]
fn test_rejected_field_missing_field() {
    let detail = "Failed to deserialize the JSON body into the target type: missing field `content` at line 1 column 2";
    assert_eq!(rejected_field(detail).as_deref(), Some("content"));
}

#[test]
fn test_rejected_field_invalid_type() {
    let detail = "Failed to deserialize the JSON body into the target type: completed: invalid type: string \"yes\", expected a boolean at line 1 column 17";
    assert_eq!(rejected_field(detail).as_deref(), Some("completed"));
}

#[test]
fn test_rejected_field_unknown() {
    assert_eq!(rejected_field("Failed to parse the request body as JSON: EOF while parsing"), None);
    assert_eq!(
        rejected_field("Failed to deserialize the JSON body into the target type: invalid type: string \"x\", expected struct NewTodo at line 1 column 3"),
        None
    );
}
