//! HTTP error mapping.
//!
//! Every failure leaves the API as an [`ErrorResponse`] body with a matching
//! status code. Request-shape failures are caught by the [`ApiJson`] and
//! [`ApiPath`] extractors, so handlers never run on invalid input.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts,
        path::ErrorKind,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::service::TodoError;

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    #[schema(example = 404)]
    pub status: u16,
    /// Error message
    #[schema(example = "Todo 999 not found")]
    pub error: String,
    /// Offending field, for validation errors
    #[schema(example = "content")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Errors returned by API handlers.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("{message}")]
    #[diagnostic(code(todos::api::validation))]
    Validation {
        field: Option<String>,
        message: String,
    },

    #[error("Todo {id} not found")]
    #[diagnostic(code(todos::api::not_found))]
    NotFound { id: i64 },

    /// Details are logged where the failure happens, never sent to clients.
    #[error("Internal server error")]
    #[diagnostic(code(todos::api::internal))]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn field(&self) -> Option<String> {
        match self {
            ApiError::Validation { field, .. } => field.clone(),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            status: status.as_u16(),
            error: self.to_string(),
            field: self.field(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        match e {
            TodoError::Validation { field, message } => ApiError::Validation {
                message: format!("Invalid {}: {}", field, message),
                field: Some(field),
            },
            TodoError::NotFound { id } => ApiError::NotFound { id },
            TodoError::Storage(_) => ApiError::Internal,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        ApiError::Validation {
            field: rejected_field(&message),
            message,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let field = match &rejection {
            PathRejection::FailedToDeserializePathParams(inner) => match inner.kind() {
                ErrorKind::ParseErrorAtKey { key, .. } => Some(key.clone()),
                _ => None,
            },
            _ => None,
        };
        ApiError::Validation {
            field,
            message: rejection.body_text(),
        }
    }
}

/// JSON body extractor whose rejections render as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose rejections render as [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Best-effort extraction of the failing field from a serde error message.
///
/// Handles `missing field `x`` and the `x: ...` prefix axum adds for
/// data errors at a known path.
pub(crate) fn rejected_field(detail: &str) -> Option<String> {
    if let Some(rest) = detail.split("missing field `").nth(1) {
        return rest.split('`').next().map(str::to_string);
    }

    let rest = detail.split("target type: ").nth(1)?;
    let (path, _) = rest.split_once(": ")?;
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'));
    is_path.then(|| path.to_string())
}
