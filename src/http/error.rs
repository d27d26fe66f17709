//! HTTP error type and mapping from storage errors to status codes.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::error::NotesError;

/// Stable machine-readable codes carried in error bodies.
pub mod error_codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const STORAGE_CORRUPT: &str = "STORAGE_CORRUPT";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    #[error("Note not found")]
    NoteNotFound { id: u64 },

    #[error("Validation failed for field '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Note storage is corrupt")]
    StorageCorrupt,

    #[error("Internal error")]
    InternalError,
}

/// Body sent with every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::ValidationFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::StorageCorrupt | ApiError::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NoteNotFound { .. } => error_codes::NOT_FOUND,
            ApiError::ValidationFailed { .. } => error_codes::VALIDATION_FAILED,
            ApiError::StorageCorrupt => error_codes::STORAGE_CORRUPT,
            ApiError::InternalError => error_codes::INTERNAL_ERROR,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.error_code().to_string(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<NotesError> for ApiError {
    fn from(err: NotesError) -> Self {
        match err {
            NotesError::NotFound(id) => ApiError::NoteNotFound { id },
            NotesError::StorageCorrupt { path, source } => {
                tracing::error!(
                    path = %path.display(),
                    error = %source,
                    "notes file could not be parsed"
                );
                ApiError::StorageCorrupt
            }
            other => {
                tracing::error!(error = %other, "note operation failed");
                ApiError::InternalError
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation("body", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::validation("id", rejection.body_text())
    }
}
