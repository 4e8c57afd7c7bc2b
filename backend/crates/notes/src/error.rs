//! Note Error Types
//!
//! Note-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, field::FieldError, kind::ErrorKind};
use thiserror::Error;

/// Note-specific result type alias
pub type NoteResult<T> = Result<T, NoteError>;

/// Note-specific error variants
#[derive(Debug, Error)]
pub enum NoteError {
    /// Access gate refused the caller
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Path id is not a well-formed note id
    #[error("Invalid note ID")]
    InvalidNoteId,

    /// Absent, or owned by another user
    #[error("Note not found")]
    NotFound,

    /// Input validation failed
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NoteError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NoteError::Auth(e) => e.kind(),
            NoteError::InvalidNoteId | NoteError::Validation(_) => ErrorKind::BadRequest,
            NoteError::NotFound => ErrorKind::NotFound,
            NoteError::Database(_) | NoteError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            NoteError::Auth(e) => e.to_app_error(),
            NoteError::Validation(errors) => AppError::validation(errors.clone()),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            NoteError::Auth(e) => e.log(),
            NoteError::Database(e) => {
                tracing::error!(error = %e, "Notes database error");
            }
            NoteError::Internal(msg) => {
                tracing::error!(message = %msg, "Notes internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Notes error");
            }
        }
    }
}

impl From<Vec<FieldError>> for NoteError {
    fn from(errors: Vec<FieldError>) -> Self {
        NoteError::Validation(errors)
    }
}

impl From<NoteError> for AppError {
    fn from(err: NoteError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for NoteError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
