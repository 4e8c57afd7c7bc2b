//! Request extractors
//!
//! [`ApiJson`] behaves like `axum::Json` but rejects malformed bodies with
//! the standard `{ success: false, message }` error envelope.

use axum::extract::FromRequest;

use crate::error::app_error::AppError;

#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
