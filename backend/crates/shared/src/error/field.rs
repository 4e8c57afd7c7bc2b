//! Field Error - Per-field validation failure
//!
//! Validation never stops at the first problem: every offending field is
//! collected into a list of [`FieldError`] and reported together.

use serde::Serialize;

/// 入力フィールド単位の検証エラー
///
/// `field` はリクエスト JSON 上のパス（例: `title`, `items[2].text`）です。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
