//! Display Name Value Object

use derive_more::Display;
use kernel::error::field::FieldError;
use serde::{Deserialize, Serialize};

pub const DISPLAY_NAME_MIN_LENGTH: usize = 2;
pub const DISPLAY_NAME_MAX_LENGTH: usize = 50;

/// A user's display name: trimmed, 2-50 characters
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: impl AsRef<str>) -> Result<Self, FieldError> {
        let name = name.as_ref().trim();
        let len = name.chars().count();

        if !(DISPLAY_NAME_MIN_LENGTH..=DISPLAY_NAME_MAX_LENGTH).contains(&len) {
            return Err(FieldError::new(
                "name",
                format!(
                    "Name must be between {} and {} characters",
                    DISPLAY_NAME_MIN_LENGTH, DISPLAY_NAME_MAX_LENGTH
                ),
            ));
        }

        Ok(Self(name.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}
