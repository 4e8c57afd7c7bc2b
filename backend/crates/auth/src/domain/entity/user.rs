//! User Entity
//!
//! A registered account: identity, credentials and profile in one record.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{display_name::DisplayName, email::Email};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: DisplayName,
    /// Login email (unique, normalized)
    pub email: Email,
    /// Argon2id hash of the password
    pub password_hash: HashedPassword,
    /// Inactive users can neither log in nor pass the access gate
    pub is_active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user
    pub fn new(name: DisplayName, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if user can login
    pub fn can_login(&self) -> bool {
        self.is_active
    }

    /// Change the display name
    pub fn rename(&mut self, name: DisplayName) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Deactivate the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn user() -> User {
        let hash = ClearTextPassword::new("secret1".to_string())
            .unwrap()
            .hash(None)
            .unwrap();
        User::new(
            DisplayName::new("Ada").unwrap(),
            Email::new("ada@example.com").unwrap(),
            hash,
        )
    }

    #[test]
    fn test_new_user_is_active() {
        let user = user();
        assert!(user.can_login());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_rename_refreshes_updated_at() {
        let mut user = user();
        let before = user.updated_at;
        user.rename(DisplayName::new("Grace").unwrap());

        assert_eq!(user.name.as_str(), "Grace");
        assert!(user.updated_at >= before);
    }

    #[test]
    fn test_deactivate() {
        let mut user = user();
        user.deactivate();
        assert!(!user.can_login());
    }
}
