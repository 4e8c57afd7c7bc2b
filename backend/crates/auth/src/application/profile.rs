//! Profile Use Cases
//!
//! Reading the profile needs no use case: the access gate already returns
//! the account. Renaming goes through `UpdateProfileUseCase`.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::display_name::DisplayName;
use crate::error::{AuthError, AuthResult};

/// Update profile input
pub struct UpdateProfileInput {
    pub user_id: UserId,
    pub name: String,
}

/// Update profile use case
pub struct UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: UpdateProfileInput) -> AuthResult<User> {
        let name =
            DisplayName::new(&input.name).map_err(|e| AuthError::Validation(vec![e]))?;

        let mut user = self
            .user_repo
            .find_by_id(&input.user_id)
            .await?
            .filter(User::can_login)
            .ok_or(AuthError::UserInactiveOrMissing)?;

        user.rename(name);
        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
