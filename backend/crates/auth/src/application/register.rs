//! Register Use Case
//!
//! Creates a new account and signs it in.

use std::sync::Arc;

use kernel::error::field::FieldError;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{display_name::DisplayName, email::Email};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Output of register and login: a bearer token plus the account
#[derive(Debug)]
pub struct AuthOutput {
    pub token: String,
    pub user: User,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        let mut errors = Vec::new();

        let name = DisplayName::new(&input.name)
            .map_err(|e| errors.push(e))
            .ok();
        let email = Email::new(&input.email).map_err(|e| errors.push(e)).ok();
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| errors.push(FieldError::new("password", e.to_string())))
            .ok();

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(AuthError::Validation(errors));
        };

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = password.hash(self.config.pepper())?;
        let user = User::new(name, email, password_hash);

        // Unique index still guards the race between the check and the insert
        self.user_repo.create(&user).await?;

        let issued = TokenService::new(self.config.clone()).issue(&user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(AuthOutput {
            token: issued.token,
            user,
        })
    }
}
