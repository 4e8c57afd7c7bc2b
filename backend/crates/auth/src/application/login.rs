//! Login Use Case

use std::sync::Arc;

use kernel::error::field::FieldError;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::register::AuthOutput;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        let mut errors = Vec::new();

        let email = Email::new(&input.email).map_err(|e| errors.push(e)).ok();
        if input.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }

        let Some(email) = email.filter(|_| errors.is_empty()) else {
            return Err(AuthError::Validation(errors));
        };

        let password = ClearTextPassword::for_login(input.password);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        // Checked after the password so account status never leaks
        if !user.can_login() {
            return Err(AuthError::AccountInactive);
        }

        let issued = TokenService::new(self.config.clone()).issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthOutput {
            token: issued.token,
            user,
        })
    }
}
