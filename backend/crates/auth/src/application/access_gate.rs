//! Access Gate
//!
//! Resolves the caller of a protected operation from its `Authorization`
//! header. The resolved identity is returned as a value and handed to the
//! use case explicitly; nothing is stashed on the request.

use std::sync::Arc;

use axum::http::HeaderMap;
use kernel::id::UserId;
use platform::bearer::{authorization_header, parse_bearer};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Identity of an authenticated caller
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub user: User,
}

/// Bearer token gate in front of every protected operation
pub struct AccessGate<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: TokenService,
}

impl<U> Clone for AccessGate<U>
where
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_repo: self.user_repo.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

impl<U> AccessGate<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens: TokenService::new(config),
        }
    }

    /// Authenticate from a raw `Authorization` header value
    ///
    /// The credential store is always consulted, so a deactivated or
    /// deleted account is locked out even while its token is unexpired.
    pub async fn authenticate(&self, raw_header: Option<&str>) -> AuthResult<AuthenticatedUser> {
        let token = raw_header
            .and_then(parse_bearer)
            .ok_or(AuthError::MissingToken)?;

        let user_id = self.tokens.verify(token)?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .filter(User::can_login)
            .ok_or(AuthError::UserInactiveOrMissing)?;

        Ok(AuthenticatedUser { user_id, user })
    }

    /// Authenticate from request headers
    pub async fn authenticate_headers(&self, headers: &HeaderMap) -> AuthResult<AuthenticatedUser> {
        self.authenticate(authorization_header(headers)).await
    }
}
