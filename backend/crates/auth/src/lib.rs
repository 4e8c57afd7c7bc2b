//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository traits
//! - `application/` - Token service, access gate, use cases
//! - `infra/` - PostgreSQL and in-memory credential stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration and login by email + password
//! - Stateless signed bearer tokens (HMAC-SHA256, fixed TTL)
//! - Access gate that re-checks the account on every request
//! - Profile read / rename
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - A valid signature alone never authenticates: the user must still
//!   exist and be active in the credential store

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::access_gate::{AccessGate, AuthenticatedUser};
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
