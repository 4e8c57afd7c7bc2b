//! Application Layer
//!
//! Token service, access gate and use cases.

pub mod access_gate;
pub mod config;
pub mod login;
pub mod profile;
pub mod register;
pub mod token;

// Re-exports
pub use access_gate::{AccessGate, AuthenticatedUser};
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use profile::{UpdateProfileInput, UpdateProfileUseCase};
pub use register::{AuthOutput, RegisterInput, RegisterUseCase};
pub use token::{IssuedToken, TokenService};
