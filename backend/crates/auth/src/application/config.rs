//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup
//! and shared read-only behind an `Arc`.

use std::fmt;
use std::time::Duration;

/// Default bearer token lifetime (7 days)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Token signing key for HMAC-SHA256 (32 bytes)
    pub token_secret: [u8; 32],
    /// Lifetime of issued bearer tokens
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn with_secret(token_secret: [u8; 32]) -> Self {
        Self {
            token_secret,
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_secret())
    }

    /// Development configuration (random secret, no pepper)
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get token TTL in milliseconds, `None` if it does not fit in an i64
    pub fn token_ttl_ms(&self) -> Option<i64> {
        i64::try_from(self.token_ttl.as_millis()).ok()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
