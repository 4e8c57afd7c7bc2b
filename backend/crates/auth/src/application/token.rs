//! Token Service
//!
//! Issues and verifies stateless bearer tokens.
//!
//! Wire format: `base64url(claims_json) "." base64url(hmac_sha256(secret, claims_b64))`
//! where claims are `{ "sub": <user uuid>, "iat": <unix ms>, "exp": <unix ms> }`.
//! The signature is checked before the claims are parsed.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;
use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    sub: Uuid,
    iat: i64,
    exp: i64,
}

/// A freshly issued bearer token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Expiry in unix milliseconds
    pub expires_at_ms: i64,
}

/// Bearer token issuer/verifier
#[derive(Debug, Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for `user_id` valid for the configured TTL
    pub fn issue(&self, user_id: &UserId) -> AuthResult<IssuedToken> {
        self.issue_at(user_id, Utc::now().timestamp_millis())
    }

    /// Verify a token and return the user it was issued to
    ///
    /// Does not consult the credential store; see `AccessGate`.
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        self.verify_at(token, Utc::now().timestamp_millis())
    }

    pub(crate) fn issue_at(&self, user_id: &UserId, now_ms: i64) -> AuthResult<IssuedToken> {
        let exp = self
            .config
            .token_ttl_ms()
            .and_then(|ttl_ms| now_ms.checked_add(ttl_ms))
            .ok_or_else(|| AuthError::Internal("token expiry overflows".to_string()))?;

        let claims = TokenClaims {
            sub: *user_id.as_uuid(),
            iat: now_ms,
            exp,
        };

        let claims_json =
            serde_json::to_vec(&claims).map_err(|e| AuthError::Internal(e.to_string()))?;
        let payload = to_base64_url(&claims_json);
        let signature = hmac_sha256(&self.config.token_secret, payload.as_bytes());

        Ok(IssuedToken {
            token: format!("{}.{}", payload, to_base64_url(&signature)),
            expires_at_ms: claims.exp,
        })
    }

    pub(crate) fn verify_at(&self, token: &str, now_ms: i64) -> AuthResult<UserId> {
        let (payload, signature_b64) = token.split_once('.').ok_or(AuthError::InvalidToken)?;

        if payload.is_empty() || signature_b64.contains('.') {
            return Err(AuthError::InvalidToken);
        }

        let signature = from_base64_url(signature_b64).map_err(|_| AuthError::InvalidToken)?;
        if !verify_hmac_sha256(&self.config.token_secret, payload.as_bytes(), &signature) {
            return Err(AuthError::InvalidToken);
        }

        let claims_json = from_base64_url(payload).map_err(|_| AuthError::InvalidToken)?;
        let claims: TokenClaims =
            serde_json::from_slice(&claims_json).map_err(|_| AuthError::InvalidToken)?;

        if now_ms > claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Ok(UserId::from_uuid(claims.sub))
    }
}
