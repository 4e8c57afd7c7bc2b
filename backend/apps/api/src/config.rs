//! Server Configuration
//!
//! Read once from the environment (after `.env` is loaded).

use std::env;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub seed_demo_data: bool,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let database_max_connections = parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let port = parse_or("PORT", DEFAULT_PORT)?;

        let frontend_origins = split_origins(
            &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let seed_demo_data = env::var("SEED_DEMO_DATA").is_ok_and(|v| v == "true");

        Ok(Self {
            database_url,
            database_max_connections,
            port,
            frontend_origins,
            seed_demo_data,
            auth: auth_config_from_env()?,
        })
    }
}

fn auth_config_from_env() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("TOKEN_SECRET") {
        Ok(secret_b64) => AuthConfig::with_secret(decode_secret(&secret_b64)?),
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("TOKEN_SECRET not set, using a random secret; tokens will not survive a restart");
            AuthConfig::development()
        }
        Err(_) => bail!("TOKEN_SECRET must be set in production"),
    };

    let ttl_secs = parse_or("TOKEN_TTL_SECS", config.token_ttl.as_secs())?;
    config.token_ttl = token_ttl(ttl_secs)?;

    config.password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|p| !p.is_empty())
        .map(String::into_bytes);

    Ok(config)
}

/// Token lifetime; must be positive and fit in i64 milliseconds
fn token_ttl(secs: u64) -> anyhow::Result<Duration> {
    let ttl = Duration::from_secs(secs);
    if secs == 0 || i64::try_from(ttl.as_millis()).is_err() {
        bail!("TOKEN_TTL_SECS out of range: {}", secs);
    }
    Ok(ttl)
}

/// Decode a base64 token secret; it must be exactly 32 bytes
fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("TOKEN_SECRET is not valid base64")?;

    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow::anyhow!("TOKEN_SECRET must decode to 32 bytes, got {}", bytes.len()))
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
