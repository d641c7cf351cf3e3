// Application configuration
// Loaded from the environment (and `.env` via dotenv) at startup

use std::net::{IpAddr, SocketAddr};

use chrono::Duration;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";
const DEFAULT_JWT_SECRET: &str = "dev-secret-key";
const DEFAULT_SESSION_TTL_MINUTES: i64 = 30;
/// One week
const MAX_SESSION_TTL_MINUTES: i64 = 7 * 24 * 60;

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the registration server
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub admin_username: String,
    pub admin_password: String,
    pub jwt_secret: String,
    pub session_ttl: Duration,
}

impl AppConfig {
    /// Reads configuration from process environment variables
    ///
    /// # Variables
    /// * `HOST` / `PORT` - Bind address (default `0.0.0.0:3000`)
    /// * `ADMIN_USERNAME` / `ADMIN_PASSWORD` - The single admin account
    /// * `JWT_SECRET` - Token signing key
    /// * `SESSION_TTL_MINUTES` - Token lifetime (default 30, at most one week)
    ///
    /// Unset credentials and secrets fall back to development defaults with a
    /// warning.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or(&lookup, "HOST", DEFAULT_HOST.parse().ok())?;
        let port = parse_or(&lookup, "PORT", Some(DEFAULT_PORT))?;

        let session_ttl_minutes: i64 =
            parse_or(&lookup, "SESSION_TTL_MINUTES", Some(DEFAULT_SESSION_TTL_MINUTES))?;
        let session_ttl = Some(session_ttl_minutes)
            .filter(|minutes| (1..=MAX_SESSION_TTL_MINUTES).contains(minutes))
            .and_then(Duration::try_minutes)
            .ok_or_else(|| ConfigError::Invalid {
                key: "SESSION_TTL_MINUTES",
                value: session_ttl_minutes.to_string(),
            })?;

        Ok(Self {
            host,
            port,
            admin_username: string_or_warn(&lookup, "ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
            admin_password: string_or_warn(&lookup, "ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            jwt_secret: string_or_warn(&lookup, "JWT_SECRET", DEFAULT_JWT_SECRET),
            session_ttl,
        })
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn string_or_warn<F>(lookup: &F, key: &'static str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|value| !value.is_empty()) {
        Some(value) => value,
        None => {
            tracing::warn!("{} not set, using default", key);
            default.to_string()
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => default.ok_or(ConfigError::Invalid {
            key,
            value: String::new(),
        }),
    }
}
