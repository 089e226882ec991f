//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;

/// Configuration resolved at startup from the process environment.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Whether the staff session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

impl ServerConfig {
    /// Read configuration from the environment, with safe defaults.
    ///
    /// `SESSION_COOKIE_SECURE=0` disables the `Secure` cookie attribute
    /// for local development; any other value (and absence) keeps it on.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { value: raw, source })?;

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| v != "0")
            .unwrap_or(true);

        Ok(Self {
            bind_addr,
            cookie_secure,
        })
    }
}
