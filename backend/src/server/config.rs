//! Environment-sourced application configuration.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::Key;

/// Default session signing secret; override with `SESSION_SECRET` in any
/// deployment that matters.
const DEFAULT_SESSION_SECRET: &str = "super_secret_key";

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `DATABASE_URL` is missing or empty.
    #[error("DATABASE_URL must be set to a PostgreSQL connection string")]
    MissingDatabaseUrl,
    /// `BIND_ADDR` is not a parseable socket address.
    #[error("BIND_ADDR is not a valid socket address: {value}")]
    InvalidBindAddr { value: String },
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Secret the session cookie is signed with.
    pub session_secret: String,
    /// Whether the session cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` is absent or `BIND_ADDR` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let bind_raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr { value: bind_raw })?;

        let session_secret = env::var("SESSION_SECRET")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_owned());

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|value| value != "0")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            bind_addr,
            session_secret,
            cookie_secure,
        })
    }

    /// Derive the cookie signing key from the configured secret.
    ///
    /// `Key::derive_from` wants at least 32 bytes of input material, so the
    /// secret is cycled out to 64 bytes first. The constructor guarantees a
    /// non-empty secret.
    pub fn signing_key(&self) -> Key {
        let material: Vec<u8> = self.session_secret.bytes().cycle().take(64).collect();
        Key::derive_from(&material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config_with_secret(secret: &str) -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/test".to_owned(),
            bind_addr: "127.0.0.1:8080".parse().expect("valid address"),
            session_secret: secret.to_owned(),
            cookie_secure: false,
        }
    }

    #[rstest]
    fn signing_key_is_deterministic_per_secret() {
        let first = config_with_secret("super_secret_key").signing_key();
        let second = config_with_secret("super_secret_key").signing_key();
        assert_eq!(first.master(), second.master());
    }

    #[rstest]
    fn different_secrets_give_different_keys() {
        let first = config_with_secret("super_secret_key").signing_key();
        let second = config_with_secret("another_secret").signing_key();
        assert_ne!(first.master(), second.master());
    }

    #[rstest]
    fn short_secrets_still_produce_a_key() {
        // Shorter than the 32-byte minimum `derive_from` would accept raw.
        let key = config_with_secret("abc").signing_key();
        assert!(!key.master().is_empty());
    }
}
