//! Runtime configuration for the roster server.

use std::{env, fmt};
use thiserror::Error;

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ADMIN_PASSWORD must be set")]
    MissingAdminPassword,
}

#[derive(Clone)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub server_addr: String,
    /// Password for the `admin` user on `/admin`.
    pub admin_password: String,
    /// Largest accepted request body.
    pub max_body_bytes: usize,
    /// Start with the `test` fixture player already stored.
    pub seed_test_player: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_password = lookup("ADMIN_PASSWORD")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingAdminPassword)?;

        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.into());

        let max_body_bytes = lookup("MAX_BODY_BYTES")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        let seed_test_player = lookup("SEED_TEST_PLAYER")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Settings {
            server_addr,
            admin_password,
            max_body_bytes,
            seed_test_player,
        })
    }
}

// Keep the password out of logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("server_addr", &self.server_addr)
            .field("admin_password", &"<redacted>")
            .field("max_body_bytes", &self.max_body_bytes)
            .field("seed_test_player", &self.seed_test_player)
            .finish()
    }
}
