use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_JWT_SECRET_LENGTH: usize = 32;

pub const MIN_TTL_SECS: u64 = 60;
pub const MAX_TTL_SECS: u64 = 7 * 24 * 60 * 60;
pub const DEFAULT_TTL_SECS: u64 = 60 * 60;

/// Session tokens issued after a verified Telegram login.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// HS256 signing secret
    pub jwt_secret: Option<String>,
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => return Err(ConfigError::session("session.jwt_secret must be set")),
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::session(format!(
                    "session.jwt_secret must be at least {} bytes",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if self.ttl_secs < MIN_TTL_SECS || self.ttl_secs > MAX_TTL_SECS {
            return Err(ConfigError::session(format!(
                "session.ttl_secs must be {}-{}, got {}",
                MIN_TTL_SECS, MAX_TTL_SECS, self.ttl_secs
            )));
        }

        Ok(())
    }
}
