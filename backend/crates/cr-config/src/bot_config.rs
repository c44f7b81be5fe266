use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_BOT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_GREETING: &str = "Hello! I am your Collab Room bot. 🚀";

pub const MIN_POLL_TIMEOUT_SECS: u64 = 1;
pub const MAX_POLL_TIMEOUT_SECS: u64 = 50;
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;

/// Telegram bot long-poll settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub api_url: String,
    /// Long-poll timeout passed to `getUpdates`
    pub poll_timeout_secs: u64,
    /// Reply to `/start`
    pub greeting: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_BOT_API_URL),
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
            greeting: String::from(DEFAULT_GREETING),
        }
    }
}

impl BotConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.api_url.starts_with("https://") && !self.api_url.starts_with("http://") {
            return Err(ConfigError::bot(format!(
                "bot.api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }

        if self.poll_timeout_secs < MIN_POLL_TIMEOUT_SECS
            || self.poll_timeout_secs > MAX_POLL_TIMEOUT_SECS
        {
            return Err(ConfigError::bot(format!(
                "bot.poll_timeout_secs must be {}-{}, got {}",
                MIN_POLL_TIMEOUT_SECS, MAX_POLL_TIMEOUT_SECS, self.poll_timeout_secs
            )));
        }

        if self.greeting.trim().is_empty() {
            return Err(ConfigError::bot("bot.greeting must not be empty"));
        }

        Ok(())
    }
}
