use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_OAUTH_URL: &str = "https://oauth.telegram.org/auth";

pub const MIN_LOGIN_MAX_AGE_SECS: u64 = 60;
pub const MAX_LOGIN_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;
pub const DEFAULT_LOGIN_MAX_AGE_SECS: u64 = 24 * 60 * 60;

/// Telegram login settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Public bot identifier passed to the OAuth redirect
    pub bot_id: String,
    /// Bot token; keys the login signature check and authenticates the bot
    pub bot_token: String,
    pub oauth_url: String,
    /// Oldest accepted `auth_date` on a login callback
    pub login_max_age_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_id: String::new(),
            bot_token: String::new(),
            oauth_url: String::from(DEFAULT_OAUTH_URL),
            login_max_age_secs: DEFAULT_LOGIN_MAX_AGE_SECS,
        }
    }
}

impl TelegramConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let bot_id = self.bot_id.trim();
        if bot_id.is_empty() {
            return Err(ConfigError::telegram("telegram.bot_id must be set"));
        }

        if !bot_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::telegram(format!(
                "telegram.bot_id must be numeric, got '{}'",
                bot_id
            )));
        }

        if self.bot_token.trim().is_empty() {
            return Err(ConfigError::telegram("telegram.bot_token must be set"));
        }

        if !self.oauth_url.starts_with("https://") && !self.oauth_url.starts_with("http://") {
            return Err(ConfigError::telegram(format!(
                "telegram.oauth_url must be an http(s) URL, got '{}'",
                self.oauth_url
            )));
        }

        if self.login_max_age_secs < MIN_LOGIN_MAX_AGE_SECS
            || self.login_max_age_secs > MAX_LOGIN_MAX_AGE_SECS
        {
            return Err(ConfigError::telegram(format!(
                "telegram.login_max_age_secs must be {}-{}, got {}",
                MIN_LOGIN_MAX_AGE_SECS, MAX_LOGIN_MAX_AGE_SECS, self.login_max_age_secs
            )));
        }

        Ok(())
    }
}
