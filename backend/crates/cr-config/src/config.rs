use crate::{
    BotConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRECTORY, LoggingConfig, ServerConfig, SessionConfig, StoreConfig,
    TelegramConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub telegram: TelegramConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub bot: BotConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CR_CONFIG_DIR env var, else use ./.collab-room/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply CR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CR_CONFIG_DIR env var > ./.collab-room/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate the sections the HTTP server needs.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.store.validate()?;
        self.telegram.validate()?;
        self.session.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Validate the sections the bot needs. The bot never touches the store.
    pub fn validate_bot(&self) -> ConfigErrorResult<()> {
        if self.telegram.bot_token.trim().is_empty() {
            return Err(ConfigError::telegram("telegram.bot_token must be set"));
        }

        self.bot.validate()
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  store: {} (timeout {}s)",
            self.store.url, self.store.request_timeout_secs
        );
        info!(
            "  telegram: bot_id={}, login max age {}s",
            self.telegram.bot_id, self.telegram.login_max_age_secs
        );
        info!("  session: ttl {}s", self.session.ttl_secs);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  validation: max field length {}",
            self.validation.max_field_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CR_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CR_SERVER_PORT", &mut self.server.port);

        // Store
        Self::apply_env_string("CR_STORE_URL", &mut self.store.url);
        Self::apply_env_string("CR_STORE_ANON_KEY", &mut self.store.anon_key);
        Self::apply_env_parse(
            "CR_STORE_REQUEST_TIMEOUT_SECS",
            &mut self.store.request_timeout_secs,
        );

        // Telegram
        Self::apply_env_string("CR_TELEGRAM_BOT_ID", &mut self.telegram.bot_id);
        Self::apply_env_string("CR_TELEGRAM_BOT_TOKEN", &mut self.telegram.bot_token);
        Self::apply_env_string("CR_TELEGRAM_OAUTH_URL", &mut self.telegram.oauth_url);
        Self::apply_env_parse(
            "CR_TELEGRAM_LOGIN_MAX_AGE_SECS",
            &mut self.telegram.login_max_age_secs,
        );

        // Session
        Self::apply_env_option_string("CR_SESSION_JWT_SECRET", &mut self.session.jwt_secret);
        Self::apply_env_parse("CR_SESSION_TTL_SECS", &mut self.session.ttl_secs);

        // Logging
        Self::apply_env_parse("CR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CR_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "CR_VALIDATION_MAX_FIELD_LENGTH",
            &mut self.validation.max_field_length,
        );

        // Bot
        Self::apply_env_string("CR_BOT_API_URL", &mut self.bot.api_url);
        Self::apply_env_parse("CR_BOT_POLL_TIMEOUT_SECS", &mut self.bot.poll_timeout_secs);
        Self::apply_env_string("CR_BOT_GREETING", &mut self.bot.greeting);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
