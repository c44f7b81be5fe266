mod bot_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;
mod store_config;
mod telegram_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use bot_config::BotConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use store_config::StoreConfig;
pub use telegram_config::TelegramConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "CR_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".collab-room";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
