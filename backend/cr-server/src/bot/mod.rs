//! Telegram bot that answers `/start` with a greeting.
//!
//! Runs as its own binary (`cr-bot`) and never touches the store.

pub mod bot_error;
pub mod bot_runner;
pub mod telegram_bot_client;
pub mod update;
