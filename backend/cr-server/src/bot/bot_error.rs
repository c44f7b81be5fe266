use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot API request {method} failed: {message} {location}")]
    Transport {
        method: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Bot API {method} returned an error: {description} {location}")]
    Api {
        method: &'static str,
        description: String,
        location: ErrorLocation,
    },

    #[error("Bot API {method} response could not be decoded: {message} {location}")]
    Decode {
        method: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Bot client initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, BotError>;
