//! External identity reference asserted by a Telegram login.

use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Longest identity string accepted from a session.
const MAX_TELEGRAM_ID_LENGTH: usize = 64;

/// Telegram account identifier, stored as an opaque string in `users.telegram_id`.
///
/// Construction goes through [`TelegramId::parse`], so a value of this type is
/// never empty and never carries whitespace or control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TelegramId(String);

impl TelegramId {
    #[track_caller]
    pub fn parse(value: &str) -> CoreResult<Self> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(CoreError::InvalidTelegramId {
                value: value.to_string(),
                message: "must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if trimmed.len() > MAX_TELEGRAM_ID_LENGTH {
            return Err(CoreError::InvalidTelegramId {
                value: value.to_string(),
                message: format!("must be at most {MAX_TELEGRAM_ID_LENGTH} characters"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(CoreError::InvalidTelegramId {
                value: value.to_string(),
                message: "must not contain whitespace or control characters".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TelegramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TelegramId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TelegramId> for String {
    fn from(id: TelegramId) -> Self {
        id.0
    }
}
