use crate::{AuthError, Result as AuthErrorResult};

use cr_core::TelegramId;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (Telegram user id)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Telegram username at sign-in, if the account has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.iat > self.exp {
            return Err(AuthError::InvalidClaim {
                claim: "iat".to_string(),
                message: "iat is after exp".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.telegram_id().map(|_| ())
    }

    /// The subject as a Telegram identity
    #[track_caller]
    pub fn telegram_id(&self) -> AuthErrorResult<TelegramId> {
        TelegramId::parse(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
