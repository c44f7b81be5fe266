use crate::{AuthError, MAX_CLOCK_SKEW_SECS, Result as AuthErrorResult, TelegramLogin};

use cr_config::TelegramConfig;
use cr_core::TelegramId;

use std::panic::Location;

use error_location::ErrorLocation;
use hmac::{Hmac, Mac};
use log::debug;
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Identity extracted from a login whose signature and age checked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedLogin {
    pub telegram_id: TelegramId,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub auth_date: i64,
}

/// Checks Telegram login payloads against the bot token.
///
/// The HMAC key is `SHA256(bot_token)`; the token itself is not kept.
pub struct TelegramLoginVerifier {
    secret_key: Vec<u8>,
    max_age_secs: u64,
}

impl TelegramLoginVerifier {
    pub fn new(bot_token: &str, max_age_secs: u64) -> Self {
        Self {
            secret_key: Sha256::digest(bot_token.as_bytes()).to_vec(),
            max_age_secs,
        }
    }

    pub fn from_config(config: &TelegramConfig) -> Self {
        Self::new(&config.bot_token, config.login_max_age_secs)
    }

    /// Verify against the current time
    #[track_caller]
    pub fn verify(&self, login: &TelegramLogin) -> AuthErrorResult<VerifiedLogin> {
        self.verify_at(login, chrono::Utc::now().timestamp())
    }

    /// Verify as of `now` (Unix seconds)
    #[track_caller]
    pub fn verify_at(&self, login: &TelegramLogin, now: i64) -> AuthErrorResult<VerifiedLogin> {
        let provided = hex::decode(login.hash()).map_err(|_| AuthError::SignatureMismatch {
            location: ErrorLocation::from(Location::caller()),
        })?;

        // verify_slice compares in constant time
        self.mac_for(login)?
            .verify_slice(&provided)
            .map_err(|_| AuthError::SignatureMismatch {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let age_secs = now - login.auth_date();
        if age_secs < -MAX_CLOCK_SKEW_SECS {
            return Err(AuthError::LoginFromFuture {
                ahead_secs: -age_secs,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if age_secs > 0 && age_secs as u64 > self.max_age_secs {
            return Err(AuthError::LoginExpired {
                age_secs,
                max_age_secs: self.max_age_secs,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let telegram_id = TelegramId::parse(login.id()).map_err(|e| AuthError::InvalidLogin {
            field: "id".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!("Verified Telegram login for {}", telegram_id);

        Ok(VerifiedLogin {
            telegram_id,
            username: login.username().map(str::to_string),
            first_name: login.first_name().map(str::to_string),
            auth_date: login.auth_date(),
        })
    }

    /// Hex signature for `login`'s fields; what Telegram would have sent
    #[track_caller]
    pub fn sign(&self, login: &TelegramLogin) -> AuthErrorResult<String> {
        Ok(hex::encode(self.mac_for(login)?.finalize().into_bytes()))
    }

    #[track_caller]
    fn mac_for(&self, login: &TelegramLogin) -> AuthErrorResult<HmacSha256> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&self.secret_key).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("HMAC key rejected: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;
        mac.update(login.data_check_string().as_bytes());
        Ok(mac)
    }
}
