use crate::{AuthError, Claims, Result as AuthErrorResult, VerifiedLogin};

use cr_config::SessionConfig;

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

/// A signed session and when it stops being accepted.
#[derive(Debug, Clone, Serialize)]
pub struct SessionToken {
    pub token: String,
    /// Unix seconds
    pub expires_at: i64,
}

/// Signs HS256 session tokens for verified logins.
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl SessionIssuer {
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// `None` when no secret is configured
    pub fn from_config(config: &SessionConfig) -> Option<Self> {
        config
            .jwt_secret
            .as_ref()
            .map(|secret| Self::with_hs256(secret.as_bytes(), config.ttl_secs))
    }

    #[track_caller]
    pub fn issue(&self, login: &VerifiedLogin) -> AuthErrorResult<SessionToken> {
        self.issue_at(login, chrono::Utc::now().timestamp())
    }

    #[track_caller]
    pub fn issue_at(&self, login: &VerifiedLogin, now: i64) -> AuthErrorResult<SessionToken> {
        let claims = Claims {
            sub: login.telegram_id.to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
            username: login.username.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        Ok(SessionToken {
            token,
            expires_at: claims.exp,
        })
    }
}
