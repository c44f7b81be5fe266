//! Axum extractor for the session bearer token

use crate::{ApiError, AppState};

use cr_core::TelegramId;

use std::future::Future;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

/// Identity carried by the request's session token.
///
/// No `Authorization` header means anonymous (`None`). A header that is
/// present but malformed, forged or expired is rejected with 401 rather
/// than treated as anonymous.
pub struct Session(pub Option<TelegramId>);

impl Session {
    /// The identity, or 401 for anonymous callers
    #[track_caller]
    pub fn require(self) -> Result<TelegramId, ApiError> {
        self.0
            .ok_or_else(|| ApiError::unauthorized("Sign in with Telegram to save the dashboard"))
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(AUTHORIZATION) else {
                return Ok(Session(None));
            };

            let header = header_value
                .to_str()
                .map_err(|_| ApiError::unauthorized("Authorization header is not valid text"))?;

            let claims = state.session_validator.validate_header(header)?;
            let telegram_id = claims.telegram_id()?;

            log::debug!("Session for telegram id {}", telegram_id);

            Ok(Session(Some(telegram_id)))
        }
    }
}
