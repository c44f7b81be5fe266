use crate::{AuthError, Result as AuthErrorResult};

use cr_config::TelegramConfig;

use std::panic::Location;

use error_location::ErrorLocation;
use url::Url;

/// Builds the Telegram OAuth URL a browser is sent to for sign-in.
#[derive(Debug, Clone)]
pub struct LoginRedirect {
    oauth_url: String,
    bot_id: String,
}

impl LoginRedirect {
    pub fn new(oauth_url: &str, bot_id: &str) -> Self {
        Self {
            oauth_url: oauth_url.to_string(),
            bot_id: bot_id.trim().to_string(),
        }
    }

    pub fn from_config(config: &TelegramConfig) -> Self {
        Self::new(&config.oauth_url, &config.bot_id)
    }

    /// `<oauth_url>?bot_id=..&origin=..&return_to=..`
    ///
    /// `return_to` must be an absolute http(s) URL; `origin` is derived from it.
    #[track_caller]
    pub fn url_for(&self, return_to: &str) -> AuthErrorResult<String> {
        let target = Url::parse(return_to).map_err(|e| AuthError::InvalidReturnUrl {
            url: return_to.to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !matches!(target.scheme(), "http" | "https") || target.host_str().is_none() {
            return Err(AuthError::InvalidReturnUrl {
                url: return_to.to_string(),
                message: "must be an absolute http or https URL".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut redirect = Url::parse(&self.oauth_url).map_err(|e| AuthError::InvalidReturnUrl {
            url: self.oauth_url.clone(),
            message: format!("OAuth URL is invalid: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        redirect
            .query_pairs_mut()
            .append_pair("bot_id", &self.bot_id)
            .append_pair("origin", &target.origin().ascii_serialization())
            .append_pair("return_to", target.as_str());

        Ok(redirect.into())
    }
}
