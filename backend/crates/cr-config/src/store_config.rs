use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Hosted backing store (PostgREST endpoint) settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) access key sent as `apikey` and bearer token
    pub anon_key: String,
    /// Upper bound for every store request
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigError::store("store.url must be set"));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::store(format!(
                "store.url must be an http(s) URL, got '{}'",
                url
            )));
        }

        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::store("store.anon_key must be set"));
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::store(format!(
                "store.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }
}
