use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_FIELD_LENGTH: usize = 16;
pub const MAX_FIELD_LENGTH: usize = 4096;
pub const DEFAULT_MAX_FIELD_LENGTH: usize = 256;

/// Limits applied to dashboard form fields before anything is written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length (in characters) of any profile or company field
    pub max_field_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_field_length: DEFAULT_MAX_FIELD_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_field_length < MIN_FIELD_LENGTH || self.max_field_length > MAX_FIELD_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_field_length must be {}-{}, got {}",
                MIN_FIELD_LENGTH, MAX_FIELD_LENGTH, self.max_field_length
            )));
        }

        Ok(())
    }
}
