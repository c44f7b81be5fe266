//! User entity and the profile form bound to it.

use crate::TelegramId;

use serde::{Deserialize, Serialize};

/// A row of the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store
    pub id: i64,
    pub telegram_id: TelegramId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub telegram_handle: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl User {
    /// Profile fields as the dashboard form sees them (NULL columns become empty strings)
    pub fn profile(&self) -> ProfileFields {
        ProfileFields {
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            telegram_handle: self.telegram_handle.clone().unwrap_or_default(),
            linkedin_url: self.linkedin_url.clone().unwrap_or_default(),
        }
    }
}

/// Editable profile fields of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileFields {
    pub first_name: String,
    pub last_name: String,
    pub telegram_handle: String,
    pub linkedin_url: String,
}

impl ProfileFields {
    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            telegram_handle: self.telegram_handle.trim().to_string(),
            linkedin_url: self.linkedin_url.trim().to_string(),
        }
    }
}

/// Upsert payload for `users`, keyed by `telegram_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpsert {
    pub telegram_id: TelegramId,
    #[serde(flatten)]
    pub profile: ProfileFields,
}

impl UserUpsert {
    pub fn new(telegram_id: TelegramId, profile: ProfileFields) -> Self {
        Self {
            telegram_id,
            profile,
        }
    }
}
