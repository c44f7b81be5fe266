use crate::{AuthError, Result as AuthErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;

const HASH_FIELD: &str = "hash";
const ID_FIELD: &str = "id";
const AUTH_DATE_FIELD: &str = "auth_date";

/// Login payload Telegram appends to the callback URL.
///
/// Every received field except `hash` takes part in the signature, so the
/// fields are kept as received rather than mapped onto a fixed struct.
#[derive(Debug, Clone)]
pub struct TelegramLogin {
    fields: BTreeMap<String, String>,
    hash: String,
    auth_date: i64,
}

impl TelegramLogin {
    /// Build from callback query pairs. `id`, `auth_date` and `hash` are required.
    #[track_caller]
    pub fn from_pairs<I>(pairs: I) -> AuthErrorResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields: BTreeMap<String, String> = pairs.into_iter().collect();

        let hash = fields
            .remove(HASH_FIELD)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Self::missing(HASH_FIELD))?;

        if fields.get(ID_FIELD).is_none_or(|id| id.is_empty()) {
            return Err(Self::missing(ID_FIELD));
        }

        let raw_date = fields
            .get(AUTH_DATE_FIELD)
            .ok_or_else(|| Self::missing(AUTH_DATE_FIELD))?;
        let auth_date = raw_date
            .parse::<i64>()
            .map_err(|_| AuthError::InvalidLogin {
                field: AUTH_DATE_FIELD.to_string(),
                message: format!("auth_date must be a Unix timestamp, got '{}'", raw_date),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            fields,
            hash,
            auth_date,
        })
    }

    /// `key=value` lines sorted by key, `hash` excluded
    pub fn data_check_string(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn id(&self) -> &str {
        self.fields.get(ID_FIELD).map(String::as_str).unwrap_or_default()
    }

    pub fn auth_date(&self) -> i64 {
        self.auth_date
    }

    pub fn username(&self) -> Option<&str> {
        self.field("username")
    }

    pub fn first_name(&self) -> Option<&str> {
        self.field("first_name")
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    #[track_caller]
    fn missing(field: &str) -> AuthError {
        AuthError::InvalidLogin {
            field: field.to_string(),
            message: format!("{} is required", field),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
