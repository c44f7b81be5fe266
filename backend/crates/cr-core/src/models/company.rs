//! Company entity, its creation form and its selection projection.

use serde::{Deserialize, Serialize};

/// A row of the `companies` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Assigned by the store
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub twitter_handle: Option<String>,
    #[serde(default)]
    pub telegram_channel: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Fields for a company that does not exist yet. Also the insert payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCompany {
    pub name: String,
    pub website: String,
    pub twitter_handle: String,
    pub telegram_channel: String,
    pub linkedin_url: String,
    pub category: String,
}

impl NewCompany {
    /// A new company is only created when it has a non-blank name
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            website: self.website.trim().to_string(),
            twitter_handle: self.twitter_handle.trim().to_string(),
            telegram_channel: self.telegram_channel.trim().to_string(),
            linkedin_url: self.linkedin_url.trim().to_string(),
            category: self.category.trim().to_string(),
        }
    }
}

/// `(id, name)` pair used to populate the company selection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyOption {
    pub id: i64,
    pub name: String,
}
