//! User-to-company association rows (`user_company_relations`).

use serde::{Deserialize, Serialize};

/// The only role the onboarding workflow assigns.
pub const DEFAULT_MEMBERSHIP_ROLE: &str = "Member";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Membership {
    pub user_id: i64,
    pub company_id: i64,
    pub role: String,
}

impl Membership {
    /// Membership with the default role
    pub fn member(user_id: i64, company_id: i64) -> Self {
        Self {
            user_id,
            company_id,
            role: DEFAULT_MEMBERSHIP_ROLE.to_string(),
        }
    }
}
