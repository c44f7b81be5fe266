use cr_core::{Company, User};
use cr_onboarding::SaveOutcome;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SaveDashboardResponse {
    pub user: User,
    /// The company inserted by this save, if any
    pub company_created: Option<Company>,
    pub membership_company_ids: Vec<i64>,
}

impl From<SaveOutcome> for SaveDashboardResponse {
    fn from(outcome: SaveOutcome) -> Self {
        Self {
            user: outcome.user,
            company_created: outcome.created_company,
            membership_company_ids: outcome.membership_company_ids.into_iter().collect(),
        }
    }
}
