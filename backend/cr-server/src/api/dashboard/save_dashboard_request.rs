use cr_core::{NewCompany, ProfileFields};

use serde::Deserialize;

/// PUT /api/v1/dashboard body
#[derive(Debug, Deserialize)]
pub struct SaveDashboardRequest {
    #[serde(default)]
    pub profile: ProfileFields,

    /// Created only when `selected_company_ids` is empty and the name is not blank
    #[serde(default)]
    pub new_company: Option<NewCompany>,

    /// Replaces the user's memberships
    #[serde(default)]
    pub selected_company_ids: Vec<i64>,
}
