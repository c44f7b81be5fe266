use cr_core::{CompanyOption, ProfileFields, TelegramId, User};
use cr_onboarding::ResolvedIdentity;

use serde::Serialize;

/// Path of the sign-in endpoint, for anonymous callers that gave no `return_to`
pub const LOGIN_PATH: &str = "/auth/telegram/login";

/// GET /api/v1/dashboard body, tagged by `state`
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardResponse {
    Anonymous {
        login_url: String,
    },
    Resolved {
        telegram_id: TelegramId,
        user: Option<User>,
        profile: ProfileFields,
        selected_company_ids: Vec<i64>,
        companies: Vec<CompanyOption>,
    },
}

impl From<ResolvedIdentity> for DashboardResponse {
    fn from(identity: ResolvedIdentity) -> Self {
        let profile = identity.profile();
        Self::Resolved {
            telegram_id: identity.telegram_id,
            user: identity.user,
            profile,
            selected_company_ids: identity.selected_company_ids.into_iter().collect(),
            companies: identity.companies,
        }
    }
}
