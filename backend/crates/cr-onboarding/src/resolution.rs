use cr_core::{CompanyOption, ProfileFields, TelegramId, User};

use std::collections::BTreeSet;

/// Dashboard state for a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No identity: show the sign-in link, persist nothing
    Anonymous,
    Resolved(ResolvedIdentity),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub telegram_id: TelegramId,
    /// `None` until the first save
    pub user: Option<User>,
    pub selected_company_ids: BTreeSet<i64>,
    /// Every company, ordered by id
    pub companies: Vec<CompanyOption>,
}

impl ResolvedIdentity {
    /// Form values to pre-fill; empty for a user that does not exist yet
    pub fn profile(&self) -> ProfileFields {
        self.user.as_ref().map(User::profile).unwrap_or_default()
    }

    pub fn is_new_user(&self) -> bool {
        self.user.is_none()
    }
}
