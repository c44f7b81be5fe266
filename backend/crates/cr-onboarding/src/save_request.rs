use cr_core::{NewCompany, ProfileFields, TelegramId};

use std::collections::BTreeSet;

/// One submission of the dashboard form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub telegram_id: TelegramId,
    pub profile: ProfileFields,
    pub new_company: Option<NewCompany>,
    pub selected_company_ids: BTreeSet<i64>,
}

impl SaveRequest {
    /// Whether this save inserts a company: nothing selected and a named new company
    pub fn creates_company(&self) -> bool {
        self.selected_company_ids.is_empty()
            && self.new_company.as_ref().is_some_and(NewCompany::has_name)
    }

    /// Copy with every text field trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            telegram_id: self.telegram_id.clone(),
            profile: self.profile.trimmed(),
            new_company: self.new_company.as_ref().map(NewCompany::trimmed),
            selected_company_ids: self.selected_company_ids.clone(),
        }
    }
}
