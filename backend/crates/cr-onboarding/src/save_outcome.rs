use cr_core::{Company, User};

use std::collections::BTreeSet;

/// Result of a completed save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub user: User,
    pub created_company: Option<Company>,
    /// Membership set now stored for the user
    pub membership_company_ids: BTreeSet<i64>,
}
