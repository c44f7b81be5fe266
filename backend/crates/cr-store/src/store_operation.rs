use std::fmt;

/// Every call the application makes against the backing store.
///
/// Carried by [`crate::StoreError`] so a failure always names the step that
/// failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreOperation {
    FindUser,
    ListCompanies,
    ListMemberships,
    InsertCompany,
    DeleteCompany,
    UpsertUser,
    DeleteMemberships,
    InsertMemberships,
    HealthCheck,
}

impl StoreOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FindUser => "find_user",
            Self::ListCompanies => "list_companies",
            Self::ListMemberships => "list_memberships",
            Self::InsertCompany => "insert_company",
            Self::DeleteCompany => "delete_company",
            Self::UpsertUser => "upsert_user",
            Self::DeleteMemberships => "delete_memberships",
            Self::InsertMemberships => "insert_memberships",
            Self::HealthCheck => "health_check",
        }
    }

    /// True for operations that modify rows
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Self::InsertCompany
                | Self::DeleteCompany
                | Self::UpsertUser
                | Self::DeleteMemberships
                | Self::InsertMemberships
        )
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
