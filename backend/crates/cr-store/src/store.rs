use crate::StoreResult;

use cr_core::{Company, CompanyOption, Membership, NewCompany, TelegramId, User, UserUpsert};

use std::collections::BTreeSet;

use async_trait::async_trait;

/// Operations the application performs against the backing store.
///
/// Implementations are shared behind `Arc<dyn Store>`. Every call is a
/// single independent request: there is no transaction spanning calls.
#[async_trait]
pub trait Store: Send + Sync {
    /// Look up the user row for an external identity. Uniqueness of
    /// `telegram_id` is trusted to the store; among duplicates the lowest
    /// id wins.
    async fn find_user_by_telegram_id(&self, telegram_id: &TelegramId)
    -> StoreResult<Option<User>>;

    /// All companies as `(id, name)`, ordered by id
    async fn list_company_options(&self) -> StoreResult<Vec<CompanyOption>>;

    /// Company ids the user is currently linked to
    async fn list_membership_company_ids(&self, user_id: i64) -> StoreResult<BTreeSet<i64>>;

    async fn insert_company(&self, company: &NewCompany) -> StoreResult<Company>;

    async fn delete_company(&self, company_id: i64) -> StoreResult<()>;

    /// Insert or update keyed on `telegram_id`; returns the stored row
    async fn upsert_user(&self, user: &UserUpsert) -> StoreResult<User>;

    async fn delete_memberships(&self, user_id: i64) -> StoreResult<()>;

    async fn insert_memberships(&self, memberships: &[Membership]) -> StoreResult<()>;

    /// Cheap round trip used by readiness checks
    async fn health_check(&self) -> StoreResult<()>;
}
