//! In-process [`Store`] with the same constraints as the hosted schema.
//!
//! Enforces the `users.telegram_id` and `(user_id, company_id)` uniqueness
//! and the foreign keys of `user_company_relations`. Any operation can be
//! scheduled to fail so partial-failure paths can be exercised.

use crate::{Store, StoreError, StoreOperation, StoreResult};

use cr_core::{Company, CompanyOption, Membership, NewCompany, TelegramId, User, UserUpsert};

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Default)]
struct MemoryState {
    users: BTreeMap<i64, User>,
    companies: BTreeMap<i64, Company>,
    memberships: Vec<Membership>,
    next_user_id: i64,
    next_company_id: i64,
    /// Remaining injected failures per operation
    failures: HashMap<StoreOperation, usize>,
    calls: HashMap<StoreOperation, usize>,
}

impl MemoryState {
    /// Record the call and consume an injected failure if one is pending
    fn enter(&mut self, operation: StoreOperation) -> StoreResult<()> {
        *self.calls.entry(operation).or_default() += 1;

        if let Some(remaining) = self.failures.get_mut(&operation)
            && *remaining > 0
        {
            *remaining -= 1;
            return Err(StoreError::unavailable(operation, "injected failure"));
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make the next `times` calls of `operation` fail as unavailable
    pub fn fail_next(&self, operation: StoreOperation, times: usize) {
        self.state().failures.insert(operation, times);
    }

    /// Number of times `operation` was invoked, failed calls included
    pub fn calls(&self, operation: StoreOperation) -> usize {
        self.state().calls.get(&operation).copied().unwrap_or(0)
    }

    /// Total number of write calls made so far
    pub fn write_calls(&self) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|(operation, _)| operation.is_write())
            .map(|(_, count)| count)
            .sum()
    }

    /// Insert a company directly, bypassing call accounting
    pub fn seed_company(&self, name: &str) -> Company {
        let mut state = self.state();
        state.next_company_id += 1;
        let company = Company {
            id: state.next_company_id,
            name: name.to_string(),
            website: None,
            twitter_handle: None,
            telegram_channel: None,
            linkedin_url: None,
            category: None,
        };
        state.companies.insert(company.id, company.clone());
        company
    }

    /// Insert a user with the given memberships, bypassing call accounting
    pub fn seed_user(&self, telegram_id: &TelegramId, company_ids: &[i64]) -> User {
        let mut state = self.state();
        state.next_user_id += 1;
        let user = User {
            id: state.next_user_id,
            telegram_id: telegram_id.clone(),
            first_name: None,
            last_name: None,
            telegram_handle: None,
            linkedin_url: None,
        };
        state.users.insert(user.id, user.clone());
        for company_id in company_ids {
            state
                .memberships
                .push(Membership::member(user.id, *company_id));
        }
        user
    }

    pub fn user(&self, telegram_id: &TelegramId) -> Option<User> {
        self.state()
            .users
            .values()
            .find(|u| &u.telegram_id == telegram_id)
            .cloned()
    }

    pub fn companies(&self) -> Vec<Company> {
        self.state().companies.values().cloned().collect()
    }

    pub fn memberships(&self, user_id: i64) -> Vec<Membership> {
        self.state()
            .memberships
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_telegram_id(
        &self,
        telegram_id: &TelegramId,
    ) -> StoreResult<Option<User>> {
        let mut state = self.state();
        state.enter(StoreOperation::FindUser)?;

        Ok(state
            .users
            .values()
            .find(|u| &u.telegram_id == telegram_id)
            .cloned())
    }

    async fn list_company_options(&self) -> StoreResult<Vec<CompanyOption>> {
        let mut state = self.state();
        state.enter(StoreOperation::ListCompanies)?;

        Ok(state
            .companies
            .values()
            .map(|c| CompanyOption {
                id: c.id,
                name: c.name.clone(),
            })
            .collect())
    }

    async fn list_membership_company_ids(&self, user_id: i64) -> StoreResult<BTreeSet<i64>> {
        let mut state = self.state();
        state.enter(StoreOperation::ListMemberships)?;

        Ok(state
            .memberships
            .iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.company_id)
            .collect())
    }

    async fn insert_company(&self, company: &NewCompany) -> StoreResult<Company> {
        let mut state = self.state();
        state.enter(StoreOperation::InsertCompany)?;

        state.next_company_id += 1;
        let stored = Company {
            id: state.next_company_id,
            name: company.name.clone(),
            website: Some(company.website.clone()),
            twitter_handle: Some(company.twitter_handle.clone()),
            telegram_channel: Some(company.telegram_channel.clone()),
            linkedin_url: Some(company.linkedin_url.clone()),
            category: Some(company.category.clone()),
        };
        state.companies.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn delete_company(&self, company_id: i64) -> StoreResult<()> {
        let mut state = self.state();
        state.enter(StoreOperation::DeleteCompany)?;

        if state.memberships.iter().any(|m| m.company_id == company_id) {
            return Err(StoreError::rejected(
                StoreOperation::DeleteCompany,
                409,
                FOREIGN_KEY_VIOLATION,
                format!("company {} is still referenced", company_id),
            ));
        }

        state.companies.remove(&company_id);
        Ok(())
    }

    async fn upsert_user(&self, user: &UserUpsert) -> StoreResult<User> {
        let mut state = self.state();
        state.enter(StoreOperation::UpsertUser)?;

        let existing_id = state
            .users
            .values()
            .find(|u| u.telegram_id == user.telegram_id)
            .map(|u| u.id);

        let id = match existing_id {
            Some(id) => id,
            None => {
                state.next_user_id += 1;
                state.next_user_id
            }
        };

        let stored = User {
            id,
            telegram_id: user.telegram_id.clone(),
            first_name: Some(user.profile.first_name.clone()),
            last_name: Some(user.profile.last_name.clone()),
            telegram_handle: Some(user.profile.telegram_handle.clone()),
            linkedin_url: Some(user.profile.linkedin_url.clone()),
        };
        state.users.insert(id, stored.clone());

        Ok(stored)
    }

    async fn delete_memberships(&self, user_id: i64) -> StoreResult<()> {
        let mut state = self.state();
        state.enter(StoreOperation::DeleteMemberships)?;

        state.memberships.retain(|m| m.user_id != user_id);
        Ok(())
    }

    async fn insert_memberships(&self, memberships: &[Membership]) -> StoreResult<()> {
        if memberships.is_empty() {
            return Ok(());
        }

        let mut state = self.state();
        state.enter(StoreOperation::InsertMemberships)?;

        // Bulk insert is all-or-nothing: check every row before writing any
        let mut seen = BTreeSet::new();
        for membership in memberships {
            if !state.users.contains_key(&membership.user_id)
                || !state.companies.contains_key(&membership.company_id)
            {
                return Err(StoreError::rejected(
                    StoreOperation::InsertMemberships,
                    409,
                    FOREIGN_KEY_VIOLATION,
                    format!(
                        "user {} or company {} does not exist",
                        membership.user_id, membership.company_id
                    ),
                ));
            }

            let key = (membership.user_id, membership.company_id);
            let duplicate = state
                .memberships
                .iter()
                .any(|m| (m.user_id, m.company_id) == key);
            if duplicate || !seen.insert(key) {
                return Err(StoreError::rejected(
                    StoreOperation::InsertMemberships,
                    409,
                    UNIQUE_VIOLATION,
                    format!(
                        "membership ({}, {}) already exists",
                        membership.user_id, membership.company_id
                    ),
                ));
            }
        }

        state.memberships.extend(memberships.iter().cloned());
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.state().enter(StoreOperation::HealthCheck)
    }
}
