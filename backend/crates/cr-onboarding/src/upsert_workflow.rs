use crate::{
    OnboardingError, ProfileValidator, Result as OnboardingResult, SaveOutcome, SaveRequest,
};

use cr_core::{Company, Membership, User, UserUpsert};
use cr_store::{Store, StoreOperation};

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, error, info, warn};

/// Persists one dashboard submission.
///
/// Steps, after validation:
/// 1. insert the new company, if the request creates one;
/// 2. upsert the user by `telegram_id` (concurrently with 1);
/// 3. replace the user's memberships with the effective selection.
///
/// The store has no transactions, so failures are compensated instead: a
/// company created by a save that fails afterwards is deleted again, and a
/// failed membership insert puts the previous set back.
#[derive(Clone)]
pub struct UpsertWorkflow {
    store: Arc<dyn Store>,
    validator: Arc<ProfileValidator>,
}

impl UpsertWorkflow {
    pub fn new(store: Arc<dyn Store>, validator: ProfileValidator) -> Self {
        Self {
            store,
            validator: Arc::new(validator),
        }
    }

    pub async fn save(&self, request: SaveRequest) -> OnboardingResult<SaveOutcome> {
        let request = request.trimmed();
        self.validator.validate(&request)?;

        let prefix = format!("[tg:{}]", request.telegram_id);
        debug!(
            "{} Save starting: creates_company={}, selection={:?}",
            prefix,
            request.creates_company(),
            request.selected_company_ids
        );

        let (created_company, user) = self.resolve_company_and_user(&request, &prefix).await?;

        let effective_ids = match &created_company {
            Some(company) => BTreeSet::from([company.id]),
            None => request.selected_company_ids.clone(),
        };

        if let Err(e) = self
            .replace_memberships(user.id, &effective_ids, &prefix)
            .await
        {
            // Nothing links to the new company once the insert has failed
            if let Some(company) = &created_company {
                self.discard_company(company, &prefix).await;
            }
            return Err(e);
        }

        info!(
            "{} Saved user {} with {} membership(s){}",
            prefix,
            user.id,
            effective_ids.len(),
            created_company
                .as_ref()
                .map(|c| format!(", created company {}", c.id))
                .unwrap_or_default()
        );

        Ok(SaveOutcome {
            user,
            created_company,
            membership_company_ids: effective_ids,
        })
    }

    /// Steps 1 and 2. Both run to completion so the compensation can see
    /// which one succeeded.
    async fn resolve_company_and_user(
        &self,
        request: &SaveRequest,
        prefix: &str,
    ) -> OnboardingResult<(Option<Company>, User)> {
        let company_step = async {
            match request.new_company.as_ref() {
                Some(company) if request.creates_company() => {
                    self.store.insert_company(company).await.map(Some)
                }
                _ => Ok(None),
            }
        };
        let upsert = UserUpsert::new(request.telegram_id.clone(), request.profile.clone());
        let user_step = self.store.upsert_user(&upsert);

        let (company_result, user_result) = tokio::join!(company_step, user_step);

        match (company_result, user_result) {
            (Ok(company), Ok(user)) => Ok((company, user)),
            (Ok(company), Err(e)) => {
                warn!("{} User upsert failed: {}", prefix, e);
                if let Some(company) = company {
                    self.discard_company(&company, prefix).await;
                }
                Err(OnboardingError::save_failed(
                    StoreOperation::UpsertUser,
                    e,
                    false,
                    None,
                ))
            }
            (Err(e), Ok(user)) => {
                warn!(
                    "{} Company insert failed; user {} stays updated: {}",
                    prefix, user.id, e
                );
                Err(OnboardingError::save_failed(
                    StoreOperation::InsertCompany,
                    e,
                    true,
                    None,
                ))
            }
            (Err(company_error), Err(user_error)) => {
                warn!(
                    "{} Company insert and user upsert both failed: {}; {}",
                    prefix, company_error, user_error
                );
                Err(OnboardingError::save_failed(
                    StoreOperation::InsertCompany,
                    company_error,
                    false,
                    None,
                ))
            }
        }
    }

    /// Step 3: delete-all-then-insert, restoring the previous set if the
    /// insert fails.
    async fn replace_memberships(
        &self,
        user_id: i64,
        company_ids: &BTreeSet<i64>,
        prefix: &str,
    ) -> OnboardingResult<()> {
        let previous = self
            .store
            .list_membership_company_ids(user_id)
            .await
            .map_err(|e| {
                OnboardingError::save_failed(StoreOperation::ListMemberships, e, true, None)
            })?;

        self.store
            .delete_memberships(user_id)
            .await
            .map_err(|e| {
                OnboardingError::save_failed(StoreOperation::DeleteMemberships, e, true, None)
            })?;

        let rows = Self::membership_rows(user_id, company_ids);
        let Err(insert_error) = self.store.insert_memberships(&rows).await else {
            return Ok(());
        };

        warn!(
            "{} Membership insert failed, restoring {} previous: {}",
            prefix,
            previous.len(),
            insert_error
        );

        let restored = match self
            .store
            .insert_memberships(&Self::membership_rows(user_id, &previous))
            .await
        {
            Ok(()) => true,
            Err(restore_error) => {
                error!(
                    "{} Could not restore memberships {:?}: {}",
                    prefix, previous, restore_error
                );
                false
            }
        };

        Err(OnboardingError::save_failed(
            StoreOperation::InsertMemberships,
            insert_error,
            true,
            Some(restored),
        ))
    }

    async fn discard_company(&self, company: &Company, prefix: &str) {
        match self.store.delete_company(company.id).await {
            Ok(()) => debug!("{} Removed company {} after failed save", prefix, company.id),
            Err(e) => error!(
                "{} Company {} ('{}') left behind after failed save: {}",
                prefix, company.id, company.name, e
            ),
        }
    }

    fn membership_rows(user_id: i64, company_ids: &BTreeSet<i64>) -> Vec<Membership> {
        company_ids
            .iter()
            .map(|company_id| Membership::member(user_id, *company_id))
            .collect()
    }
}
