use crate::{Resolution, ResolvedIdentity, Result as OnboardingResult};

use cr_core::TelegramId;
use cr_store::Store;

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, warn};

/// Loads the dashboard state for a caller.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn Store>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// `None` resolves to [`Resolution::Anonymous`] without touching the store.
    ///
    /// The user lookup and the company list are fetched concurrently; the
    /// membership read follows only when the user exists.
    pub async fn resolve(
        &self,
        telegram_id: Option<&TelegramId>,
    ) -> OnboardingResult<Resolution> {
        let Some(telegram_id) = telegram_id else {
            debug!("No identity; dashboard is anonymous");
            return Ok(Resolution::Anonymous);
        };

        let (user, companies) = tokio::try_join!(
            self.store.find_user_by_telegram_id(telegram_id),
            self.store.list_company_options(),
        )
        .inspect_err(|e| warn!("[tg:{}] Dashboard load failed: {}", telegram_id, e))?;

        let selected_company_ids = match &user {
            Some(user) => self
                .store
                .list_membership_company_ids(user.id)
                .await
                .inspect_err(|e| warn!("[tg:{}] Membership load failed: {}", telegram_id, e))?,
            None => BTreeSet::new(),
        };

        debug!(
            "[tg:{}] Resolved: user={:?}, {} memberships, {} companies",
            telegram_id,
            user.as_ref().map(|u| u.id),
            selected_company_ids.len(),
            companies.len()
        );

        Ok(Resolution::Resolved(ResolvedIdentity {
            telegram_id: telegram_id.clone(),
            user,
            selected_company_ids,
            companies,
        }))
    }
}
