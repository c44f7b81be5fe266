use crate::rest::select_query::SelectQuery;
use crate::{
    COMPANIES_TABLE, Filter, MEMBERSHIPS_TABLE, RestClient, Store, StoreError, StoreOperation,
    StoreResult, USERS_TABLE,
};

use cr_config::StoreConfig;
use cr_core::{Company, CompanyOption, Membership, NewCompany, TelegramId, User, UserUpsert};

use std::collections::BTreeSet;

use async_trait::async_trait;
use log::warn;
use serde::Deserialize;

const USER_COLUMNS: &str = "id,telegram_id,first_name,last_name,telegram_handle,linkedin_url";
const COMPANY_COLUMNS: &str =
    "id,name,website,twitter_handle,telegram_channel,linkedin_url,category";
const COMPANY_OPTION_COLUMNS: &str = "id,name";
const USER_UPSERT_CONFLICT: &str = "telegram_id";

#[derive(Deserialize)]
struct CompanyIdRow {
    company_id: i64,
}

/// [`Store`] over the hosted PostgREST API.
pub struct RestStore {
    client: RestClient,
}

impl RestStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    #[track_caller]
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        Ok(Self::new(RestClient::from_config(config)?))
    }
}

#[async_trait]
impl Store for RestStore {
    async fn find_user_by_telegram_id(
        &self,
        telegram_id: &TelegramId,
    ) -> StoreResult<Option<User>> {
        // Two rows are enough to notice a duplicate; the lowest id wins
        let query = SelectQuery::new(USER_COLUMNS)
            .filter(Filter::eq("telegram_id", telegram_id))
            .order("id.asc")
            .limit(2);
        let users: Vec<User> = self
            .client
            .select(StoreOperation::FindUser, USERS_TABLE, &query)
            .await?;

        if users.len() > 1 {
            warn!(
                "{} users share telegram_id {}; using id {}",
                users.len(),
                telegram_id,
                users[0].id
            );
        }

        Ok(users.into_iter().next())
    }

    async fn list_company_options(&self) -> StoreResult<Vec<CompanyOption>> {
        let query = SelectQuery::new(COMPANY_OPTION_COLUMNS).order("id.asc");
        self.client
            .select(StoreOperation::ListCompanies, COMPANIES_TABLE, &query)
            .await
    }

    async fn list_membership_company_ids(&self, user_id: i64) -> StoreResult<BTreeSet<i64>> {
        let query = SelectQuery::new("company_id").filter(Filter::eq("user_id", user_id));
        let rows: Vec<CompanyIdRow> = self
            .client
            .select(StoreOperation::ListMemberships, MEMBERSHIPS_TABLE, &query)
            .await?;

        Ok(rows.into_iter().map(|row| row.company_id).collect())
    }

    async fn insert_company(&self, company: &NewCompany) -> StoreResult<Company> {
        let rows: Vec<Company> = self
            .client
            .insert(
                StoreOperation::InsertCompany,
                COMPANIES_TABLE,
                std::slice::from_ref(company),
                COMPANY_COLUMNS,
            )
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::missing_row(StoreOperation::InsertCompany))
    }

    async fn delete_company(&self, company_id: i64) -> StoreResult<()> {
        self.client
            .delete(
                StoreOperation::DeleteCompany,
                COMPANIES_TABLE,
                &[Filter::eq("id", company_id)],
            )
            .await
    }

    async fn upsert_user(&self, user: &UserUpsert) -> StoreResult<User> {
        let rows: Vec<User> = self
            .client
            .upsert(
                StoreOperation::UpsertUser,
                USERS_TABLE,
                std::slice::from_ref(user),
                USER_UPSERT_CONFLICT,
                USER_COLUMNS,
            )
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::missing_row(StoreOperation::UpsertUser))
    }

    async fn delete_memberships(&self, user_id: i64) -> StoreResult<()> {
        self.client
            .delete(
                StoreOperation::DeleteMemberships,
                MEMBERSHIPS_TABLE,
                &[Filter::eq("user_id", user_id)],
            )
            .await
    }

    async fn insert_memberships(&self, memberships: &[Membership]) -> StoreResult<()> {
        if memberships.is_empty() {
            return Ok(());
        }

        self.client
            .insert_minimal(
                StoreOperation::InsertMemberships,
                MEMBERSHIPS_TABLE,
                memberships,
            )
            .await
    }

    async fn health_check(&self) -> StoreResult<()> {
        let query = SelectQuery::new("id").limit(1);
        let _: Vec<serde_json::Value> = self
            .client
            .select(StoreOperation::HealthCheck, COMPANIES_TABLE, &query)
            .await?;
        Ok(())
    }
}
