use crate::rest::postgrest_error::PostgrestError;
use crate::rest::select_query::SelectQuery;
use crate::{Filter, StoreError, StoreOperation, StoreResult};

use cr_config::StoreConfig;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Path of the PostgREST API below the project URL
pub const REST_PATH: &str = "/rest/v1";

const PREFER_REPRESENTATION: &str = "return=representation";
const PREFER_MINIMAL: &str = "return=minimal";
const PREFER_UPSERT: &str = "resolution=merge-duplicates,return=representation";

/// HTTP client for a PostgREST endpoint.
///
/// Every request carries the access key both as `apikey` and as bearer
/// token, and is bounded by the configured timeout.
pub struct RestClient {
    pub base_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl RestClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://xyz.supabase.co")
    /// * `api_key` - Public access key
    /// * `timeout` - Upper bound for each request
    #[track_caller]
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> StoreResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Initialization {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    #[track_caller]
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        Self::new(
            &config.url,
            &config.anon_key,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Read rows from `table`
    pub async fn select<T: DeserializeOwned>(
        &self,
        operation: StoreOperation,
        table: &str,
        query: &SelectQuery<'_>,
    ) -> StoreResult<Vec<T>> {
        let mut params = vec![("select", query.columns.to_string())];
        if let Some(order) = query.order {
            params.push(("order", order.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }

        let url = self.table_url(table, &params, &query.filters)?;
        let body = self
            .execute(operation, self.request(Method::GET, url))
            .await?;
        Self::decode_rows(operation, &body)
    }

    /// Insert rows and return them as stored, restricted to `returning` columns
    pub async fn insert<B, T>(
        &self,
        operation: StoreOperation,
        table: &str,
        rows: &B,
        returning: &str,
    ) -> StoreResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.table_url(table, &[("select", returning.to_string())], &[])?;
        let req = self
            .request(Method::POST, url)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(rows);
        let body = self.execute(operation, req).await?;
        Self::decode_rows(operation, &body)
    }

    /// Insert rows without asking for them back
    pub async fn insert_minimal<B>(
        &self,
        operation: StoreOperation,
        table: &str,
        rows: &B,
    ) -> StoreResult<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.table_url(table, &[], &[])?;
        let req = self
            .request(Method::POST, url)
            .header("Prefer", PREFER_MINIMAL)
            .json(rows);
        self.execute(operation, req).await?;
        Ok(())
    }

    /// Insert, or merge into the row that conflicts on `on_conflict`
    pub async fn upsert<B, T>(
        &self,
        operation: StoreOperation,
        table: &str,
        rows: &B,
        on_conflict: &str,
        returning: &str,
    ) -> StoreResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let params = [
            ("on_conflict", on_conflict.to_string()),
            ("select", returning.to_string()),
        ];
        let url = self.table_url(table, &params, &[])?;
        let req = self
            .request(Method::POST, url)
            .header("Prefer", PREFER_UPSERT)
            .json(rows);
        let body = self.execute(operation, req).await?;
        Self::decode_rows(operation, &body)
    }

    /// Delete every row matching `filters`
    pub async fn delete(
        &self,
        operation: StoreOperation,
        table: &str,
        filters: &[Filter],
    ) -> StoreResult<()> {
        let url = self.table_url(table, &[], filters)?;
        let req = self
            .request(Method::DELETE, url)
            .header("Prefer", PREFER_MINIMAL);
        self.execute(operation, req).await?;
        Ok(())
    }

    fn table_url(
        &self,
        table: &str,
        params: &[(&str, String)],
        filters: &[Filter],
    ) -> StoreResult<Url> {
        let mut url = Url::parse(&format!("{}{}/{}", self.base_url, REST_PATH, table)).map_err(
            |e| StoreError::Initialization {
                message: format!("Invalid store URL '{}': {}", self.base_url, e),
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        if !params.is_empty() || !filters.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
            for filter in filters {
                pairs.append_pair(filter.column(), filter.expression());
            }
        }

        Ok(url)
    }

    /// Build a request with the access key headers
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Send a request and classify failures; returns the raw body on success
    async fn execute(&self, operation: StoreOperation, req: RequestBuilder) -> StoreResult<String> {
        debug!("Store request: {}", operation);

        let response = req
            .send()
            .await
            .map_err(|e| Self::transport_error(operation, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Self::transport_error(operation, e))?;

        if status.is_success() {
            return Ok(body);
        }

        let error = PostgrestError::from_body(&body);

        if status.is_server_error()
            || status == StatusCode::TOO_MANY_REQUESTS
            || status == StatusCode::REQUEST_TIMEOUT
        {
            return Err(StoreError::Unavailable {
                operation,
                message: format!("HTTP {}: {}", status.as_u16(), error.describe()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Err(StoreError::Rejected {
            operation,
            status: status.as_u16(),
            code: error.code_or("HTTP"),
            message: error.describe(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn transport_error(operation: StoreOperation, error: reqwest::Error) -> StoreError {
        let message = if error.is_timeout() {
            format!("request timed out: {}", error)
        } else {
            error.to_string()
        };

        StoreError::Unavailable {
            operation,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn decode_rows<T: DeserializeOwned>(operation: StoreOperation, body: &str) -> StoreResult<Vec<T>> {
        serde_json::from_str(body).map_err(|e| StoreError::Decode {
            operation,
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
