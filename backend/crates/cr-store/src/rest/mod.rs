pub mod filter;
pub mod postgrest_error;
pub mod rest_client;
pub mod rest_store;
pub mod select_query;
