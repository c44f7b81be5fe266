//! Access to the hosted backing store.
//!
//! [`Store`] is the seam the onboarding workflow is written against.
//! [`RestStore`] talks to a PostgREST endpoint over HTTP; [`MemoryStore`]
//! keeps rows in process and can be told to fail specific operations.

pub mod error;
pub mod memory_store;
pub mod rest;
pub mod store;
pub mod store_operation;

pub use error::{Result as StoreResult, StoreError};
pub use memory_store::MemoryStore;
pub use rest::filter::Filter;
pub use rest::rest_client::RestClient;
pub use rest::rest_store::RestStore;
pub use store::Store;
pub use store_operation::StoreOperation;


pub const USERS_TABLE: &str = "users";
pub const COMPANIES_TABLE: &str = "companies";
pub const MEMBERSHIPS_TABLE: &str = "user_company_relations";
