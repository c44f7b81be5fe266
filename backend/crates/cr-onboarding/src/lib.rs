//! Dashboard load and save over a [`cr_store::Store`].
//!
//! [`IdentityResolver`] turns a (possibly absent) Telegram identity into the
//! dashboard state. [`UpsertWorkflow`] persists an edited profile, creates a
//! company when asked to, and replaces the user's membership set.

pub mod error;
pub mod identity_resolver;
pub mod profile_validator;
pub mod resolution;
pub mod save_outcome;
pub mod save_request;
pub mod upsert_workflow;

pub use error::{OnboardingError, Result};
pub use identity_resolver::IdentityResolver;
pub use profile_validator::ProfileValidator;
pub use resolution::{Resolution, ResolvedIdentity};
pub use save_outcome::SaveOutcome;
pub use save_request::SaveRequest;
pub use upsert_workflow::UpsertWorkflow;

#[cfg(test)]
mod tests;
