pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::company::{Company, CompanyOption, NewCompany};
pub use models::membership::{DEFAULT_MEMBERSHIP_ROLE, Membership};
pub use models::telegram_id::TelegramId;
pub use models::user::{ProfileFields, User, UserUpsert};

#[cfg(test)]
mod tests;
