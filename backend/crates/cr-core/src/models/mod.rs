pub mod company;
pub mod membership;
pub mod telegram_id;
pub mod user;
