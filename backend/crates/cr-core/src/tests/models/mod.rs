mod company;
mod membership;
mod telegram_id;
mod user;
