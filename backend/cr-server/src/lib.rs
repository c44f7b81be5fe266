pub mod api;
pub mod app_state;
pub mod bot;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{callback, login},
        login_query::LoginQuery,
        session_response::SessionResponse,
    },
    dashboard::{
        dashboard::{get_dashboard, save_dashboard},
        dashboard_query::DashboardQuery,
        dashboard_response::{DashboardResponse, LOGIN_PATH},
        save_dashboard_request::SaveDashboardRequest,
        save_dashboard_response::SaveDashboardResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::session::Session,
    landing::{landing::landing, landing_response::LandingResponse},
};
pub use app_state::AppState;
pub use bot::{
    bot_error::{BotError, Result as BotResult},
    bot_runner::BotRunner,
    telegram_bot_client::TelegramBotClient,
    update::{BotApiResponse, Chat, Message, Update},
};

pub use crate::routes::build_router;
