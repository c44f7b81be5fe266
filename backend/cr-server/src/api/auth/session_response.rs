use cr_auth::SessionToken;
use cr_core::TelegramId;

use serde::Serialize;

/// Session issued after a verified Telegram login
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    /// Always "Bearer"
    pub token_type: &'static str,
    /// Unix seconds
    pub expires_at: i64,
    pub telegram_id: TelegramId,
}

impl SessionResponse {
    pub fn new(session: SessionToken, telegram_id: TelegramId) -> Self {
        Self {
            token: session.token,
            token_type: "Bearer",
            expires_at: session.expires_at,
            telegram_id,
        }
    }
}
