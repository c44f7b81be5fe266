//! Telegram sign-in handlers
//!
//! `login` sends the browser to Telegram; `callback` checks the signed
//! payload Telegram returns and exchanges it for a session token.

use crate::{ApiError, ApiResult, AppState, LoginQuery, SessionResponse};

use cr_auth::TelegramLogin;

use axum::{
    Json,
    extract::{Query, State},
    response::Redirect,
};
use log::info;

/// GET /auth/telegram/login?return_to=
///
/// 303 to the Telegram OAuth page
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> ApiResult<Redirect> {
    let return_to = query
        .return_to
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("return_to is required", Some("return_to")))?;

    let url = state.login_redirect.url_for(&return_to)?;

    Ok(Redirect::to(&url))
}

/// GET /auth/telegram/callback?id=..&auth_date=..&hash=..
pub async fn callback(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<SessionResponse>> {
    let login = TelegramLogin::from_pairs(pairs)?;
    let verified = state.login_verifier.verify(&login)?;
    let session = state.session_issuer.issue(&verified)?;

    info!(
        "Signed in telegram id {} (session until {})",
        verified.telegram_id, session.expires_at
    );

    Ok(Json(SessionResponse::new(session, verified.telegram_id)))
}
