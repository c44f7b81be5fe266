//! Dashboard REST API handlers
//!
//! GET resolves the caller's identity into the dashboard state; PUT runs
//! the profile/company save.

use crate::{
    ApiResult, AppState, DashboardQuery, DashboardResponse, LOGIN_PATH, SaveDashboardRequest,
    SaveDashboardResponse, Session,
};

use cr_onboarding::{Resolution, SaveRequest};

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use log::debug;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<DashboardResponse>> {
    let resolution = state.resolver.resolve(session.0.as_ref()).await?;

    let response = match resolution {
        Resolution::Anonymous => {
            let login_url = match query.return_to.as_deref().filter(|r| !r.is_empty()) {
                Some(return_to) => state.login_redirect.url_for(return_to)?,
                None => LOGIN_PATH.to_string(),
            };
            DashboardResponse::Anonymous { login_url }
        }
        Resolution::Resolved(identity) => identity.into(),
    };

    Ok(Json(response))
}

/// PUT /api/v1/dashboard
///
/// Requires a session; anonymous callers get 401.
pub async fn save_dashboard(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<SaveDashboardRequest>, JsonRejection>,
) -> ApiResult<Json<SaveDashboardResponse>> {
    let telegram_id = session.require()?;
    let Json(body) = payload?;

    debug!(
        "[tg:{}] Save requested: {} selected, new company: {}",
        telegram_id,
        body.selected_company_ids.len(),
        body.new_company.is_some()
    );

    let outcome = state
        .workflow
        .save(SaveRequest {
            telegram_id,
            profile: body.profile,
            new_company: body.new_company,
            selected_company_ids: body.selected_company_ids.into_iter().collect(),
        })
        .await?;

    Ok(Json(outcome.into()))
}
