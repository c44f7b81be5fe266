use crate::LandingResponse;

use axum::Json;

const TITLE: &str = "Welcome to Collab Room";
const TAGLINE: &str = "Your hub for Web3 marketing collaborations.";

/// GET /
pub async fn landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        title: TITLE,
        tagline: TAGLINE,
    })
}
