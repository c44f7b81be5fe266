use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LandingResponse {
    pub title: &'static str,
    pub tagline: &'static str,
}
