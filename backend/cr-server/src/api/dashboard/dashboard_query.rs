use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Where an anonymous caller should land after signing in
    #[serde(default)]
    pub return_to: Option<String>,
}
