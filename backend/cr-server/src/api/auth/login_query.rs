use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    /// Absolute URL Telegram sends the browser back to
    #[serde(default)]
    pub return_to: Option<String>,
}
