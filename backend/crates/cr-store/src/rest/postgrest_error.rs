use serde::Deserialize;

/// Error body returned by PostgREST on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostgrestError {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl PostgrestError {
    /// Parse an error body, falling back to the raw text when it is not JSON
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            message: (!body.trim().is_empty()).then(|| body.trim().to_string()),
            ..Default::default()
        })
    }

    pub fn code_or(&self, fallback: &str) -> String {
        self.code.clone().unwrap_or_else(|| fallback.to_string())
    }

    /// Message with details appended when present
    pub fn describe(&self) -> String {
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| "no error message".to_string());
        match &self.details {
            Some(details) if !details.is_empty() => format!("{} ({})", message, details),
            _ => message,
        }
    }
}
