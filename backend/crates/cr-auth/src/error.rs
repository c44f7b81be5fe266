use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid login payload: {message} {location}")]
    InvalidLogin {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Login signature does not match {location}")]
    SignatureMismatch { location: ErrorLocation },

    #[error("Login expired: signed {age_secs}s ago, limit {max_age_secs}s {location}")]
    LoginExpired {
        age_secs: i64,
        max_age_secs: u64,
        location: ErrorLocation,
    },

    #[error("Login auth_date is {ahead_secs}s in the future {location}")]
    LoginFromFuture {
        ahead_secs: i64,
        location: ErrorLocation,
    },

    #[error("Invalid return URL '{url}': {message} {location}")]
    InvalidReturnUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLogin { .. } => "INVALID_LOGIN",
            Self::SignatureMismatch { .. } => "LOGIN_SIGNATURE_MISMATCH",
            Self::LoginExpired { .. } => "LOGIN_EXPIRED",
            Self::LoginFromFuture { .. } => "LOGIN_FROM_FUTURE",
            Self::InvalidReturnUrl { .. } => "INVALID_RETURN_URL",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }

    /// Failure on our side while producing a credential
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::JwtEncode { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
