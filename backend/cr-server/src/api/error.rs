//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", ...}}`
//! with a status derived from the error kind.

use cr_auth::AuthError;
use cr_onboarding::OnboardingError;
use cr_store::{StoreError, StoreOperation};

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional details
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR", "PARTIAL_SAVE")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Store operation that failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(flatten)]
    pub save_state: Option<SaveStateBody>,
}

/// What a failed save left behind
#[derive(Debug, Serialize)]
pub struct SaveStateBody {
    pub user_persisted: bool,
    /// null when the membership set was never touched
    pub memberships_restored: Option<bool>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing, invalid or expired credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// The store could not be reached (503)
    #[error("Store unavailable during {operation}: {message} {location}")]
    StoreUnavailable {
        operation: StoreOperation,
        message: String,
        location: ErrorLocation,
    },

    /// The store refused or garbled the request (502)
    #[error("Store rejected {operation}: {message} {location}")]
    StoreRejected {
        operation: StoreOperation,
        message: String,
        location: ErrorLocation,
    },

    /// A save failed after the user row was written (503)
    #[error("Partial save, failed at {operation}: {message} {location}")]
    PartialSave {
        operation: StoreOperation,
        message: String,
        memberships_restored: Option<bool>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::BadRequest {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::StoreUnavailable { .. } | Self::PartialSave { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::StoreRejected { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
                operation: None,
                save_state: None,
            },
            ApiError::BadRequest { message, field, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field,
                operation: None,
                save_state: None,
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message,
                field: None,
                operation: None,
                save_state: None,
            },
            ApiError::StoreUnavailable {
                operation, message, ..
            } => ApiErrorBody {
                code: "STORE_UNAVAILABLE".into(),
                message,
                field: None,
                operation: Some(operation.to_string()),
                save_state: None,
            },
            ApiError::StoreRejected {
                operation, message, ..
            } => ApiErrorBody {
                code: "STORE_REJECTED".into(),
                message,
                field: None,
                operation: Some(operation.to_string()),
                save_state: None,
            },
            ApiError::PartialSave {
                operation,
                message,
                memberships_restored,
                ..
            } => ApiErrorBody {
                code: "PARTIAL_SAVE".into(),
                message,
                field: None,
                operation: Some(operation.to_string()),
                save_state: Some(SaveStateBody {
                    user_persisted: true,
                    memberships_restored,
                }),
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
                operation: None,
                save_state: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert store errors to API errors.
///
/// Store messages stay in the log; clients only see the operation.
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        log::error!("Store error: {}", e);

        let location = ErrorLocation::from(Location::caller());
        match e.operation() {
            Some(operation) if e.is_retryable() => ApiError::StoreUnavailable {
                operation,
                message: format!("The store is unavailable ({}); try again", operation),
                location,
            },
            Some(operation) => ApiError::StoreRejected {
                operation,
                message: format!("The store rejected {}", operation),
                location,
            },
            None => ApiError::Internal {
                message: "Store client is misconfigured".to_string(),
                location,
            },
        }
    }
}

/// Convert onboarding errors to API errors
impl From<OnboardingError> for ApiError {
    #[track_caller]
    fn from(e: OnboardingError) -> Self {
        match e {
            OnboardingError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            OnboardingError::Store { source, .. } => ApiError::from(source),
            OnboardingError::SaveFailed {
                operation,
                user_persisted: true,
                memberships_restored,
                source,
                ..
            } => {
                log::error!("Partial save: {}", source);
                let restore_note = match memberships_restored {
                    Some(true) => "; previous companies kept",
                    Some(false) => "; company links could not be restored",
                    None => "",
                };
                ApiError::PartialSave {
                    operation,
                    message: format!(
                        "Profile saved but {} failed{}; try again",
                        operation, restore_note
                    ),
                    memberships_restored,
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            OnboardingError::SaveFailed { source, .. } => ApiError::from(source),
        }
    }
}

/// Convert sign-in and session errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.is_internal() {
            log::error!("Auth error: {}", e);
            return ApiError::Internal {
                message: "Could not issue session".to_string(),
                location,
            };
        }

        let message = match e {
            AuthError::InvalidLogin { message, field, .. } => {
                return ApiError::BadRequest {
                    message,
                    field: Some(field),
                    location,
                };
            }
            AuthError::InvalidReturnUrl { url, message, .. } => {
                return ApiError::BadRequest {
                    message: format!("Invalid return_to '{}': {}", url, message),
                    field: Some("return_to".to_string()),
                    location,
                };
            }
            AuthError::TokenExpired { .. } => "Session expired; sign in again".to_string(),
            AuthError::LoginExpired { .. } => "Telegram login expired; sign in again".to_string(),
            other => {
                log::warn!("Rejected credentials: {}", other);
                format!("Invalid credentials ({})", other.error_code())
            }
        };
        ApiError::Unauthorized { message, location }
    }
}

/// Malformed JSON bodies become BAD_REQUEST instead of axum's plain-text rejection
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
