use cr_store::{StoreError, StoreOperation};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnboardingError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// A read failed while resolving the dashboard state
    #[error("Store failure: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    /// A save stopped at `operation`.
    ///
    /// `memberships_restored` is `None` when the membership set was never
    /// touched, otherwise whether the previous set was put back.
    #[error("Save failed at {operation} (user persisted: {user_persisted}): {source} {location}")]
    SaveFailed {
        operation: StoreOperation,
        user_persisted: bool,
        memberships_restored: Option<bool>,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl OnboardingError {
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn save_failed(
        operation: StoreOperation,
        source: StoreError,
        user_persisted: bool,
        memberships_restored: Option<bool>,
    ) -> Self {
        Self::SaveFailed {
            operation,
            user_persisted,
            memberships_restored,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Underlying store error, if any
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Store { source, .. } | Self::SaveFailed { source, .. } => Some(source),
            Self::Validation { .. } => None,
        }
    }

    /// Operation the failure is attributed to
    pub fn operation(&self) -> Option<StoreOperation> {
        match self {
            Self::SaveFailed { operation, .. } => Some(*operation),
            Self::Store { source, .. } => source.operation(),
            Self::Validation { .. } => None,
        }
    }
}

impl From<StoreError> for OnboardingError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, OnboardingError>;
