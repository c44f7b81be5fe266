use crate::StoreOperation;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport failure, timeout, 5xx or 429. Safe to retry.
    #[error("Store unavailable during {operation}: {message} {location}")]
    Unavailable {
        operation: StoreOperation,
        message: String,
        location: ErrorLocation,
    },

    /// The store answered and refused the request (constraint, auth, schema).
    #[error("Store rejected {operation} with HTTP {status} ({code}): {message} {location}")]
    Rejected {
        operation: StoreOperation,
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to decode store response for {operation}: {message} {location}")]
    Decode {
        operation: StoreOperation,
        message: String,
        location: ErrorLocation,
    },

    /// A write asked for its row back and got nothing.
    #[error("Store returned no row for {operation} {location}")]
    MissingRow {
        operation: StoreOperation,
        location: ErrorLocation,
    },

    #[error("Store client initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(operation: StoreOperation, message: S) -> Self {
        Self::Unavailable {
            operation,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<C: Into<String>, S: Into<String>>(
        operation: StoreOperation,
        status: u16,
        code: C,
        message: S,
    ) -> Self {
        Self::Rejected {
            operation,
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_row(operation: StoreOperation) -> Self {
        Self::MissingRow {
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Operation that failed, if the error came from one
    pub fn operation(&self) -> Option<StoreOperation> {
        match self {
            Self::Unavailable { operation, .. }
            | Self::Rejected { operation, .. }
            | Self::Decode { operation, .. }
            | Self::MissingRow { operation, .. } => Some(*operation),
            Self::Initialization { .. } => None,
        }
    }

    /// Whether repeating the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
