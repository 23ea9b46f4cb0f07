use std::panic::Location;

use error_location::ErrorLocation;
use td_client::ClientError;
use thiserror::Error;

/// Errors surfaced by store operations that propagate (creation); all other
/// failures are reported through the notifier and swallowed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Backend error: {source} {location}")]
    Backend {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Create a validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        StoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a not-found error
    #[track_caller]
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for StoreError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        StoreError::Backend {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
