//! Resource adapter error types

use crate::retry::RetryError;
use thiserror::Error;

/// Boxed backend cause carried by backend failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Resource adapter errors
///
/// Callers can tell malformed specs (`SpecDecode`) apart from backend faults
/// (`BackendExhausted`, `BackendRejected`) and from state-vocabulary drift
/// (`ProtocolDrift`).
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Invalid {what}: {source}")]
    SpecDecode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation} failed after {attempts} attempts: {source}")]
    BackendExhausted {
        operation: &'static str,
        attempts: u32,
        #[source]
        source: BoxError,
    },

    #[error("{operation} rejected by backend: {source}")]
    BackendRejected {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("Unrecognized native state '{state}' reported for {resource}")]
    ProtocolDrift { resource: String, state: String },

    #[error("Settings file error: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResourceError {
    /// Wrap the outcome of a retried backend call
    pub fn backend<E>(operation: &'static str, err: RetryError<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match err {
            RetryError::Permanent(source) => ResourceError::BackendRejected {
                operation,
                source: Box::new(source),
            },
            RetryError::Exhausted { attempts, last } => ResourceError::BackendExhausted {
                operation,
                attempts,
                source: Box::new(last),
            },
        }
    }

    /// The resource spec or the persisted instance spec was malformed
    pub fn is_spec_error(&self) -> bool {
        matches!(self, ResourceError::SpecDecode { .. })
    }

    /// The failure came from the backend control plane
    pub fn is_backend_error(&self) -> bool {
        matches!(
            self,
            ResourceError::BackendExhausted { .. } | ResourceError::BackendRejected { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ResourceError>;
