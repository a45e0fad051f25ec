//! EMR control-plane error types

use fleetflow_resource::{Classify, ErrorClass};
use thiserror::Error;

/// Failure reported by the EMR control plane
///
/// Carries its retry class so the uniform retry policy can decide whether to
/// repeat the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct BackendError {
    class: ErrorClass,
    code: Option<String>,
    message: String,
}

impl BackendError {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            class: ErrorClass::Transient,
            code: None,
            message: message.into(),
        }
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        Self {
            class: ErrorClass::Permanent,
            code: None,
            message: message.into(),
        }
    }

    /// Attach the service error code (e.g. "ThrottlingException")
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn is_transient(&self) -> bool {
        self.class == ErrorClass::Transient
    }
}

impl Classify for BackendError {
    fn classify(&self) -> ErrorClass {
        self.class
    }
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(
            BackendError::transient("slow down").classify(),
            ErrorClass::Transient
        );
        assert_eq!(
            BackendError::permanent("bad subnet").classify(),
            ErrorClass::Permanent
        );
    }

    #[test]
    fn test_code_and_display() {
        let err = BackendError::transient("Rate exceeded").with_code("ThrottlingException");
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.to_string(), "Rate exceeded");
        assert!(err.is_transient());
    }
}
