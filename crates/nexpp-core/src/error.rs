//! Unified error handling for Nexpp Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Nexpp Core operations.
///
/// This enum wraps all possible errors that can occur when using nexpp-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum NexppError {
    /// Errors from the domain layer (validation failures).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl NexppError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Nexpp".into(),
                "Please report this issue at: https://github.com/nexpp/nexpp/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type NexppResult<T> = Result<T, NexppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_categorize_as_validation() {
        let err = NexppError::from(DomainError::MissingProjectName);
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn internal_errors_suggest_reporting() {
        let err = NexppError::Internal {
            message: "boom".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("bug")));
    }
}
