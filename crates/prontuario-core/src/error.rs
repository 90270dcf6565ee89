//! Unified error handling for Prontuario Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Prontuario Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// prontuario-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProntuarioError {
    /// A record failed validation.
    #[error("Validation failed: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (storage constraints, lookups).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ProntuarioError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Prontuario".into(),
                "Please report this issue at: https://github.com/cosecruz/prontuario/issues"
                    .into(),
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
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ProntuarioResult<T> = Result<T, ProntuarioError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> ProntuarioResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> ProntuarioResult<T> {
        self.map_err(|e| ProntuarioError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
