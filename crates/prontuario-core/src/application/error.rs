//! Application layer errors.
//!
//! These errors represent failures in orchestration and storage
//! constraints, not record rules. Rule violations are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{RecordId, RecordKind};
use crate::error::ErrorCategory;

/// Errors that occur while storing or retrieving records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Another record of the same kind already holds this value.
    #[error("{kind} with {field} '{value}' already exists")]
    UniqueViolation {
        kind: RecordKind,
        field: &'static str,
        value: String,
    },

    /// A nurse references a department that is not stored.
    #[error("department {id} does not exist")]
    UnknownDepartment { id: RecordId },

    /// A department cannot be removed while nurses reference it.
    #[error("department {id} is referenced by {nurses} nurse(s) and cannot be deleted")]
    ProtectedDepartment { id: RecordId, nurses: usize },

    /// No record of this kind has the given id.
    #[error("{kind} {id} not found")]
    RecordNotFound { kind: RecordKind, id: RecordId },

    /// An update tried to replace a record with one of another kind.
    #[error("record {id} is a {stored}, not a {given}")]
    KindMismatch {
        id: RecordId,
        stored: RecordKind,
        given: RecordKind,
    },

    /// Store access failed (lock poisoned, etc.).
    #[error("Record store error")]
    StoreLockError,

    /// Persisting or loading the store failed.
    #[error("Storage error at {path}: {reason}")]
    StorageFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UniqueViolation { kind, field, .. } => vec![
                format!("Each {kind} must have a distinct {field}"),
                format!("Try: prontuario list {kind} to find the existing record"),
            ],
            Self::UnknownDepartment { .. } => vec![
                "Create the department first".into(),
                "Try: prontuario list department to see valid ids".into(),
            ],
            Self::ProtectedDepartment { .. } => vec![
                "Move or delete the nurses assigned to this department first".into(),
                "Try: prontuario list nurse".into(),
            ],
            Self::RecordNotFound { kind, .. } => vec![
                format!("Try: prontuario list {kind} to see stored ids"),
            ],
            Self::KindMismatch { stored, .. } => vec![
                format!("Use a {stored} record file to update this id"),
            ],
            Self::StoreLockError => vec![
                "The record store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::StorageFailed { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UniqueViolation { .. } | Self::ProtectedDepartment { .. } => {
                ErrorCategory::Conflict
            }
            Self::UnknownDepartment { .. } | Self::RecordNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::KindMismatch { .. } => ErrorCategory::Validation,
            Self::StoreLockError | Self::StorageFailed { .. } => ErrorCategory::Internal,
        }
    }
}
