//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `prontuario-adapters` crate provides implementations.

use crate::domain::{Record, RecordEntry, RecordId, RecordKind};
use crate::error::ProntuarioResult;

/// Port for record storage and retrieval.
///
/// Implemented by:
/// - `prontuario_adapters::store::InMemoryStore` (tests, embedding)
/// - `prontuario_adapters::store::JsonFileStore` (CLI data file)
///
/// ## Contract
///
/// Stores do not validate records; callers run the domain rules first.
/// Stores DO own every constraint that needs the other records:
///
/// - values from `Record::unique_fields` are unique among records of the
///   same kind (`ApplicationError::UniqueViolation`)
/// - a nurse's department must exist (`ApplicationError::UnknownDepartment`)
/// - a department referenced by any nurse cannot be removed
///   (`ApplicationError::ProtectedDepartment`)
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore: Send + Sync {
    /// Store a new record and return its id.
    fn insert(&self, record: Record) -> ProntuarioResult<RecordId>;

    /// Replace the record stored under `id`. The kind must not change.
    fn update(&self, id: RecordId, record: Record) -> ProntuarioResult<()>;

    /// Get a record of `kind` by id.
    fn get(&self, kind: RecordKind, id: RecordId) -> ProntuarioResult<Record>;

    /// All records of `kind`, ordered by id.
    fn list(&self, kind: RecordKind) -> ProntuarioResult<Vec<RecordEntry>>;

    /// Remove a record of `kind` by id.
    fn remove(&self, kind: RecordKind, id: RecordId) -> ProntuarioResult<()>;
}
