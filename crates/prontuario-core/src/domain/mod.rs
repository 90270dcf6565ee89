// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Prontuario.
//!
//! This module contains the record types and the rules a record must pass
//! before it is accepted. Storage, uniqueness and listing are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Pure validation**: Same record + same date = same result
//! - **Rich domain model**: Rules live with the entities, not in services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod rules;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    Department, Doctor, Entity, Nurse, Patient, Record, RecordEntry, RecordId,
};

pub use error::{DomainError, ViolationKind};

pub use value_objects::{RecordKind, Sex, Shift, Status, Uf};

pub use validation::DomainValidator;
