//! Infrastructure adapters for Prontuario.
//!
//! This crate implements the ports defined in `prontuario-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod record_loader;
pub mod store;

// Re-export commonly used adapters
pub use record_loader::{LoadedRecord, RecordLoader};
pub use store::{InMemoryStore, JsonFileStore, Snapshot};
