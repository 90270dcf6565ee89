//! Application layer for Prontuario.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RecordService, ListingService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ListRow,
    ListTable, // DTO for the administrative listing
    ListingService,
    RecordService,
};

// Re-export port traits (for adapter implementation)
pub use ports::RecordStore;

pub use error::ApplicationError;
