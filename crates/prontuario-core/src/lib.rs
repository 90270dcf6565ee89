//! Prontuario Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Prontuario
//! medical-records administration tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         prontuario-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (RecordService, ListingService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: RecordStore)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   prontuario-adapters (Infrastructure)  │
//! │   (InMemoryStore, JsonFileStore, ...)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Doctor, Nurse, Department, Patient)   │
//! │       Validation rules, no I/O          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use prontuario_core::{
//!     application::{RecordService, RecordStore},
//!     domain::{Department, Record},
//! };
//!
//! # fn demo(store: Box<dyn RecordStore>) {
//! // 1. Validate explicitly, without touching storage
//! let record = Record::from(Department::new("UTI Adulto"));
//! record.validate().unwrap();
//!
//! // 2. Persist through the service (with an injected store)
//! let service = RecordService::new(store);
//! let id = service.create(record).unwrap();
//! # let _ = id;
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ListRow, ListTable, ListingService, RecordService, ports::RecordStore,
    };
    pub use crate::domain::{
        Department, Doctor, DomainError, DomainValidator, Entity, Nurse, Patient, Record,
        RecordEntry, RecordId, RecordKind, Sex, Shift, Status, Uf,
    };
    pub use crate::error::{ErrorCategory, ProntuarioError, ProntuarioResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
