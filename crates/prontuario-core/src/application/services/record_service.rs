//! Record Service - main application orchestrator.
//!
//! This service coordinates the record lifecycle:
//! 1. Validate the candidate record against the domain rules
//! 2. Hand it to the store, which enforces uniqueness and references
//!
//! Validation is always an explicit step here; the store never triggers it.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::RecordStore,
    domain::{DomainValidator, Record, RecordId, RecordKind, rules},
    error::{ProntuarioError, ProntuarioResult},
};

/// Main record service.
///
/// Orchestrates validation and persistence of records.
pub struct RecordService {
    store: Box<dyn RecordStore>,
}

impl RecordService {
    /// Create a new record service backed by `store`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use prontuario_core::application::{RecordService, ports::RecordStore};
    ///
    /// # fn demo(store: Box<dyn RecordStore>) {
    /// let service = RecordService::new(
    ///     store, // impl RecordStore
    /// );
    /// # let _ = service;
    /// # }
    /// ```
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Check a record against every rule for its kind.
    ///
    /// Pure: touches neither the store nor any other state.
    pub fn validate(&self, record: &Record) -> ProntuarioResult<()> {
        DomainValidator::validate_record(record, rules::today()).map_err(ProntuarioError::Domain)
    }

    /// Validate, then store a new record.
    ///
    /// Rejected records never reach the store.
    #[instrument(skip_all, fields(kind = %record.kind(), name = %record.name()))]
    pub fn create(&self, record: Record) -> ProntuarioResult<RecordId> {
        if let Err(e) = self.validate(&record) {
            debug!(error = %e, "record rejected");
            return Err(e);
        }

        let id = self.store.insert(record)?;
        info!(%id, "record created");
        Ok(id)
    }

    /// Validate, then replace the record stored under `id`.
    #[instrument(skip_all, fields(kind = %record.kind(), %id))]
    pub fn update(&self, id: RecordId, record: Record) -> ProntuarioResult<()> {
        if let Err(e) = self.validate(&record) {
            debug!(error = %e, "update rejected");
            return Err(e);
        }

        self.store.update(id, record)?;
        info!("record updated");
        Ok(())
    }

    /// Fetch one record.
    pub fn get(&self, kind: RecordKind, id: RecordId) -> ProntuarioResult<Record> {
        self.store.get(kind, id)
    }

    /// Remove a record. Departments still referenced by nurses are kept.
    #[instrument(skip(self))]
    pub fn delete(&self, kind: RecordKind, id: RecordId) -> ProntuarioResult<()> {
        match self.store.remove(kind, id) {
            Ok(()) => {
                info!("record deleted");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "delete refused");
                Err(e)
            }
        }
    }
}
