//! The tagged union over all record types.
//!
//! Record files and storage snapshots carry a `kind` field that selects
//! the variant:
//!
//! ```json
//! { "kind": "department", "name": "UTI" }
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Department, Doctor, Entity, Nurse, Patient, RecordId},
    error::DomainError,
    rules,
    value_objects::RecordKind,
};

/// Any one of the four administrable records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Department(Department),
    Doctor(Doctor),
    Nurse(Nurse),
    Patient(Patient),
}

impl Record {
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Department(_) => RecordKind::Department,
            Self::Doctor(_) => RecordKind::Doctor,
            Self::Nurse(_) => RecordKind::Nurse,
            Self::Patient(_) => RecordKind::Patient,
        }
    }

    /// Listing columns for a record kind.
    pub const fn columns(kind: RecordKind) -> &'static [&'static str] {
        match kind {
            RecordKind::Department => Department::LIST_DISPLAY,
            RecordKind::Doctor => Doctor::LIST_DISPLAY,
            RecordKind::Nurse => Nurse::LIST_DISPLAY,
            RecordKind::Patient => Patient::LIST_DISPLAY,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Department(d) => &d.name,
            Self::Doctor(d) => &d.name,
            Self::Nurse(n) => &n.name,
            Self::Patient(p) => &p.name,
        }
    }

    /// The department a nurse is assigned to. `None` for other kinds.
    pub fn department_ref(&self) -> Option<RecordId> {
        match self {
            Self::Nurse(n) => Some(n.department),
            _ => None,
        }
    }

    pub fn list_row(&self) -> Vec<String> {
        match self {
            Self::Department(d) => d.list_row(),
            Self::Doctor(d) => d.list_row(),
            Self::Nurse(n) => n.list_row(),
            Self::Patient(p) => p.list_row(),
        }
    }

    pub fn unique_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Department(d) => d.unique_fields(),
            Self::Doctor(d) => d.unique_fields(),
            Self::Nurse(n) => n.unique_fields(),
            Self::Patient(p) => p.unique_fields(),
        }
    }

    pub fn validate_on(&self, today: NaiveDate) -> Result<(), DomainError> {
        match self {
            Self::Department(d) => d.validate_on(today),
            Self::Doctor(d) => d.validate_on(today),
            Self::Nurse(n) => n.validate_on(today),
            Self::Patient(p) => p.validate_on(today),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.validate_on(rules::today())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Department> for Record {
    fn from(d: Department) -> Self {
        Self::Department(d)
    }
}

impl From<Doctor> for Record {
    fn from(d: Doctor) -> Self {
        Self::Doctor(d)
    }
}

impl From<Nurse> for Record {
    fn from(n: Nurse) -> Self {
        Self::Nurse(n)
    }
}

impl From<Patient> for Record {
    fn from(p: Patient) -> Self {
        Self::Patient(p)
    }
}

/// A record together with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub id: RecordId,
    pub record: Record,
}

impl RecordEntry {
    pub fn new(id: RecordId, record: Record) -> Self {
        Self { id, record }
    }

    pub const fn kind(&self) -> RecordKind {
        self.record.kind()
    }
}
