pub mod common;
pub mod department;
pub mod doctor;
pub mod nurse;
pub mod patient;
pub mod record;

use std::fmt;

use chrono::NaiveDate;

pub use crate::domain::DomainError;
pub use common::RecordId;
pub use department::Department;
pub use doctor::Doctor;
pub use nurse::Nurse;
pub use patient::Patient;
pub use record::{Record, RecordEntry};

use crate::domain::{rules, value_objects::RecordKind};

/// Behaviour shared by the four record types.
///
/// The associated constants describe how a record is presented; the
/// methods describe what the store must keep unique and how a record is
/// checked before it is accepted.
pub trait Entity: fmt::Display {
    const KIND: RecordKind;

    /// Column names shown in the administrative listing.
    const LIST_DISPLAY: &'static [&'static str];

    /// Values for [`Self::LIST_DISPLAY`], in the same order.
    fn list_row(&self) -> Vec<String>;

    /// `(field, value)` pairs that must be unique among records of this kind.
    fn unique_fields(&self) -> Vec<(&'static str, &str)>;

    /// Check every rule against `today`. The first violation is returned.
    fn validate_on(&self, today: NaiveDate) -> Result<(), DomainError>;

    /// [`Self::validate_on`] with today's date from the process clock.
    fn validate(&self) -> Result<(), DomainError> {
        self.validate_on(rules::today())
    }
}
