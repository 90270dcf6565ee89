use chrono::NaiveDate;

use crate::domain::{
    entities::{Department, Doctor, Entity, Nurse, Patient, Record},
    error::DomainError,
};

/// Centralized domain validation.
///
/// One explicit entry point per record type. Callers invoke these before
/// any persistence attempt; nothing runs implicitly on save.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_doctor(doctor: &Doctor, today: NaiveDate) -> Result<(), DomainError> {
        doctor.validate_on(today)
    }

    pub fn validate_nurse(nurse: &Nurse, today: NaiveDate) -> Result<(), DomainError> {
        nurse.validate_on(today)
    }

    pub fn validate_department(
        department: &Department,
        today: NaiveDate,
    ) -> Result<(), DomainError> {
        department.validate_on(today)
    }

    pub fn validate_patient(patient: &Patient, today: NaiveDate) -> Result<(), DomainError> {
        patient.validate_on(today)
    }

    pub fn validate_record(record: &Record, today: NaiveDate) -> Result<(), DomainError> {
        record.validate_on(today)
    }
}
