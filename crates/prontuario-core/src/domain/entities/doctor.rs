//! Physician record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Entity, common::check_staff_rules},
    error::DomainError,
    rules::{self, MAX_TEXT_CHARS},
    value_objects::{RecordKind, Shift, Status},
};

/// A physician on the hospital staff.
///
/// Uniqueness of `crm`, `phone`, `email` and `cpf` is the store's concern;
/// [`Doctor::validate_on`] only checks the shape of each value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    /// CRM registration number, `NNNNNNUF`.
    pub crm: String,
    pub phone: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub cpf: String,
    pub shift: Shift,
    pub status: Status,
}

impl Entity for Doctor {
    const KIND: RecordKind = RecordKind::Doctor;
    const LIST_DISPLAY: &'static [&'static str] = &["name", "crm", "status"];

    fn list_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.crm.clone(),
            self.status.to_string(),
        ]
    }

    fn unique_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("crm", self.crm.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("cpf", self.cpf.as_str()),
        ]
    }

    fn validate_on(&self, today: NaiveDate) -> Result<(), DomainError> {
        rules::check_required_text("name", &self.name)?;
        rules::check_max_chars("crm", &self.crm, MAX_TEXT_CHARS)?;
        rules::check_required_email("email", &self.email)?;

        check_staff_rules(
            "crm",
            &self.crm,
            &self.phone,
            self.birth_date,
            &self.cpf,
            today,
        )
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
