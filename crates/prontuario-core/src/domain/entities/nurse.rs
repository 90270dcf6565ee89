//! Nursing staff record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Entity, common::{RecordId, check_staff_rules}},
    error::DomainError,
    rules::{self, MAX_TEXT_CHARS},
    value_objects::{RecordKind, Shift, Status},
};

/// A nurse assigned to a department.
///
/// The department reference must be set; whether it points at an existing
/// department, and whether that department may be deleted, is decided by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nurse {
    pub name: String,
    /// COREN registration number, `NNNNNNUF`.
    pub coren: String,
    pub department: RecordId,
    pub phone: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub cpf: String,
    pub shift: Shift,
    pub status: Status,
}

impl Entity for Nurse {
    const KIND: RecordKind = RecordKind::Nurse;
    const LIST_DISPLAY: &'static [&'static str] = &["name", "coren", "status"];

    fn list_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.coren.clone(),
            self.status.to_string(),
        ]
    }

    // COREN is deliberately absent: two nurses may share one.
    fn unique_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("cpf", self.cpf.as_str()),
        ]
    }

    fn validate_on(&self, today: NaiveDate) -> Result<(), DomainError> {
        rules::check_required_text("name", &self.name)?;
        rules::check_max_chars("coren", &self.coren, MAX_TEXT_CHARS)?;
        if !self.department.is_set() {
            return Err(DomainError::MissingRequiredField {
                field: "department",
            });
        }
        rules::check_required_email("email", &self.email)?;

        check_staff_rules(
            "coren",
            &self.coren,
            &self.phone,
            self.birth_date,
            &self.cpf,
            today,
        )
    }
}

impl fmt::Display for Nurse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn nurse() -> Nurse {
        Nurse {
            name: "Joana Lima".into(),
            coren: "654321MG".into(),
            department: RecordId::new(1),
            phone: "31987654321".into(),
            email: "joana@hospital.com.br".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 11, 20).unwrap(),
            cpf: "98765432100".into(),
            shift: Shift::Night,
            status: Status::Active,
        }
    }

    #[test]
    fn valid_nurse_passes() {
        assert!(nurse().validate_on(today()).is_ok());
    }

    #[test]
    fn coren_uses_license_rule_under_its_own_field() {
        let n = Nurse {
            coren: "65432MG".into(),
            ..nurse()
        };
        assert!(matches!(
            n.validate_on(today()),
            Err(DomainError::InvalidLicenseNumber { field: "coren", .. })
        ));
    }

    #[test]
    fn unset_department_is_rejected() {
        let n = Nurse {
            department: RecordId::new(0),
            ..nurse()
        };
        assert!(matches!(
            n.validate_on(today()),
            Err(DomainError::MissingRequiredField {
                field: "department"
            })
        ));
    }

    #[test]
    fn phone_with_letters_fails() {
        let n = Nurse {
            phone: "3198765432x".into(),
            ..nurse()
        };
        assert!(matches!(
            n.validate_on(today()),
            Err(DomainError::InvalidDigits { field: "phone", .. })
        ));
    }

    #[test]
    fn future_birth_date_fails() {
        let n = Nurse {
            birth_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            ..nurse()
        };
        assert!(n.validate_on(today()).is_err());
    }

    #[test]
    fn twelve_digit_cpf_fails() {
        let n = Nurse {
            cpf: "987654321000".into(),
            ..nurse()
        };
        assert!(n.validate_on(today()).is_err());
    }

    #[test]
    fn coren_is_not_unique() {
        assert!(nurse().unique_fields().iter().all(|(f, _)| *f != "coren"));
    }
}
