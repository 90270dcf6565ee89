//! Patient record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::Entity,
    error::DomainError,
    rules::{self, BLOOD_TYPE_CHARS, CPF_DIGITS, MAX_TEXT_CHARS, PHONE_DIGITS, RG_DIGITS},
    value_objects::{RecordKind, Sex},
};

/// A patient's identification sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub cpf: String,
    /// State identity document number.
    pub rg: String,
    pub mother_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    pub primary_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<String>,
    pub email: String,
    pub blood_type: String,
}

impl Entity for Patient {
    const KIND: RecordKind = RecordKind::Patient;
    const LIST_DISPLAY: &'static [&'static str] = &["name", "cpf", "blood_type", "birth_date"];

    fn list_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.cpf.clone(),
            self.blood_type.clone(),
            self.birth_date.to_string(),
        ]
    }

    fn unique_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("cpf", self.cpf.as_str()), ("rg", self.rg.as_str())]
    }

    /// Field constraints, then: primary phone → birth date → CPF → RG →
    /// secondary phone → father's name → blood type.
    ///
    /// Optional fields are skipped entirely when absent or empty.
    fn validate_on(&self, today: NaiveDate) -> Result<(), DomainError> {
        rules::check_required_text("name", &self.name)?;
        rules::check_required_text("mother_name", &self.mother_name)?;
        rules::check_required_email("email", &self.email)?;

        rules::check_digits(
            "primary_phone",
            "primary phone",
            &self.primary_phone,
            PHONE_DIGITS,
        )?;
        rules::check_birth_date(self.birth_date, today)?;
        rules::check_digits("cpf", "CPF", &self.cpf, CPF_DIGITS)?;
        rules::check_digits("rg", "RG", &self.rg, RG_DIGITS)?;

        if let Some(phone) = rules::present(self.secondary_phone.as_deref()) {
            rules::check_digits("secondary_phone", "secondary phone", phone, PHONE_DIGITS)?;
        }
        if let Some(father) = rules::present(self.father_name.as_deref()) {
            rules::check_max_chars("father_name", father, MAX_TEXT_CHARS)?;
        }

        rules::check_exact_chars("blood_type", &self.blood_type, BLOOD_TYPE_CHARS)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ViolationKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn patient() -> Patient {
        Patient {
            name: "Carlos Souza".into(),
            birth_date: NaiveDate::from_ymd_opt(2001, 7, 9).unwrap(),
            sex: Sex::Male,
            cpf: "11122233344".into(),
            rg: "123456789".into(),
            mother_name: "Maria Souza".into(),
            father_name: None,
            primary_phone: "34912345678".into(),
            secondary_phone: None,
            email: "carlos@mail.com".into(),
            blood_type: "O+".into(),
        }
    }

    #[test]
    fn valid_patient_passes() {
        assert!(patient().validate_on(today()).is_ok());
    }

    #[test]
    fn absent_secondary_phone_passes() {
        let p = Patient {
            secondary_phone: Some(String::new()),
            ..patient()
        };
        assert!(p.validate_on(today()).is_ok());
    }

    #[test]
    fn present_secondary_phone_must_have_eleven_digits() {
        let ok = Patient {
            secondary_phone: Some("34987654321".into()),
            ..patient()
        };
        assert!(ok.validate_on(today()).is_ok());

        let bad = Patient {
            secondary_phone: Some("3498765".into()),
            ..patient()
        };
        assert!(matches!(
            bad.validate_on(today()),
            Err(DomainError::InvalidDigits {
                field: "secondary_phone",
                ..
            })
        ));
    }

    #[test]
    fn father_name_is_only_checked_when_present() {
        let absent = Patient {
            father_name: None,
            ..patient()
        };
        let empty = Patient {
            father_name: Some(String::new()),
            ..patient()
        };
        let overlong = Patient {
            father_name: Some("p".repeat(101)),
            ..patient()
        };
        assert!(absent.validate_on(today()).is_ok());
        assert!(empty.validate_on(today()).is_ok());
        assert!(matches!(
            overlong.validate_on(today()),
            Err(DomainError::TooLong {
                field: "father_name",
                ..
            })
        ));
    }

    #[test]
    fn rg_requires_nine_digits() {
        let p = Patient {
            rg: "12345678".into(),
            ..patient()
        };
        let err = p.validate_on(today()).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::DigitLength);
        assert_eq!(err.field(), None);
    }

    #[test]
    fn any_two_char_blood_type_passes() {
        for bt in ["O+", "AB", "A-", "xx"] {
            let p = Patient {
                blood_type: bt.into(),
                ..patient()
            };
            assert!(p.validate_on(today()).is_ok(), "{bt}");
        }
    }

    #[test]
    fn blood_type_of_other_lengths_fails() {
        for bt in ["O", "AB+", ""] {
            let p = Patient {
                blood_type: bt.into(),
                ..patient()
            };
            let err = p.validate_on(today()).unwrap_err();
            assert_eq!(err.kind(), ViolationKind::Length, "{bt}");
        }
    }

    #[test]
    fn phone_is_reported_before_birth_date() {
        let p = Patient {
            primary_phone: "1".into(),
            birth_date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            ..patient()
        };
        assert!(matches!(
            p.validate_on(today()),
            Err(DomainError::InvalidDigits {
                field: "primary_phone",
                ..
            })
        ));
    }

    #[test]
    fn blood_type_is_reported_last() {
        let p = Patient {
            rg: "1".into(),
            blood_type: "ABC".into(),
            ..patient()
        };
        assert!(matches!(
            p.validate_on(today()),
            Err(DomainError::InvalidDigits { field: "rg", .. })
        ));
    }

    #[test]
    fn blank_mother_name_fails() {
        let p = Patient {
            mother_name: String::new(),
            ..patient()
        };
        assert!(matches!(
            p.validate_on(today()),
            Err(DomainError::BlankField {
                field: "mother_name"
            })
        ));
    }

    #[test]
    fn list_row_includes_birth_date() {
        assert_eq!(
            patient().list_row(),
            vec!["Carlos Souza", "11122233344", "O+", "2001-07-09"]
        );
    }
}
