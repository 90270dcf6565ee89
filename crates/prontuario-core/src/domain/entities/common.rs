use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DomainError;
use crate::domain::rules::{self, CPF_DIGITS, PHONE_DIGITS};

/// Storage identity of a record.
///
/// Assigned by the store on insert; `0` is never assigned and marks an
/// unset reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this id can refer to a stored record.
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidChoice {
                field: "id",
                value: s.to_string(),
            })
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Rules shared by doctors and nurses, in reporting order:
/// license → phone → birth date → CPF.
pub(crate) fn check_staff_rules(
    license_field: &'static str,
    license: &str,
    phone: &str,
    birth_date: NaiveDate,
    cpf: &str,
    today: NaiveDate,
) -> Result<(), DomainError> {
    rules::check_license_number(license_field, license)?;
    rules::check_digits("phone", "phone", phone, PHONE_DIGITS)?;
    rules::check_birth_date(birth_date, today)?;
    rules::check_digits("cpf", "CPF", cpf, CPF_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_parses_and_displays() {
        let id: RecordId = " 42 ".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn record_id_rejects_garbage() {
        assert!("abc".parse::<RecordId>().is_err());
        assert!("-1".parse::<RecordId>().is_err());
    }

    #[test]
    fn zero_is_unset() {
        assert!(!RecordId::new(0).is_set());
        assert!(RecordId::new(1).is_set());
    }

    #[test]
    fn staff_rules_report_license_first() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        // Everything is wrong; the license error wins.
        let err = check_staff_rules("crm", "bad", "1", today.succ_opt().unwrap(), "1", today)
            .unwrap_err();
        assert_eq!(err.field(), Some("crm"));
    }

    #[test]
    fn staff_rules_report_phone_before_birth_date() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = check_staff_rules(
            "coren",
            "123456BA",
            "123",
            today.succ_opt().unwrap(),
            "12345678901",
            today,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidDigits { field: "phone", .. }));
    }
}
