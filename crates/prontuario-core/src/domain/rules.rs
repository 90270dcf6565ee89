//! Validation rules shared by every record type.
//!
//! Each rule is a pure function over a single value. Entities compose them
//! in a fixed order inside their `validate_on` method; the first failing
//! rule is the one reported.
//!
//! Constant sets (state codes, the e-mail pattern) are built once and
//! shared; no rule allocates a lookup table per call.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::{error::DomainError, value_objects::Uf};

/// Minimum length of a license number: six digits plus a two-letter UF.
pub const LICENSE_MIN_CHARS: usize = 8;

/// Digits in a phone number, area code included.
pub const PHONE_DIGITS: usize = 11;

/// Digits in a CPF (national taxpayer id).
pub const CPF_DIGITS: usize = 11;

/// Digits in an RG (state identity document).
pub const RG_DIGITS: usize = 9;

/// Characters in a blood type such as `O+` or `AB`.
pub const BLOOD_TYPE_CHARS: usize = 2;

/// Upper bound for names, e-mails and license numbers.
pub const MAX_TEXT_CHARS: usize = 100;

/// The 27 state codes accepted as a license-number suffix.
pub const STATE_CODES: [&str; 27] = {
    let mut codes = [""; 27];
    let mut i = 0;
    while i < codes.len() {
        codes[i] = Uf::ALL[i].as_str();
        i += 1;
    }
    codes
};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("e-mail pattern is a valid regex")
});

/// The current date according to the process clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Split a license number into its digit prefix and state code.
///
/// Returns `None` unless the value has at least [`LICENSE_MIN_CHARS`]
/// characters, everything but the last two is an ASCII digit, and the last
/// two are a known state code.
pub fn parse_license_number(value: &str) -> Option<(&str, Uf)> {
    if value.chars().count() < LICENSE_MIN_CHARS {
        return None;
    }

    let (split, _) = value.char_indices().rev().nth(1)?;
    let (digits, code) = value.split_at(split);

    if !is_ascii_digits(digits) {
        return None;
    }

    Some((digits, Uf::from_code(code)?))
}

/// CRM / COREN format check. Field-scoped.
pub fn check_license_number(field: &'static str, value: &str) -> Result<(), DomainError> {
    match parse_license_number(value) {
        Some(_) => Ok(()),
        None => Err(DomainError::InvalidLicenseNumber {
            field,
            value: value.to_string(),
        }),
    }
}

/// Exact-length digit string (phones, CPF, RG). General error.
pub fn check_digits(
    field: &'static str,
    label: &'static str,
    value: &str,
    expected: usize,
) -> Result<(), DomainError> {
    if value.len() == expected && is_ascii_digits(value) {
        Ok(())
    } else {
        Err(DomainError::InvalidDigits {
            field,
            label,
            expected,
            value: value.to_string(),
        })
    }
}

/// A birth date may be today but never later.
pub fn check_birth_date(date: NaiveDate, today: NaiveDate) -> Result<(), DomainError> {
    if date > today {
        Err(DomainError::BirthDateInFuture { date, today })
    } else {
        Ok(())
    }
}

/// Exact character count, content unchecked. General error.
pub fn check_exact_chars(
    field: &'static str,
    value: &str,
    expected: usize,
) -> Result<(), DomainError> {
    let actual = value.chars().count();
    if actual == expected {
        Ok(())
    } else {
        Err(DomainError::InvalidLength {
            field,
            expected,
            actual,
        })
    }
}

/// Required text must contain something other than whitespace.
pub fn check_not_blank(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::BlankField { field })
    } else {
        Ok(())
    }
}

pub fn check_max_chars(field: &'static str, value: &str, max: usize) -> Result<(), DomainError> {
    let actual = value.chars().count();
    if actual > max {
        Err(DomainError::TooLong { field, max, actual })
    } else {
        Ok(())
    }
}

pub fn check_email(field: &'static str, value: &str) -> Result<(), DomainError> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail {
            field,
            value: value.to_string(),
        })
    }
}

/// Required free text: not blank and within [`MAX_TEXT_CHARS`].
pub fn check_required_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    check_not_blank(field, value)?;
    check_max_chars(field, value, MAX_TEXT_CHARS)
}

/// Required e-mail: not blank, within [`MAX_TEXT_CHARS`], well-formed.
pub fn check_required_email(field: &'static str, value: &str) -> Result<(), DomainError> {
    check_required_text(field, value)?;
    check_email(field, value)
}

/// Optional values are only checked when present and non-empty.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn is_ascii_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ViolationKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ---------------------------------------------------------------------
    // License numbers
    // ---------------------------------------------------------------------

    #[test]
    fn license_accepts_six_digits_and_uf() {
        assert!(check_license_number("crm", "123456SP").is_ok());
    }

    #[test]
    fn license_accepts_longer_digit_prefix() {
        assert!(check_license_number("crm", "1234567890RJ").is_ok());
    }

    #[test]
    fn license_accepts_every_state_code() {
        for code in STATE_CODES {
            let value = format!("000000{code}");
            assert!(check_license_number("coren", &value).is_ok(), "{value}");
        }
    }

    #[test]
    fn license_rejects_short_prefix() {
        let err = check_license_number("crm", "12345SP").unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Format);
        assert_eq!(err.field(), Some("crm"));
    }

    #[test]
    fn license_rejects_unknown_uf() {
        assert!(check_license_number("crm", "123456XX").is_err());
    }

    #[test]
    fn license_rejects_lowercase_uf() {
        assert!(check_license_number("crm", "123456sp").is_err());
    }

    #[test]
    fn license_rejects_letters_in_prefix() {
        assert!(check_license_number("crm", "12a456SP").is_err());
        assert!(check_license_number("crm", "SP123456").is_err());
    }

    #[test]
    fn license_rejects_empty_and_non_ascii() {
        assert!(check_license_number("crm", "").is_err());
        assert!(check_license_number("crm", "１２３４５６SP").is_err());
        assert!(check_license_number("crm", "123456SÃ").is_err());
    }

    #[test]
    fn parse_license_splits_prefix_and_uf() {
        assert_eq!(parse_license_number("987654MG"), Some(("987654", Uf::Mg)));
    }

    #[test]
    fn state_codes_match_uf_registry() {
        assert_eq!(STATE_CODES.len(), 27);
        assert_eq!(STATE_CODES[0], "AC");
        assert_eq!(STATE_CODES[26], "TO");
        for code in STATE_CODES {
            assert_eq!(Uf::from_code(code).map(|uf| uf.as_str()), Some(code));
        }
    }

    // ---------------------------------------------------------------------
    // Digit strings
    // ---------------------------------------------------------------------

    #[test]
    fn phone_accepts_eleven_digits() {
        assert!(check_digits("phone", "phone", "34912345678", PHONE_DIGITS).is_ok());
    }

    #[test]
    fn phone_rejects_wrong_length_or_content() {
        for bad in ["3491234567", "349123456789", "3491234567a", "", "349 1234567"] {
            let err = check_digits("phone", "phone", bad, PHONE_DIGITS).unwrap_err();
            assert_eq!(err.kind(), ViolationKind::DigitLength, "{bad}");
            assert_eq!(err.field(), None);
        }
    }

    #[test]
    fn cpf_rejects_ten_and_twelve_digits() {
        assert!(check_digits("cpf", "CPF", "12345678901", CPF_DIGITS).is_ok());
        assert!(check_digits("cpf", "CPF", "1234567890", CPF_DIGITS).is_err());
        assert!(check_digits("cpf", "CPF", "123456789012", CPF_DIGITS).is_err());
        assert!(check_digits("cpf", "CPF", "123.456.789", CPF_DIGITS).is_err());
    }

    #[test]
    fn rg_requires_nine_digits() {
        assert!(check_digits("rg", "RG", "123456789", RG_DIGITS).is_ok());
        assert!(check_digits("rg", "RG", "12345678", RG_DIGITS).is_err());
        assert!(check_digits("rg", "RG", "1234567890", RG_DIGITS).is_err());
    }

    #[test]
    fn digits_reject_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not ASCII.
        assert!(check_digits("rg", "RG", "١٢٣٤٥٦٧٨٩", RG_DIGITS).is_err());
    }

    // ---------------------------------------------------------------------
    // Dates
    // ---------------------------------------------------------------------

    #[test]
    fn birth_date_today_or_earlier_passes() {
        let today = date(2024, 6, 15);
        assert!(check_birth_date(today, today).is_ok());
        assert!(check_birth_date(date(1980, 1, 1), today).is_ok());
    }

    #[test]
    fn birth_date_after_today_fails() {
        let today = date(2024, 6, 15);
        let err = check_birth_date(date(2024, 6, 16), today).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Temporal);
    }

    // ---------------------------------------------------------------------
    // Lengths and text
    // ---------------------------------------------------------------------

    #[test]
    fn blood_type_needs_exactly_two_chars() {
        assert!(check_exact_chars("blood_type", "O+", BLOOD_TYPE_CHARS).is_ok());
        assert!(check_exact_chars("blood_type", "AB", BLOOD_TYPE_CHARS).is_ok());
        assert!(check_exact_chars("blood_type", "O", BLOOD_TYPE_CHARS).is_err());
        assert!(check_exact_chars("blood_type", "AB+", BLOOD_TYPE_CHARS).is_err());
        assert!(check_exact_chars("blood_type", "", BLOOD_TYPE_CHARS).is_err());
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(check_not_blank("name", "   ").is_err());
        assert!(check_not_blank("name", "Ana").is_ok());
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_TEXT_CHARS);
        assert!(check_max_chars("name", &accented, MAX_TEXT_CHARS).is_ok());
        let too_long = "a".repeat(MAX_TEXT_CHARS + 1);
        assert!(matches!(
            check_max_chars("name", &too_long, MAX_TEXT_CHARS),
            Err(DomainError::TooLong { actual: 101, .. })
        ));
    }

    #[test]
    fn email_shape() {
        assert!(check_email("email", "ana@hospital.com.br").is_ok());
        assert!(check_email("email", "ana@hospital").is_err());
        assert!(check_email("email", "ana hospital.com").is_err());
        assert!(check_email("email", "@hospital.com").is_err());
    }

    #[test]
    fn present_skips_absent_and_empty() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("")), None);
        assert_eq!(present(Some("x")), Some("x"));
    }
}
