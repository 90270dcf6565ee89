// ============================================================================
// domain/error.rs - RECORD VALIDATION ERRORS
// ============================================================================

use chrono::NaiveDate;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the same record always yields the same error)
/// - Scoped (field-scoped or general, see [`DomainError::field`])
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Rule violations
    // ========================================================================
    #[error("{field}: invalid format '{value}'. Try: 000000UF (UF = state abbreviation)")]
    InvalidLicenseNumber { field: &'static str, value: String },

    #[error("invalid {label}: must contain exactly {expected} numeric digits")]
    InvalidDigits {
        field: &'static str,
        label: &'static str,
        expected: usize,
        value: String,
    },

    #[error("invalid birth date {date}: must not be later than {today}")]
    BirthDateInFuture { date: NaiveDate, today: NaiveDate },

    #[error("invalid {field}: must be exactly {expected} characters (got {actual})")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field} must be text")]
    NotText { field: &'static str },

    // ========================================================================
    // Field constraints
    // ========================================================================
    #[error("{field} cannot be blank")]
    BlankField { field: &'static str },

    #[error("{field} has {actual} characters; at most {max} allowed")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field}: '{value}' is not a valid e-mail address")]
    InvalidEmail { field: &'static str, value: String },

    #[error("unknown {field} '{value}'")]
    InvalidChoice { field: &'static str, value: String },

    #[error("required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Input decoding
    // ========================================================================
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

impl DomainError {
    /// The field this error is attached to, or `None` for a general
    /// (record-level) error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidLicenseNumber { field, .. }
            | Self::NotText { field }
            | Self::BlankField { field }
            | Self::TooLong { field, .. }
            | Self::InvalidEmail { field, .. }
            | Self::InvalidChoice { field, .. }
            | Self::MissingRequiredField { field } => Some(field),
            Self::InvalidDigits { .. }
            | Self::BirthDateInFuture { .. }
            | Self::InvalidLength { .. }
            | Self::MalformedRecord(_) => None,
        }
    }

    /// Which rule family was violated.
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::InvalidLicenseNumber { .. } | Self::InvalidEmail { .. } => ViolationKind::Format,
            Self::InvalidDigits { .. } => ViolationKind::DigitLength,
            Self::BirthDateInFuture { .. } => ViolationKind::Temporal,
            Self::InvalidLength { .. } | Self::TooLong { .. } => ViolationKind::Length,
            Self::NotText { .. } => ViolationKind::Type,
            Self::BlankField { .. } | Self::MissingRequiredField { .. } => {
                ViolationKind::Required
            }
            Self::InvalidChoice { .. } => ViolationKind::Choice,
            Self::MalformedRecord(_) => ViolationKind::Malformed,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLicenseNumber { field, .. } => vec![
                format!(
                    "{} must be six or more digits followed by a state code",
                    field.to_uppercase()
                ),
                "Example: 123456SP".into(),
            ],
            Self::InvalidDigits {
                label, expected, ..
            } => match *expected {
                11 if label.contains("phone") => vec![
                    format!("The {label} must have {expected} digits, area code included"),
                    "Example: 34912345678".into(),
                ],
                _ => vec![
                    format!("Enter the {label} using digits only ({expected} digits)"),
                    "Remove dots, dashes and spaces".into(),
                ],
            },
            Self::BirthDateInFuture { today, .. } => vec![
                format!("The birth date must be on or before {today}"),
                "Dates use the YYYY-MM-DD format".into(),
            ],
            Self::InvalidLength { field, expected, .. } if *field == "blood_type" => vec![
                format!("The blood type must have exactly {expected} characters"),
                "Examples: O+, A-, AB".into(),
            ],
            Self::InvalidChoice { field, .. } => vec![
                format!("Check the accepted values for {field}"),
                "Use --help for usage information".into(),
            ],
            Self::MalformedRecord(_) => vec![
                "Check that the file is valid JSON or TOML".into(),
                "Every record needs a `kind` field: doctor, nurse, department or patient".into(),
            ],
            _ => vec!["Correct the field and try again".into()],
        }
    }
}

/// Rule families, used to classify validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Pattern mismatch (license number, e-mail).
    Format,
    /// Wrong length or non-digit content in a digit-string field.
    DigitLength,
    /// Date later than the current date.
    Temporal,
    /// Fixed or maximum length violated.
    Length,
    /// Non-textual value where text is required.
    Type,
    /// Required value is blank or absent.
    Required,
    /// Value outside an enumerated set.
    Choice,
    /// Input could not be decoded into a record.
    Malformed,
}
