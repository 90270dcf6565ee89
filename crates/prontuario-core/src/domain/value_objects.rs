//! Domain value objects: Uf, Shift, Status, Sex, RecordKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO validation logic. All rules live in `rules.rs`. This file's
//! only job is to define the types, their string representations, and their
//! `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Done: serde and display follow `as_str`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Uf ───────────────────────────────────────────────────────────────────────

/// A Brazilian federative unit (state or federal district).
///
/// Professional license numbers (CRM, COREN) end in one of these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Uf {
    Ac,
    Al,
    Ap,
    Am,
    Ba,
    Ce,
    Df,
    Es,
    Go,
    Ma,
    Mt,
    Ms,
    Mg,
    Pa,
    Pb,
    Pr,
    Pe,
    Pi,
    Rj,
    Rn,
    Rs,
    Ro,
    Rr,
    Sc,
    Sp,
    Se,
    To,
}

impl Uf {
    /// Every unit, in the canonical registry order.
    pub const ALL: [Uf; 27] = [
        Self::Ac,
        Self::Al,
        Self::Ap,
        Self::Am,
        Self::Ba,
        Self::Ce,
        Self::Df,
        Self::Es,
        Self::Go,
        Self::Ma,
        Self::Mt,
        Self::Ms,
        Self::Mg,
        Self::Pa,
        Self::Pb,
        Self::Pr,
        Self::Pe,
        Self::Pi,
        Self::Rj,
        Self::Rn,
        Self::Rs,
        Self::Ro,
        Self::Rr,
        Self::Sc,
        Self::Sp,
        Self::Se,
        Self::To,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }

    /// Look up a unit by its exact two-letter code.
    ///
    /// Matching is case-sensitive: `"sp"` is not a code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|uf| uf.as_str() == code)
    }
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Uf {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DomainError::InvalidChoice {
            field: "uf",
            value: s.to_string(),
        })
    }
}

impl Serialize for Uf {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Uf {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown federative unit `{code}`")))
    }
}

// ── Shift ────────────────────────────────────────────────────────────────────

/// Working shift of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
    FullTime,
}

impl Shift {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Night => "night",
            Self::FullTime => "full-time",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" | "manhã" | "manha" => Ok(Self::Morning),
            "afternoon" | "tarde" => Ok(Self::Afternoon),
            "night" | "noite" => Ok(Self::Night),
            "full-time" | "fulltime" | "integral" => Ok(Self::FullTime),
            other => Err(DomainError::InvalidChoice {
                field: "shift",
                value: other.to_string(),
            }),
        }
    }
}

// ── Status ───────────────────────────────────────────────────────────────────

/// Employment status of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" | "ativo" => Ok(Self::Active),
            "inactive" | "inativo" => Ok(Self::Inactive),
            other => Err(DomainError::InvalidChoice {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

// ── Sex ──────────────────────────────────────────────────────────────────────

/// Sex recorded on a patient's file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "masculino" | "m" => Ok(Self::Male),
            "female" | "feminino" | "f" => Ok(Self::Female),
            other => Err(DomainError::InvalidChoice {
                field: "sex",
                value: other.to_string(),
            }),
        }
    }
}

// ── RecordKind ───────────────────────────────────────────────────────────────

/// The four record types managed by the administration module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Department,
    Doctor,
    Nurse,
    Patient,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        Self::Department,
        Self::Doctor,
        Self::Nurse,
        Self::Patient,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Doctor => "doctor",
            Self::Nurse => "nurse",
            Self::Patient => "patient",
        }
    }

    /// Plural display name used for listing headers.
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Department => "departments",
            Self::Doctor => "doctors",
            Self::Nurse => "nurses",
            Self::Patient => "patients",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "department" | "departments" | "setor" => Ok(Self::Department),
            "doctor" | "doctors" | "medico" => Ok(Self::Doctor),
            "nurse" | "nurses" | "enfermeiro" => Ok(Self::Nurse),
            "patient" | "patients" | "paciente" => Ok(Self::Patient),
            other => Err(DomainError::InvalidChoice {
                field: "kind",
                value: other.to_string(),
            }),
        }
    }
}
