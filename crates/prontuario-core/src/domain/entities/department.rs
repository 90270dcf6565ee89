//! Hospital department ("setor").

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::Entity, error::DomainError, rules, value_objects::RecordKind,
};

/// A department nurses are assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Entity for Department {
    const KIND: RecordKind = RecordKind::Department;
    const LIST_DISPLAY: &'static [&'static str] = &["name"];

    fn list_row(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn unique_fields(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    // `name` is always text here; only the field constraints remain.
    fn validate_on(&self, _today: NaiveDate) -> Result<(), DomainError> {
        rules::check_required_text("name", &self.name)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
