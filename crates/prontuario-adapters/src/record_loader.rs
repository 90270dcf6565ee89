//! Record-file loader.
//!
//! Reads candidate records from `.json` or `.toml` files into domain
//! [`Record`]s. Every file holds one record, tagged by `kind`:
//!
//! ```toml
//! kind       = "nurse"
//! name       = "Joana Lima"
//! coren      = "654321MG"
//! department = 1
//! phone      = "31987654321"
//! email      = "joana@hospital.com.br"
//! birth_date = 1990-11-20
//! cpf        = "98765432100"
//! shift      = "integral"
//! status     = "ativo"
//! ```
//!
//! Before the typed decode the loader normalizes the raw document:
//!
//! - `kind`, `shift`, `status` and `sex` accept the aliases their `FromStr`
//!   impls accept (Portuguese labels, plurals) and are rewritten to the
//!   canonical spelling.
//! - text fields that are present but not strings fail with
//!   [`DomainError::NotText`]; `null` or absent optional fields pass.
//! - TOML dates are turned into `YYYY-MM-DD` strings.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use prontuario_core::domain::{DomainError, Record, RecordKind, Sex, Shift, Status};

/// Outcome of loading one file during a directory walk.
#[derive(Debug)]
pub struct LoadedRecord {
    pub path: PathBuf,
    pub result: Result<Record, DomainError>,
}

/// Loads [`Record`]s from record files.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordLoader;

impl RecordLoader {
    pub fn new() -> Self {
        Self
    }

    /// Whether `path` has an extension the loader understands.
    pub fn is_record_file(path: &Path) -> bool {
        Format::of(path).is_some()
    }

    /// Load one record file.
    #[instrument(skip(self, path), fields(file = %path.display()))]
    pub fn load_file(&self, path: &Path) -> Result<Record, DomainError> {
        let format = Format::of(path).ok_or_else(|| {
            DomainError::MalformedRecord(format!(
                "'{}' is not a .json or .toml file",
                path.display()
            ))
        })?;

        let raw = fs::read_to_string(path).map_err(|e| {
            DomainError::MalformedRecord(format!("failed to read '{}': {e}", path.display()))
        })?;

        self.parse(&raw, format)
    }

    /// Parse a JSON document holding one record.
    pub fn parse_json(&self, raw: &str) -> Result<Record, DomainError> {
        self.parse(raw, Format::Json)
    }

    /// Parse a TOML document holding one record.
    pub fn parse_toml(&self, raw: &str) -> Result<Record, DomainError> {
        self.parse(raw, Format::Toml)
    }

    /// Load every record file under `dir`, sorted by path.
    ///
    /// Files with other extensions are skipped. One unreadable or invalid
    /// file does not stop the walk; its error is returned in its slot.
    #[instrument(skip(self, dir), fields(dir = %dir.display()))]
    pub fn load_dir(&self, dir: &Path) -> Result<Vec<LoadedRecord>, DomainError> {
        if !dir.is_dir() {
            return Err(DomainError::MalformedRecord(format!(
                "records directory not found: {}",
                dir.display()
            )));
        }

        let mut loaded = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                DomainError::MalformedRecord(format!("directory walk error: {e}"))
            })?;

            if !entry.file_type().is_file() || !Self::is_record_file(entry.path()) {
                continue;
            }

            let path = entry.into_path();
            let result = self.load_file(&path);
            if let Err(e) = &result {
                warn!(file = %path.display(), error = %e, "record file rejected");
            }
            loaded.push(LoadedRecord { path, result });
        }

        loaded.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(count = loaded.len(), "finished loading records");
        Ok(loaded)
    }

    /// Load `path` as a single file, or walk it when it is a directory.
    pub fn load_path(&self, path: &Path) -> Result<Vec<LoadedRecord>, DomainError> {
        if path.is_dir() {
            return self.load_dir(path);
        }

        Ok(vec![LoadedRecord {
            path: path.to_path_buf(),
            result: self.load_file(path),
        }])
    }

    fn parse(&self, raw: &str, format: Format) -> Result<Record, DomainError> {
        let value = match format {
            Format::Json => serde_json::from_str::<Value>(raw)
                .map_err(|e| DomainError::MalformedRecord(format!("invalid JSON: {e}")))?,
            Format::Toml => toml::from_str::<toml::Table>(raw)
                .map(|t| toml_to_json(toml::Value::Table(t)))
                .map_err(|e| DomainError::MalformedRecord(format!("invalid TOML: {e}")))?,
        };

        let Value::Object(mut fields) = value else {
            return Err(DomainError::MalformedRecord(
                "a record must be an object".into(),
            ));
        };

        let kind = normalize_kind(&mut fields)?;
        check_text_fields(&fields, kind)?;
        normalize_choice::<Shift>(&mut fields, "shift")?;
        normalize_choice::<Status>(&mut fields, "status")?;
        normalize_choice::<Sex>(&mut fields, "sex")?;

        serde_json::from_value(Value::Object(fields))
            .map_err(|e| DomainError::MalformedRecord(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Fields whose value must be a string, per kind.
fn text_fields(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Department => &["name"],
        RecordKind::Doctor => &["name", "crm", "phone", "email", "cpf"],
        RecordKind::Nurse => &["name", "coren", "phone", "email", "cpf"],
        RecordKind::Patient => &[
            "name",
            "cpf",
            "rg",
            "mother_name",
            "father_name",
            "primary_phone",
            "secondary_phone",
            "email",
            "blood_type",
        ],
    }
}

fn normalize_kind(fields: &mut Map<String, Value>) -> Result<RecordKind, DomainError> {
    let kind = match fields.get("kind") {
        Some(Value::String(s)) => RecordKind::from_str(s)?,
        Some(_) => return Err(DomainError::NotText { field: "kind" }),
        None => return Err(DomainError::MissingRequiredField { field: "kind" }),
    };

    fields.insert("kind".into(), Value::String(kind.as_str().into()));
    Ok(kind)
}

fn check_text_fields(fields: &Map<String, Value>, kind: RecordKind) -> Result<(), DomainError> {
    for &field in text_fields(kind) {
        match fields.get(field) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => return Err(DomainError::NotText { field }),
        }
    }
    Ok(())
}

fn normalize_choice<T>(
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Result<(), DomainError>
where
    T: FromStr<Err = DomainError> + ToString,
{
    let Some(Value::String(raw)) = fields.get(field) else {
        return Ok(());
    };

    let canonical = T::from_str(raw)?.to_string();
    fields.insert(field.into(), Value::String(canonical));
    Ok(())
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(d) => Value::String(d.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}
