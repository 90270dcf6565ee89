//! `prontuario validate`: check record files without storing them.

use std::path::Path;

use serde_json::json;
use tracing::{info, instrument};

use prontuario_adapters::{LoadedRecord, RecordLoader};
use prontuario_core::domain::{DomainError, DomainValidator, rules};

use crate::{
    cli::{OutputFormat, ValidateArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(paths = args.paths.len()))]
pub fn execute(args: ValidateArgs, output: &OutputManager) -> CliResult<()> {
    let loader = RecordLoader::new();

    let mut outcomes = Vec::new();
    for path in &args.paths {
        for loaded in loader.load_path(path)? {
            outcomes.push(check(loaded));
        }
    }

    let total = outcomes.len();
    let invalid = outcomes.iter().filter(|o| o.error.is_some()).count();

    if output.format() == OutputFormat::Json {
        let items: Vec<_> = outcomes.iter().map(Outcome::to_json).collect();
        output.json(&items)?;
    } else {
        for outcome in &outcomes {
            match &outcome.error {
                None => output.success(&outcome.describe())?,
                Some(_) => output.error(&outcome.describe())?,
            }
        }
        if total == 0 {
            output.warning("No record files found")?;
        }
    }

    info!(total, invalid, "validation finished");

    if invalid > 0 {
        return Err(CliError::ValidationFailed { invalid, total });
    }
    if total > 0 {
        output.print(&format!("{total} record(s) valid"))?;
    }
    Ok(())
}

struct Outcome {
    path: String,
    summary: Option<String>,
    error: Option<DomainError>,
}

fn check(loaded: LoadedRecord) -> Outcome {
    let path = display(&loaded.path);
    match loaded.result {
        Ok(record) => {
            let summary = Some(format!("{} '{}'", record.kind(), record.name()));
            let error = DomainValidator::validate_record(&record, rules::today()).err();
            Outcome { path, summary, error }
        }
        Err(e) => Outcome {
            path,
            summary: None,
            error: Some(e),
        },
    }
}

impl Outcome {
    fn describe(&self) -> String {
        match (&self.error, &self.summary) {
            (None, Some(summary)) => format!("{}: {summary}", self.path),
            (None, None) => self.path.clone(),
            (Some(e), _) => match e.field() {
                Some(field) => format!("{}: [{field}] {e}", self.path),
                None => format!("{}: {e}", self.path),
            },
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match &self.error {
            None => json!({ "path": self.path, "valid": true }),
            Some(e) => json!({
                "path": self.path,
                "valid": false,
                "field": e.field(),
                "error": e.to_string(),
            }),
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use prontuario_core::domain::{Department, Record};

    use super::*;

    fn loaded(result: Result<Record, DomainError>) -> LoadedRecord {
        LoadedRecord {
            path: PathBuf::from("records/uti.json"),
            result,
        }
    }

    #[test]
    fn valid_record_is_summarised() {
        let outcome = check(loaded(Ok(Department::new("UTI").into())));
        assert!(outcome.error.is_none());
        assert_eq!(outcome.describe(), "records/uti.json: department 'UTI'");
        assert_eq!(outcome.to_json()["valid"], true);
    }

    #[test]
    fn field_errors_name_the_field() {
        let outcome = check(loaded(Ok(Department::new("  ").into())));
        let described = outcome.describe();
        assert!(described.starts_with("records/uti.json: [name]"), "{described}");
        assert_eq!(outcome.to_json()["field"], "name");
    }

    #[test]
    fn load_errors_are_reported() {
        let outcome = check(loaded(Err(DomainError::MalformedRecord(
            "invalid JSON".into(),
        ))));
        assert_eq!(
            outcome.describe(),
            "records/uti.json: malformed record: invalid JSON"
        );
        assert!(outcome.to_json()["field"].is_null());
    }
}
