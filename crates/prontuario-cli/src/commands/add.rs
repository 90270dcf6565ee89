//! `prontuario add`: validate a record file and store it.

use serde_json::json;
use tracing::instrument;

use prontuario_adapters::RecordLoader;
use prontuario_core::application::RecordService;

use crate::{
    cli::{AddArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: AddArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let record = RecordLoader::new().load_file(&args.file)?;
    let kind = record.kind();
    let name = record.name().to_string();

    let service = RecordService::new(super::open_store(config)?);
    let id = service.create(record)?;

    if output.format() == OutputFormat::Json {
        output.json(&json!({ "id": id, "kind": kind, "name": name }))?;
    } else {
        output.success(&format!("Created {kind} {id} ({name})"))?;
    }
    Ok(())
}
