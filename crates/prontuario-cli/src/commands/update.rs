//! `prontuario update`: replace a stored record with a validated file.

use tracing::instrument;

use prontuario_adapters::RecordLoader;
use prontuario_core::application::RecordService;

use crate::{cli::UpdateArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(id = %args.id, file = %args.file.display()))]
pub fn execute(args: UpdateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let record = RecordLoader::new().load_file(&args.file)?;
    let kind = record.kind();

    let service = RecordService::new(super::open_store(config)?);
    service.update(args.id, record)?;

    output.success(&format!("Updated {kind} {}", args.id))?;
    Ok(())
}
