//! `prontuario show`: print one stored record as JSON.

use prontuario_core::{application::RecordService, domain::RecordEntry};

use crate::{cli::ShowArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: ShowArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = RecordService::new(super::open_store(config)?);
    let record = service.get(args.kind, args.id)?;
    output.json(&RecordEntry::new(args.id, record))?;
    Ok(())
}
