//! `prontuario delete`: remove a stored record.

use tracing::{info, instrument};

use prontuario_core::application::RecordService;

use crate::{
    cli::DeleteArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(kind = %args.kind, id = %args.id))]
pub fn execute(args: DeleteArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = RecordService::new(super::open_store(config)?);

    // Fails early with NotFound before asking anything.
    let record = service.get(args.kind, args.id)?;

    if !args.yes && !output.is_quiet() {
        let prompt = format!("Delete {} {} ({})?", args.kind, args.id, record.name());
        if !super::confirm(&prompt)? {
            info!("deletion declined");
            return Err(CliError::Cancelled);
        }
    }

    service.delete(args.kind, args.id)?;
    output.success(&format!("Deleted {} {}", args.kind, args.id))?;
    Ok(())
}
