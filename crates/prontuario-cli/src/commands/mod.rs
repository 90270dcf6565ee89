//! Command handlers, one module per subcommand.

use std::io::{self, BufRead, Write as _};

use prontuario_adapters::JsonFileStore;
use tracing::debug;

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli as _},
};

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod show;
pub mod update;
pub mod validate;

/// Open the record store named by `storage.data_file`.
pub(crate) fn open_store(config: &AppConfig) -> CliResult<Box<JsonFileStore>> {
    let path = &config.storage.data_file;
    debug!(file = %path.display(), "opening record store");
    let store = JsonFileStore::open(path).with_cli_context(|| "opening record store")?;
    Ok(Box::new(store))
}

/// Ask a yes/no question. Anything but an explicit yes is a no.
pub(crate) fn confirm(prompt: &str) -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;

        if io::stdin().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(|e| crate::error::CliError::IoError {
                    message: "failed to read confirmation".into(),
                    source: io::Error::other(e),
                });
        }
    }

    read_answer(prompt, io::stdin().lock())
}

fn read_answer(prompt: &str, mut input: impl BufRead) -> CliResult<bool> {
    eprint!("{prompt} [y/N] ");
    io::stderr()
        .flush()
        .with_cli_context(|| "failed to flush stderr")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_cli_context(|| "failed to read confirmation input")?;

    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    )
}
