//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use prontuario_core::domain::{RecordId, RecordKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "prontuario",
    bin_name = "prontuario",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Medical-records administration: doctors, nurses, departments, patients",
    long_about = "Prontuario validates and stores doctor, nurse, department and \
                  patient records. Every record is checked against the \
                  registration rules before it is saved.",
    after_help = "EXAMPLES:\n\
        \x20 prontuario validate records/\n\
        \x20 prontuario add uti.json\n\
        \x20 prontuario list nurse --format csv\n\
        \x20 prontuario delete department 3 --yes",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check record files without storing them.
    #[command(
        visible_alias = "check",
        about = "Validate record files",
        after_help = "EXAMPLES:\n\
            \x20 prontuario validate doctor.json\n\
            \x20 prontuario validate records/ extra/patient.toml"
    )]
    Validate(ValidateArgs),

    /// Validate and store a new record.
    #[command(
        about = "Add a record from a file",
        after_help = "EXAMPLES:\n\
            \x20 prontuario add uti.json\n\
            \x20 prontuario add nurse.toml"
    )]
    Add(AddArgs),

    /// Validate and replace a stored record.
    #[command(
        about = "Replace a stored record",
        after_help = "EXAMPLES:\n\
            \x20 prontuario update 4 nurse.toml"
    )]
    Update(UpdateArgs),

    /// List stored records of one kind.
    #[command(
        visible_alias = "ls",
        about = "List stored records",
        after_help = "EXAMPLES:\n\
            \x20 prontuario list doctor\n\
            \x20 prontuario list patients --format json"
    )]
    List(ListArgs),

    /// Print one stored record.
    #[command(
        about = "Show a stored record",
        after_help = "EXAMPLES:\n\
            \x20 prontuario show patient 12"
    )]
    Show(ShowArgs),

    /// Remove a stored record.
    #[command(
        visible_alias = "rm",
        about = "Delete a stored record",
        after_help = "EXAMPLES:\n\
            \x20 prontuario delete nurse 7\n\
            \x20 prontuario delete department 3 --yes"
    )]
    Delete(DeleteArgs),

    /// Initialise a Prontuario configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 prontuario init\n\
            \x20 prontuario init --force\n\
            \x20 prontuario --config ./prontuario.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 prontuario completions bash > ~/.local/share/bash-completion/completions/prontuario\n\
            \x20 prontuario completions zsh  > ~/.zfunc/_prontuario\n\
            \x20 prontuario completions fish > ~/.config/fish/completions/prontuario.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Prontuario configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 prontuario config get storage.data_file\n\
            \x20 prontuario config set output.format csv\n\
            \x20 prontuario config list"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Whether an explicit `--config` file has to exist already.
    ///
    /// `init` and `config set|path` may name a file they are about to create.
    pub fn needs_existing_config(&self) -> bool {
        !matches!(
            self,
            Self::Init(_) | Self::Config(ConfigCommands::Set { .. } | ConfigCommands::Path)
        )
    }
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `prontuario validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Record files or directories of record files.
    #[arg(value_name = "PATH", required = true, help = "Record files or directories")]
    pub paths: Vec<PathBuf>,
}

// ── add / update ──────────────────────────────────────────────────────────────

/// Arguments for `prontuario add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// A `.json` or `.toml` record file.
    #[arg(value_name = "FILE", help = "Record file (.json or .toml)")]
    pub file: PathBuf,
}

/// Arguments for `prontuario update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Id of the stored record.
    #[arg(value_name = "ID", help = "Id of the record to replace")]
    pub id: RecordId,

    /// A `.json` or `.toml` record file of the same kind.
    #[arg(value_name = "FILE", help = "Record file (.json or .toml)")]
    pub file: PathBuf,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `prontuario list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Record kind (`doctor`, `nurse`, `department`, `patient`; plurals accepted).
    #[arg(value_name = "KIND", help = "Record kind")]
    pub kind: RecordKind,

    /// Output format. Defaults to `output.format` from the config.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── show / delete ─────────────────────────────────────────────────────────────

/// Arguments for `prontuario show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(value_name = "KIND", help = "Record kind")]
    pub kind: RecordKind,

    #[arg(value_name = "ID", help = "Record id")]
    pub id: RecordId,
}

/// Arguments for `prontuario delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(value_name = "KIND", help = "Record kind")]
    pub kind: RecordKind,

    #[arg(value_name = "ID", help = "Record id")]
    pub id: RecordId,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Delete without asking")]
    pub yes: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `prontuario init`.
///
/// The file is written to `--config` when given, otherwise to the platform
/// configuration directory.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `prontuario completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `prontuario config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.data_file`.
        key: String,
    },
    /// Set a configuration key in the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
