//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--data-file`, `--no-color`; applied at the call-site)
//! 2. Environment variables: `PRONTUARIO_` prefix, `__` between sections,
//!    e.g. `PRONTUARIO_STORAGE__DATA_FILE=/srv/prontuario.json`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Keys accepted by `config get` / `config set`.
pub const KEYS: [&str; 3] = ["storage.data_file", "output.no_color", "output.format"];

/// Values accepted for `output.format`.
pub const LIST_FORMATS: [&str; 4] = ["table", "list", "json", "csv"];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where records are kept.
    pub storage: StorageConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Default `list` format.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_file: default_data_file(),
            },
            output: OutputConfig {
                no_color: false,
                format: "table".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist when `must_exist` is set. Without it the default location is
    /// read when present.
    pub fn load(config_file: Option<&PathBuf>, must_exist: bool) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("encoding defaults")?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(must_exist && config_file.is_some()),
            )
            .add_source(
                Environment::with_prefix("PRONTUARIO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        let loaded: Self = config
            .try_deserialize()
            .context("configuration has invalid values")?;
        loaded.check()?;
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.prontuario.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("br", "prontuario", "prontuario")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".prontuario.toml"))
    }

    /// Value of a dotted key, as text.
    pub fn get(&self, key: &str) -> CliResult<String> {
        match key {
            "storage.data_file" => Ok(self.storage.data_file.display().to_string()),
            "output.no_color" => Ok(self.output.no_color.to_string()),
            "output.format" => Ok(self.output.format.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    fn check(&self) -> anyhow::Result<()> {
        if !LIST_FORMATS.contains(&self.output.format.as_str()) {
            anyhow::bail!(
                "output.format must be one of {}, not '{}'",
                LIST_FORMATS.join(", "),
                self.output.format
            );
        }
        Ok(())
    }
}

/// Set `key` to `value` in the TOML file at `path`, keeping other entries.
///
/// A missing file is created.
pub fn set_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;
    if !KEYS.contains(&key) {
        return Err(unknown_key(key));
    }

    let parsed = match key {
        "output.no_color" => {
            let flag = value.parse::<bool>().map_err(|e| CliError::ConfigError {
                message: format!("output.no_color must be true or false, not '{value}'"),
                source: Some(Box::new(e)),
            })?;
            toml::Value::Boolean(flag)
        }
        "output.format" if !LIST_FORMATS.contains(&value) => {
            return Err(CliError::ConfigError {
                message: format!(
                    "output.format must be one of {}, not '{value}'",
                    LIST_FORMATS.join(", ")
                ),
                source: None,
            });
        }
        _ => toml::Value::String(value.to_string()),
    };

    let mut document = match std::fs::read_to_string(path) {
        Ok(raw) => toml::from_str::<toml::Table>(&raw).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}'", path.display()),
            source: Some(Box::new(e)),
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
        Err(e) => {
            return Err(CliError::IoError {
                message: format!("Failed to read '{}'", path.display()),
                source: e,
            });
        }
    };

    let table = document
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()));
    let toml::Value::Table(table) = table else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        });
    };
    table.insert(field.to_string(), parsed);

    write_toml(path, &document)
}

/// Serialize `value` as TOML to `path`, creating parent directories.
pub fn write_toml<T: Serialize>(path: &Path, value: &T) -> CliResult<()> {
    let text = toml::to_string_pretty(value).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, text).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })
}

fn default_data_file() -> PathBuf {
    directories::ProjectDirs::from("br", "prontuario", "prontuario")
        .map(|d| d.data_dir().join("records.json"))
        .unwrap_or_else(|| PathBuf::from("prontuario.json"))
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
        source: None,
    }
}
