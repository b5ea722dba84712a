//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `KITGEN_OUTPUT__BASE_DIR`, `KITGEN_OUTPUT__NO_COLOR`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`] if present
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Directory name used when neither flag, env nor file names one.
pub const DEFAULT_BASE_DIR: &str = "acme-pharmacy-analytics-spec";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the kit is written under.
    pub base_dir: PathBuf,
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: Path::new(".").join(DEFAULT_BASE_DIR),
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from file, environment and defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist when
    /// given.  Without it the platform default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        Self::load_from(config_file.map(PathBuf::as_path), Some(Self::config_path()))
    }

    /// Like [`Self::load`] with an explicit fallback location.
    pub fn load_from(explicit: Option<&Path>, fallback: Option<PathBuf>) -> CliResult<Self> {
        let mut builder = Config::builder();

        match (explicit, fallback) {
            (Some(path), _) => {
                if !path.is_file() {
                    return Err(CliError::ConfigError {
                        message: format!("Config file not found: {}", path.display()),
                        source: None,
                    });
                }
                debug!(path = %path.display(), "Reading config file");
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            (None, Some(path)) => {
                debug!(path = %path.display(), "Reading optional config file");
                builder = builder.add_source(
                    File::from(path)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
            (None, None) => {}
        }

        let config = builder
            .add_source(
                Environment::with_prefix("KITGEN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| CliError::config("Failed to read configuration", e))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::config("Invalid configuration", e))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kitgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "kitgen", "kitgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kitgen.toml"))
    }

    /// Look up a dotted key, e.g. `output.base_dir`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.base_dir" => Some(self.output.base_dir.display().to_string()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            _ => None,
        }
    }

    /// Every supported key, in display order.
    pub fn keys() -> &'static [&'static str] {
        &["output.base_dir", "output.no_color"]
    }
}
