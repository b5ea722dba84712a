//! Manifest files on disk.
//!
//! # Format
//!
//! ```toml
//! name = "my-kit"            # optional; defaults to the file stem
//!
//! [[entries]]
//! path = "personas/analyst.md"
//! body = """
//! # Persona: Analyst
//! ...
//! """
//! ```
//!
//! Bodies are literal text. Entries are written in file order.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};

use kitgen_core::{
    application::{ApplicationError, ports::ManifestSource},
    domain::{ContentEntry, Manifest},
    error::KitResult,
};

/// Deserialised representation of a manifest file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    name: Option<String>,
    #[serde(default)]
    entries: Vec<EntryRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryRecord {
    path: String,
    body: String,
}

/// A manifest read from a TOML file when loaded.
#[derive(Debug, Clone)]
pub struct TomlManifest {
    path: PathBuf,
    display_name: String,
}

impl TomlManifest {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = path.display().to_string();
        Self { path, display_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse manifest text. `fallback_name` is used when the file has no
    /// `name` key.
    pub fn parse(fallback_name: &str, text: &str) -> KitResult<Manifest> {
        let file: ManifestFile =
            toml::from_str(text).map_err(|e| ApplicationError::ManifestUnavailable {
                source_name: fallback_name.to_string(),
                reason: e.to_string(),
            })?;

        let mut manifest = Manifest::new(file.name.unwrap_or_else(|| fallback_name.to_string()));
        for record in file.entries {
            manifest.push(ContentEntry::new(&record.path, record.body)?);
        }
        Ok(manifest)
    }

    fn fallback_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.display_name.clone())
    }
}

impl ManifestSource for TomlManifest {
    fn name(&self) -> &str {
        &self.display_name
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> KitResult<Manifest> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::ManifestNotFound {
                path: self.path.clone(),
            },
            _ => ApplicationError::ManifestUnavailable {
                source_name: self.display_name.clone(),
                reason: e.to_string(),
            },
        })?;

        let manifest = Self::parse(&self.fallback_name(), &text)?;
        debug!(entries = manifest.len(), "Manifest file loaded");
        Ok(manifest)
    }
}
