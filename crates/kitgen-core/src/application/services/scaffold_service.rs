//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole materialisation run:
//! 1. Load the manifest from its source
//! 2. For every entry, ensure the parent directory chain exists
//! 3. Write the normalised body, overwriting whatever was there
//! 4. Report each write as it happens
//!
//! The run is fail-fast: the first error aborts it, and files written before
//! the failure are left in place.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, ManifestSource, ProgressReporter},
    domain::{DomainValidator as validator, Manifest},
    error::{KitError, KitResult},
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub base_dir: PathBuf,
    /// Every target written, in write order (duplicates included).
    pub written: Vec<PathBuf>,
    /// Distinct files present after the run.
    pub files_created: usize,
}

/// A write that would happen, computed without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    pub target: PathBuf,
    pub bytes: usize,
    /// `true` when a later entry targets the same path.
    pub overwritten_later: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    source: Box<dyn ManifestSource>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use kitgen_core::application::{ScaffoldService, ports::*};
    ///
    /// let service = ScaffoldService::new(
    ///     source,     // impl ManifestSource
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(source: Box<dyn ManifestSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { source, filesystem }
    }

    /// Load the manifest and materialise it under `base_dir`.
    #[instrument(
        skip_all,
        fields(
            source = %self.source.name(),
            base_dir = %base_dir.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        base_dir: impl AsRef<Path>,
        reporter: &dyn ProgressReporter,
    ) -> KitResult<ScaffoldReport> {
        let manifest = self.load_manifest()?;
        self.write_manifest(&manifest, base_dir.as_ref(), reporter)
    }

    /// Materialise an already-loaded manifest under `base_dir`.
    pub fn write_manifest(
        &self,
        manifest: &Manifest,
        base_dir: &Path,
        reporter: &dyn ProgressReporter,
    ) -> KitResult<ScaffoldReport> {
        validator::validate_manifest(manifest).map_err(KitError::Domain)?;
        warn_duplicates(manifest);

        info!(
            manifest = manifest.name(),
            entries = manifest.len(),
            "Scaffolding spec kit"
        );

        let mut written = Vec::with_capacity(manifest.len());
        for entry in manifest {
            let target = entry.path.resolve(base_dir);

            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            let content = entry.normalized_body();
            self.filesystem.write_file(&target, &content)?;
            debug!(path = %target.display(), bytes = content.len(), "File written");

            reporter.file_written(&target);
            written.push(target);
        }

        let report = ScaffoldReport {
            base_dir: base_dir.to_path_buf(),
            written,
            files_created: manifest.distinct_paths(),
        };

        info!(files = report.files_created, "Scaffold completed successfully");
        Ok(report)
    }

    /// Describe the run without writing anything.
    pub fn plan(&self, base_dir: impl AsRef<Path>) -> KitResult<Vec<PlannedWrite>> {
        let manifest = self.load_manifest()?;
        let base_dir = base_dir.as_ref();
        let entries = manifest.entries();

        Ok(entries
            .iter()
            .enumerate()
            .map(|(i, entry)| PlannedWrite {
                target: entry.path.resolve(base_dir),
                bytes: entry.normalized_body().len(),
                overwritten_later: entries[i + 1..].iter().any(|e| e.path == entry.path),
            })
            .collect())
    }

    /// Whether `base_dir` already exists; existing files will be overwritten.
    pub fn base_exists(&self, base_dir: impl AsRef<Path>) -> bool {
        self.filesystem.exists(base_dir.as_ref())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn load_manifest(&self) -> KitResult<Manifest> {
        let manifest = self.source.load()?;
        debug!(
            source = self.source.name(),
            entries = manifest.len(),
            "Manifest loaded"
        );
        Ok(manifest)
    }
}

fn warn_duplicates(manifest: &Manifest) {
    for path in manifest.duplicate_paths() {
        warn!(path = %path, "Path listed more than once; the last entry wins");
    }
}
