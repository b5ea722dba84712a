//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kitgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Manifest;
use crate::error::KitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kitgen_adapters::filesystem::LocalFilesystem` (production)
/// - `kitgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> KitResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> KitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for manifest retrieval.
///
/// Implemented by:
/// - `kitgen_adapters::manifest::BuiltinManifest` (compiled-in kits)
/// - `kitgen_adapters::manifest::TomlManifest` (manifest file on disk)
pub trait ManifestSource: Send + Sync {
    /// Human-readable name used in logs and errors.
    fn name(&self) -> &str;

    /// Produce the ordered manifest.
    fn load(&self) -> KitResult<Manifest>;
}

/// Port for per-file progress.
///
/// Called after each successful write, before the next entry is processed,
/// so confirmations for earlier files are visible even if a later write
/// fails.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter {
    fn file_written(&self, path: &Path);
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn file_written(&self, _path: &Path) {}
}
