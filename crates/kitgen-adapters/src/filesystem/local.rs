//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use kitgen_core::{application::ports::Filesystem, error::KitResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> KitResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KitResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> kitgen_core::error::KitError {
    use kitgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitgen_core::{application::ApplicationError, error::KitError};
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a/b/c");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn write_file_overwrites() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("x.md");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "a much longer first version\n").unwrap();
        fs.write_file(&file, "short\n").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "short\n");
    }

    #[test]
    fn file_blocking_a_directory_is_a_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("personas");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = LocalFilesystem::new()
            .create_dir_all(&blocker.join("deeper"))
            .unwrap_err();
        match err {
            KitError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, blocker.join("deeper"));
                assert!(reason.starts_with("Failed to create directory"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let result = LocalFilesystem::new().write_file(&tmp.path().join("nope/x.md"), "x");
        assert!(result.is_err());
    }

    #[test]
    fn exists_reports_files_and_dirs() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.exists(tmp.path()));
        assert!(!fs.exists(&tmp.path().join("missing")));
    }
}
