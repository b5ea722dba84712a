//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use kitgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::KitResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree. Mirrors the failure modes of a real disk that
/// matter to scaffolding: writing into a missing directory, and a regular
/// file standing where a directory is needed.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Check whether `path` is a known directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// Remove a directory and everything beneath it (testing helper).
    pub fn remove_dir_all(&self, path: &Path) -> KitResult<()> {
        let mut inner = self.write()?;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    /// Seed a regular file directly, bypassing parent checks (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) -> KitResult<()> {
        let mut inner = self.write()?;
        inner.files.insert(path.into(), content.into());
        Ok(())
    }

    fn write(&self) -> KitResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> KitResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: format!("Failed to create directory: {} is a file", current.display()),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> KitResult<()> {
        let mut inner = self.write()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }
        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/personas")).unwrap();
        assert!(fs.is_dir(Path::new("/out")));
        assert!(fs.is_dir(Path::new("/out/personas")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/out/a.md"), "a").is_err());

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/a.md"), "a").unwrap();
        assert_eq!(fs.read_file(Path::new("/out/a.md")).as_deref(), Some("a"));
    }

    #[test]
    fn file_in_the_way_blocks_directory_creation() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/out/personas", "oops").unwrap();
        assert!(fs.create_dir_all(Path::new("/out/personas")).is_err());
    }

    #[test]
    fn cannot_write_over_a_directory() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/personas")).unwrap();
        assert!(fs.write_file(Path::new("/out/personas"), "x").is_err());
    }

    #[test]
    fn remove_dir_all_drops_subtree() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/personas")).unwrap();
        fs.write_file(Path::new("/out/personas/a.md"), "a").unwrap();

        fs.remove_dir_all(Path::new("/out/personas")).unwrap();
        assert!(!fs.exists(Path::new("/out/personas")));
        assert!(!fs.exists(Path::new("/out/personas/a.md")));
        assert!(fs.exists(Path::new("/out")));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("/x")).unwrap();
        assert!(other.exists(Path::new("/x")));
    }
}
