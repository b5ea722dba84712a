//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not manifest
//! rules. Manifest errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A manifest source could not produce a manifest.
    #[error("Manifest '{source_name}' unavailable: {reason}")]
    ManifestUnavailable { source_name: String, reason: String },

    /// A manifest file does not exist.
    #[error("Manifest file not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Shared adapter state could not be locked.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no regular file sits where a directory is expected".into(),
                "Check available disk space".into(),
            ],
            Self::ManifestUnavailable { source_name, .. } => vec![
                format!("Could not load manifest '{}'", source_name),
                "Check the manifest file is valid TOML with [[entries]] tables".into(),
            ],
            Self::ManifestNotFound { path } => vec![
                format!("No such file: {}", path.display()),
                "Omit --manifest to use the built-in ACME kit".into(),
            ],
            Self::LockPoisoned => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::ManifestUnavailable { .. } => ErrorCategory::Validation,
            Self::ManifestNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
