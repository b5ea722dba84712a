// ============================================================================
// domain/error.rs - MANIFEST ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for reporting after the fact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Entry path is empty")]
    EmptyPath,

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the base directory: {path}")]
    PathEscapesBase { path: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("Manifest '{name}' has no entries")]
    EmptyManifest { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyPath => vec!["Every manifest entry needs a non-empty `path`".into()],
            Self::AbsolutePathNotAllowed { path } | Self::PathEscapesBase { path } => vec![
                format!("'{}' would be written outside the output directory", path),
                "Use a path relative to the output directory, e.g. personas/analyst.md".into(),
            ],
            Self::EmptyManifest { name } => vec![
                format!("Manifest '{}' does not declare any files", name),
                "Add at least one [[entries]] table".into(),
            ],
        }
    }
}
