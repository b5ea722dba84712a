//! Application layer for kitgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ManifestService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no manifest
//! rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    EntryInfo, // DTO for entry listings
    ManifestService,
    PlannedWrite,
    ScaffoldReport,
    ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ManifestSource, NoopReporter, ProgressReporter};

pub use error::ApplicationError;
