//! Domain and application layers of kitgen.
//!
//! A kit is a [`Manifest`](domain::Manifest): an ordered list of
//! `(relative path, markdown body)` entries.  [`ScaffoldService`] writes one
//! under a base directory through the [`Filesystem`] port, normalising each
//! body to its trimmed text plus a single newline.  Nothing in this crate
//! touches the disk; `kitgen-adapters` supplies the real filesystem and the
//! built-in kit, and `kitgen-cli` drives it all.
//!
//! ```text
//!   kitgen-cli ──▶ ScaffoldService / ManifestService
//!                        │
//!                        ▼ ports
//!        Filesystem · ManifestSource · ProgressReporter
//!                        ▲
//!                        │ implemented by
//!                  kitgen-adapters
//! ```
//!
//! ```rust,ignore
//! use kitgen_adapters::{BuiltinManifest, LocalFilesystem};
//! use kitgen_core::prelude::*;
//!
//! let service = ScaffoldService::new(
//!     Box::new(BuiltinManifest::acme_pharmacy()),
//!     Box::new(LocalFilesystem::new()),
//! );
//! let report = service.scaffold("./acme-pharmacy-analytics-spec", &NoopReporter)?;
//! assert_eq!(report.files_created, 20);
//! ```
//!
//! [`ScaffoldService`]: application::ScaffoldService
//! [`Filesystem`]: application::Filesystem

pub mod application;
pub mod domain;
pub mod error;

/// Everything a driver needs in one import.
pub mod prelude {
    pub use crate::application::{
        EntryInfo, ManifestService, NoopReporter, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, ManifestSource, ProgressReporter},
    };
    pub use crate::domain::{ContentEntry, Manifest, RelativePath, normalize_body};
    pub use crate::error::{KitError, KitResult};
}
