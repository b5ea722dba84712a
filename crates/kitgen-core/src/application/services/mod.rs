//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "materialise this kit" or "list its files".

pub mod manifest_service;
pub mod scaffold_service;

pub use manifest_service::{EntryInfo, ManifestService};
pub use scaffold_service::{PlannedWrite, ScaffoldReport, ScaffoldService};
