//! Infrastructure adapters for kitgen.
//!
//! This crate implements the ports defined in `kitgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod manifest;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::{BuiltinManifest, TomlManifest};
