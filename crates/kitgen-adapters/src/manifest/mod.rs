//! Manifest sources.

mod builtin;
mod toml_file;

pub use builtin::{ACME_PHARMACY, BuiltinManifest};
pub use toml_file::TomlManifest;
