//! Command handlers, one module per subcommand.

use std::path::Path;

use kitgen_adapters::{BuiltinManifest, TomlManifest};
use kitgen_core::application::ManifestSource;

pub mod completions;
pub mod config;
pub mod generate;
pub mod list;

/// `--manifest FILE` when given, the built-in ACME kit otherwise.
pub(crate) fn manifest_source(manifest: Option<&Path>) -> Box<dyn ManifestSource> {
    match manifest {
        Some(path) => Box::new(TomlManifest::from_path(path)),
        None => Box::new(BuiltinManifest::acme_pharmacy()),
    }
}
