// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for kitgen.
//!
//! This module contains pure logic with no I/O. Reading manifests and
//! writing files are handled via ports (traits) defined in the application
//! layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Validated at construction**: a [`RelativePath`] can never point
//!   outside the base directory it is resolved against
pub mod entities;
pub mod error;

mod validation;

pub use entities::{
    common::RelativePath,
    manifest::{ContentEntry, Manifest, normalize_body},
};

pub use error::DomainError;
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_accepts_populated_manifest() {
        let manifest = Manifest::new("kit")
            .with_entry("personas/client_exec.md", "# Persona")
            .unwrap();
        assert!(DomainValidator::validate_manifest(&manifest).is_ok());
    }

    #[test]
    fn validator_rejects_empty_manifest() {
        let err = DomainValidator::validate_manifest(&Manifest::new("kit")).unwrap_err();
        assert!(err.to_string().contains("kit"));
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn escaping_path_suggestion_names_the_path() {
        let err = ContentEntry::new("../../etc/x.md", "x").unwrap_err();
        assert!(err.suggestions().iter().any(|s| s.contains("../../etc/x.md")));
    }
}
