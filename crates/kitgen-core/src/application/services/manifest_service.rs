//! Manifest Service - manifest queries.
//!
//! Separated from ScaffoldService: listing a kit never needs a filesystem.

use serde::Serialize;

use crate::{
    application::ports::ManifestSource,
    domain::ContentEntry,
    error::KitResult,
};

/// Information about one manifest entry for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    pub path: String,
    /// First markdown heading, without the leading `#`s.
    pub title: Option<String>,
    /// Size of the normalised body in bytes.
    pub bytes: usize,
}

impl From<&ContentEntry> for EntryInfo {
    fn from(entry: &ContentEntry) -> Self {
        let body = entry.normalized_body();
        let title = body
            .lines()
            .map(str::trim)
            .find(|l| l.starts_with('#'))
            .map(|l| l.trim_start_matches('#').trim().to_string())
            .filter(|t| !t.is_empty());

        Self {
            path: entry.path.to_string(),
            title,
            bytes: body.len(),
        }
    }
}

/// Service for manifest operations.
pub struct ManifestService {
    source: Box<dyn ManifestSource>,
}

impl ManifestService {
    /// Create a new manifest service.
    pub fn new(source: Box<dyn ManifestSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Describe every entry, in write order.
    pub fn list(&self) -> KitResult<Vec<EntryInfo>> {
        let manifest = self.source.load()?;
        Ok(manifest.iter().map(EntryInfo::from).collect())
    }
}
