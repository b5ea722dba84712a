use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Normalise a body for writing: surrounding whitespace stripped, exactly one
/// trailing newline appended.
pub fn normalize_body(body: &str) -> String {
    let trimmed = body.trim();
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push_str(trimmed);
    out.push('\n');
    out
}

/// One file to materialise: a relative path and its literal body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub path: RelativePath,
    pub body: String,
}

impl ContentEntry {
    pub fn new(path: impl AsRef<str>, body: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            path: RelativePath::try_new(path.as_ref())?,
            body: body.into(),
        })
    }

    /// The exact bytes that will land on disk.
    pub fn normalized_body(&self) -> String {
        normalize_body(&self.body)
    }
}

/// Ordered set of entries for one scaffolding run.
///
/// Insertion order is write order. Paths are expected to be distinct; when
/// they are not, every entry is still written and the last one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    name: String,
    entries: Vec<ContentEntry>,
}

impl Manifest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ContentEntry) {
        self.entries.push(entry);
    }

    /// Builder-style helper; validates the path.
    pub fn with_entry(
        mut self,
        path: impl AsRef<str>,
        body: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.push(ContentEntry::new(path, body)?);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct target paths, i.e. files present after a run.
    pub fn distinct_paths(&self) -> usize {
        self.entries
            .iter()
            .map(|e| &e.path)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Paths that appear more than once, in first-repeat order.
    pub fn duplicate_paths(&self) -> Vec<&RelativePath> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut dups = Vec::new();
        for entry in &self.entries {
            if !seen.insert(&entry.path) && reported.insert(&entry.path) {
                dups.push(&entry.path);
            }
        }
        dups
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyManifest {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ContentEntry;
    type IntoIter = std::slice::Iter<'a, ContentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
