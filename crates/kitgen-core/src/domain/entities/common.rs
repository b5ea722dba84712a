use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay beneath the base directory it is
/// joined onto.
///
/// Invariant: non-empty, never absolute, no `..` components. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let display = path.display().to_string();

        if path.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }
        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed { path: display });
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(DomainError::PathEscapesBase { path: display });
        }

        // `CurDir` components carry no meaning once joined; drop them so
        // `./a.md` and `a.md` compare equal.
        let normalized: PathBuf = path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        if normalized.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }

        Ok(Self(normalized))
    }

    /// Resolve against a base directory.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        base.join(&self.0)
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }

    /// The directory part, if the path is nested (`personas/x.md` -> `personas`).
    pub fn parent(&self) -> Option<&Path> {
        self.0.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for RelativePath {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl From<RelativePath> for String {
    fn from(p: RelativePath) -> Self {
        p.0.to_string_lossy().into_owned()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_nested_paths_are_accepted() {
        assert!(RelativePath::try_new("security_privacy.md").is_ok());
        let nested = RelativePath::try_new("personas/client_exec.md").unwrap();
        assert_eq!(nested.parent(), Some(Path::new("personas")));
    }

    #[test]
    fn top_level_file_has_no_parent() {
        let p = RelativePath::try_new("acceptance_tests.md").unwrap();
        assert_eq!(p.parent(), None);
    }

    #[test]
    fn absolute_path_is_rejected() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn parent_dir_component_is_rejected() {
        assert!(matches!(
            RelativePath::try_new("../outside.md"),
            Err(DomainError::PathEscapesBase { .. })
        ));
        assert!(matches!(
            RelativePath::try_new("personas/../../outside.md"),
            Err(DomainError::PathEscapesBase { .. })
        ));
    }

    #[test]
    fn empty_and_dot_paths_are_rejected() {
        assert_eq!(RelativePath::try_new(""), Err(DomainError::EmptyPath));
        assert_eq!(RelativePath::try_new("."), Err(DomainError::EmptyPath));
    }

    #[test]
    fn leading_cur_dir_is_dropped() {
        let a = RelativePath::try_new("./personas/a.md").unwrap();
        let b = RelativePath::try_new("personas/a.md").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn resolve_joins_onto_base() {
        let p = RelativePath::try_new("personas/client_exec.md").unwrap();
        assert_eq!(
            p.resolve(Path::new("/out")),
            PathBuf::from("/out/personas/client_exec.md")
        );
    }
}
