//! CLI error type, exit-code mapping and stderr rendering.

use std::error::Error as _;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use kitgen_core::error::{ErrorCategory as CoreCategory, KitError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument combinations clap cannot express.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration file could not be read, parsed, or serialised.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failure inside `kitgen-core` or one of its adapters.
    #[error("Command failed: {0}")]
    Core(#[from] KitError),

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Coarse classification driving the exit code and log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    /// | Category      | Code |
    /// |---------------|------|
    /// | Internal      |  1   |
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

/// How [`CliError::render`] decorates the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Include the `source()` chain and drop the `--verbose` hint.
    pub verbose: bool,
    /// Emit ANSI styling.
    pub color: bool,
}

impl CliError {
    /// `ConfigError` wrapping `source`.
    pub fn config(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => core.category().into(),
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// What the user can do about it.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["Use --help for usage information".into()],
            Self::ConfigError { .. } => vec![
                format!(
                    "Check the config file (default: {})",
                    crate::config::AppConfig::config_path().display()
                ),
                "Environment overrides use the KITGEN_ prefix, e.g. KITGEN_OUTPUT__BASE_DIR"
                    .into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check that stdout is still open".into()],
        }
    }

    /// Multi-line message for stderr: headline, optional cause chain,
    /// suggestions, and a `--verbose` hint when the chain was hidden.
    pub fn render(&self, opts: RenderOptions) -> String {
        let paint = |text: &str, style: Style| {
            if opts.color {
                text.style(style).to_string()
            } else {
                text.to_string()
            }
        };
        let alert = Style::new().red().bold();

        let mut out = format!(
            "\n{} {}\n",
            paint("\u{2717} Error:", alert), // ✗
            paint(&self.to_string(), Style::new().red())
        );

        if opts.verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {} {}\n",
                    paint("caused by:", Style::new().dimmed()),
                    err
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", Style::new().yellow().bold())
            ));
            for suggestion in &suggestions {
                out.push_str(&format!("  \u{2022} {suggestion}\n"));
            }
        }

        if !opts.verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Run with -v for the full error chain.", Style::new().dimmed())
            ));
        }

        out
    }

    /// Record the failure for `-vv` runs.  The user-facing report is
    /// [`render`](Self::render).
    pub fn log(&self) {
        tracing::debug!(category = ?self.category(), error = %self, "command failed");
    }
}

/// Attach a context message while converting into [`CliError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, KitError> {
    /// Core errors already name their path, so the context only goes to the
    /// debug log.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| {
            let context: String = f().into();
            tracing::debug!(%context, "core operation failed");
            CliError::Core(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    use kitgen_core::{application::ApplicationError, domain::DomainError};

    fn fs_error() -> CliError {
        CliError::Core(
            ApplicationError::FilesystemError {
                path: PathBuf::from("out/personas"),
                reason: "Not a directory".into(),
            }
            .into(),
        )
    }

    #[test]
    fn exit_codes_follow_category() {
        let invalid = CliError::InvalidInput {
            message: "x".into(),
            source: None,
        };
        let config = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        let missing = CliError::Core(
            ApplicationError::ManifestNotFound {
                path: PathBuf::from("kit.toml"),
            }
            .into(),
        );

        assert_eq!(fs_error().exit_code(), 1);
        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(config.exit_code(), 4);
        assert_eq!(CliError::from(io::Error::other("broken pipe")).exit_code(), 1);
    }

    #[test]
    fn invalid_manifest_path_is_user_error() {
        let err = CliError::Core(DomainError::AbsolutePathNotAllowed { path: "/etc".into() }.into());
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn plain_render_names_the_failing_path() {
        let s = fs_error().render(RenderOptions::default());
        assert!(s.contains("\u{2717} Error: Command failed"));
        assert!(!s.contains("Generation"));
        assert!(s.contains("out/personas"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("-v"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn verbose_render_shows_chain_without_hint() {
        let err = CliError::config("bad file", io::Error::other("unexpected token"));
        let s = err.render(RenderOptions {
            verbose: true,
            color: false,
        });
        assert!(s.contains("caused by: unexpected token"));
        assert!(!s.contains("Run with -v"));
    }

    #[test]
    fn colored_render_uses_ansi() {
        let s = fs_error().render(RenderOptions {
            verbose: false,
            color: true,
        });
        assert!(s.contains('\u{1b}'));
        assert!(s.contains("out/personas"));
    }

    #[test]
    fn into_cli_io_error_keeps_context() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { message, .. }) if message == "reading config"));
    }

    #[test]
    fn into_cli_core_error() {
        let result: Result<(), KitError> = Err(DomainError::EmptyPath.into());
        let cli = result.with_cli_context(|| "loading manifest");
        assert!(matches!(cli, Err(CliError::Core(_))));
    }
}
