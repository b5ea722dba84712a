//! Console output: confirmation lines, summaries and listings on stdout.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::{OwoColorize, Style};

use kitgen_core::application::ProgressReporter;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Leading glyph of a status line.
#[derive(Debug, Clone, Copy)]
enum Mark {
    Success,
    Warning,
    Info,
}

impl Mark {
    fn glyph(self) -> &'static str {
        match self {
            Mark::Success => "\u{2713}", // ✓
            Mark::Warning => "\u{26a0}", // ⚠
            Mark::Info => "\u{2139}",    // ℹ
        }
    }

    fn style(self) -> Style {
        match self {
            Mark::Success => Style::new().green(),
            Mark::Warning => Style::new().yellow(),
            Mark::Info => Style::new().blue(),
        }
    }
}

fn resolve_format(format: OutputFormat, is_terminal: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto if is_terminal => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        explicit => explicit,
    }
}

/// Whether a stream should carry ANSI styling.  Shared by stdout output and
/// the error report on stderr.
pub fn use_color(args: &GlobalArgs, config: &AppConfig, is_terminal: bool) -> bool {
    resolve_format(args.output_format, is_terminal) == OutputFormat::Human
        && !args.no_color
        && !config.output.no_color
}

/// Writes to stdout, honouring `--quiet` and colour settings.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let is_terminal = io::stdout().is_terminal();
        Self {
            format: resolve_format(args.output_format, is_terminal),
            quiet: args.quiet,
            color: use_color(args, config, is_terminal),
            term: Term::stdout(),
        }
    }

    /// Plain line; dropped in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Command result meant for pipes (JSON, CSV, bare paths).  Written even
    /// in quiet mode.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Mark::Success, msg)
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Mark::Warning, msg)
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Mark::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.print(&self.paint(text, Style::new().cyan().bold()))
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Resolved format, never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn status(&self, mark: Mark, msg: &str) -> io::Result<()> {
        self.print(&self.status_line(mark, msg))
    }

    fn status_line(&self, mark: Mark, msg: &str) -> String {
        let glyph = self.paint(mark.glyph(), mark.style().bold());
        format!("{glyph} {}", self.paint(msg, mark.style()))
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

impl ProgressReporter for OutputManager {
    fn file_written(&self, path: &Path) {
        if let Err(e) = self.success(&format!("Created: {}", path.display())) {
            tracing::warn!(path = %path.display(), error = %e, "Could not print confirmation");
        }
    }
}
