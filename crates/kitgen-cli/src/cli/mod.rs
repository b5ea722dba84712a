//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::{CliError, CliResult};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Running `kitgen` with no subcommand is the same as `kitgen generate`.
#[derive(Debug, Parser)]
#[command(
    name    = "kitgen",
    bin_name = "kitgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4c4} Spec kit scaffolding",
    long_about = "kitgen writes the ACME Pharmacy Analytics specification kit \
                  (personas, user stories, requirements, acceptance tests) \
                  to a directory tree.",
    after_help = "EXAMPLES:\n\
        \x20 kitgen\n\
        \x20 kitgen --output ./docs/spec\n\
        \x20 kitgen generate --manifest my-kit.toml --dry-run\n\
        \x20 kitgen list --format json",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments for the implicit `generate` run.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute (defaults to `generate`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, falling back to `generate` with the top-level
    /// arguments.  Top-level generate arguments combined with an explicit
    /// subcommand are rejected.
    pub fn into_command(self) -> CliResult<(GlobalArgs, Commands)> {
        match self.command {
            None => Ok((self.global, Commands::Generate(self.generate))),
            Some(_) if self.generate != GenerateArgs::default() => Err(CliError::InvalidInput {
                message: "--output, --manifest and --dry-run go after the subcommand \
                          (e.g. `kitgen generate --output DIR`)"
                    .into(),
                source: None,
            }),
            Some(command) => Ok((self.global, command)),
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the spec kit to disk.
    #[command(
        visible_alias = "gen",
        about = "Write the spec kit to disk (default)",
        after_help = "EXAMPLES:\n\
            \x20 kitgen generate\n\
            \x20 kitgen generate --output ./spec\n\
            \x20 kitgen generate --manifest my-kit.toml --dry-run"
    )]
    Generate(GenerateArgs),

    /// List the files a kit declares.
    #[command(
        visible_alias = "ls",
        about = "List the files in a kit",
        after_help = "EXAMPLES:\n\
            \x20 kitgen list\n\
            \x20 kitgen list --format csv\n\
            \x20 kitgen list --manifest my-kit.toml"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kitgen completions bash > ~/.local/share/bash-completion/completions/kitgen\n\
            \x20 kitgen completions zsh  > ~/.zfunc/_kitgen\n\
            \x20 kitgen completions fish > ~/.config/fish/completions/kitgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the kitgen configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kitgen config get output.base_dir\n\
            \x20 kitgen config list\n\
            \x20 kitgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `kitgen generate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct GenerateArgs {
    /// Directory the kit is written under.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: ./acme-pharmacy-analytics-spec)"
    )]
    pub output: Option<PathBuf>,

    /// Manifest file to use instead of the built-in kit.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "TOML manifest to scaffold instead of the built-in kit"
    )]
    pub manifest: Option<PathBuf>,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `kitgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Manifest file to list instead of the built-in kit.
    #[arg(short = 'm', long = "manifest", value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kitgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kitgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.base_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
