//! Implementation of the `kitgen list` command.

use kitgen_core::{
    application::{EntryInfo, ManifestService},
    error::KitError,
};

use crate::{
    cli::{ListArgs, ListFormat},
    commands::manifest_source,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = ManifestService::new(manifest_source(args.manifest.as_deref()));
    let entries = service.list()?;

    match args.format {
        ListFormat::Table => {
            output.header(&format!(
                "{} ({} files):",
                service.source_name(),
                entries.len()
            ))?;
            let width = entries.iter().map(|e| e.path.len()).max().unwrap_or(0);
            for entry in &entries {
                output.print(&format!(
                    "  {:<width$}  {:>6}  {}",
                    entry.path,
                    entry.bytes,
                    entry.title.as_deref().unwrap_or("-"),
                ))?;
            }
        }

        ListFormat::List => {
            for entry in &entries {
                output.data(&entry.path)?;
            }
        }

        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(|e| {
                CliError::Core(KitError::Internal {
                    message: format!("Failed to serialise entries: {e}"),
                })
            })?;
            output.data(&json)?;
        }

        ListFormat::Csv => {
            for row in csv_rows(&entries) {
                output.data(&row)?;
            }
        }
    }

    Ok(())
}

fn csv_rows(entries: &[EntryInfo]) -> Vec<String> {
    std::iter::once("path,bytes,title".to_string())
        .chain(entries.iter().map(|e| {
            format!(
                "{},{},{}",
                csv_field(&e.path),
                e.bytes,
                csv_field(e.title.as_deref().unwrap_or(""))
            )
        }))
        .collect()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
