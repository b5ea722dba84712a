//! Implementation of `kitgen generate`, also the zero-argument run.

use std::{io, path::Path};

use tracing::{info, instrument};

use kitgen_adapters::LocalFilesystem;
use kitgen_core::application::{PlannedWrite, ScaffoldService};

use crate::{
    cli::GenerateArgs,
    commands::manifest_source,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const RULE_WIDTH: usize = 60;

/// Write the kit under the resolved base directory and print the summary.
///
/// The base directory is `--output`, else `output.base_dir` from config
/// (file or `KITGEN_OUTPUT__BASE_DIR`), else `./acme-pharmacy-analytics-spec`.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let base_dir = args.output.unwrap_or(config.output.base_dir);

    let service = ScaffoldService::new(
        manifest_source(args.manifest.as_deref()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let plan = service
            .plan(&base_dir)
            .with_cli_context(|| "planning generation")?;
        print_plan(&output, &base_dir, &plan, service.base_exists(&base_dir))?;
        return Ok(());
    }

    if service.base_exists(&base_dir) {
        info!(base_dir = %base_dir.display(), "Output directory exists; files will be overwritten");
    }

    let report = service
        .scaffold(&base_dir, &output)
        .with_cli_context(|| format!("generating into {}", base_dir.display()))?;

    print_summary(&output, &base_dir, report.files_created)?;
    Ok(())
}

/// Closing block printed after a successful run.
fn print_summary(output: &OutputManager, base_dir: &Path, files_created: usize) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    output.print("")?;
    output.print(&rule)?;
    output.success("Spec Kit Generation Complete!")?;
    output.print(&rule)?;
    output.print("")?;
    output.print(&format!("Total files created: {files_created}"))?;
    output.print("")?;
    for line in next_steps(base_dir) {
        output.print(&line)?;
    }
    output.print(&rule)
}

fn next_steps(base_dir: &Path) -> [String; 4] {
    [
        "Next steps:".to_string(),
        "1. Review all generated files for completeness".to_string(),
        format!("2. Run: ls -R {}/ to see full structure", base_dir.display()),
        "3. Customize content as needed for your specific demo".to_string(),
    ]
}

fn print_plan(
    output: &OutputManager,
    base_dir: &Path,
    plan: &[PlannedWrite],
    base_exists: bool,
) -> io::Result<()> {
    output.header(&format!(
        "Dry run: {} writes under {}",
        plan.len(),
        base_dir.display()
    ))?;
    for line in plan_lines(plan) {
        output.print(&line)?;
    }
    if base_exists {
        output.warning(&format!(
            "{} already exists; existing files would be overwritten",
            base_dir.display()
        ))?;
    }
    output.info("Nothing was written.")
}

fn plan_lines(plan: &[PlannedWrite]) -> Vec<String> {
    plan.iter()
        .map(|write| {
            let mut line = format!("  {} ({} bytes)", write.target.display(), write.bytes);
            if write.overwritten_later {
                line.push_str(" [replaced by a later entry]");
            }
            line
        })
        .collect()
}
