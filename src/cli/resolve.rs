//! The `resolve` command: print each root's dependency-first closure.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::pipeline::Pipeline;
use crate::walk::TraversalReport;

use super::ResolverArgs;

/// Output format for the closure listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One path per line, roots separated by a blank line.
    Text,
    /// A JSON array with one object per root.
    Json,
}

/// Resolve one or more root files and print their closures.
///
/// Exits non-zero when any reference failed to resolve; the resolved part
/// of the closure is still printed so pipelines can decide their own
/// policy.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Root files to expand.
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    #[command(flatten)]
    resolver: ResolverArgs,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// JSON shape for one root's result.
#[derive(Serialize)]
struct RootListing {
    root: String,
    files: Vec<FileListing>,
    errors: Vec<String>,
}

#[derive(Serialize)]
struct FileListing {
    path: String,
    size: u64,
}

impl RootListing {
    fn from_report(report: &TraversalReport) -> Self {
        Self {
            root: report.root.display().to_string(),
            files: report
                .files
                .iter()
                .map(|f| FileListing {
                    path: f.path.display().to_string(),
                    size: f.size,
                })
                .collect(),
            errors: report.errors.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ResolveCommand {
    /// Execute the command.
    pub fn execute(self) -> Result<()> {
        let config = self.resolver.build_config()?;
        let pipeline = Pipeline::new(config);

        let mut reports = Vec::new();
        for file in &self.files {
            reports.push(pipeline.process_path(file)?);
        }

        match self.format {
            OutputFormat::Text => {
                for (i, report) in reports.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    for record in &report.files {
                        println!("{}", record.path.display());
                    }
                }
            }
            OutputFormat::Json => {
                let listings: Vec<RootListing> =
                    reports.iter().map(RootListing::from_report).collect();
                println!("{}", serde_json::to_string_pretty(&listings)?);
            }
        }

        finish(&reports)
    }
}

/// Print collected resolution errors and map them to the exit status.
pub(super) fn finish(reports: &[TraversalReport]) -> Result<()> {
    let mut total = 0;
    for report in reports {
        for error in &report.errors {
            eprintln!("{} {error}", "error:".red().bold());
            total += 1;
        }
    }
    if total > 0 {
        anyhow::bail!("{total} reference(s) failed to resolve");
    }
    Ok(())
}
