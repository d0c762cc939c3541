//! The `bundle` command: concatenate closures into one output file.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::pipeline::Pipeline;

use super::ResolverArgs;

/// Expand one or more roots and write their concatenated contents,
/// dependency-first, to the output file.
///
/// A file reached from several roots is written once, on first
/// encounter - bundling the same library twice is never what anyone
/// wants.
#[derive(Args, Debug)]
pub struct BundleCommand {
    /// Root files to expand and bundle.
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    #[command(flatten)]
    resolver: ResolverArgs,

    /// Path of the bundle to write.
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

impl BundleCommand {
    /// Execute the command.
    pub fn execute(self) -> Result<()> {
        let config = self.resolver.build_config()?;
        let pipeline = Pipeline::new(config);

        let mut reports = Vec::new();
        for file in &self.files {
            reports.push(pipeline.process_path(file)?);
        }

        let mut bundle: Vec<u8> = Vec::new();
        let mut written: HashSet<PathBuf> = HashSet::new();
        let mut count = 0usize;
        for report in &reports {
            for record in &report.files {
                if !written.insert(record.path.clone()) {
                    continue;
                }
                bundle.extend_from_slice(record.contents());
                // Keep concatenation newline-safe without doubling up.
                if !record.contents().ends_with(b"\n") {
                    bundle.push(b'\n');
                }
                count += 1;
            }
        }

        if let Some(parent) = self.output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&self.output, &bundle)
            .with_context(|| format!("failed to write {}", self.output.display()))?;

        println!(
            "{} {} file(s) into {}",
            "Bundled".green().bold(),
            count,
            self.output.display()
        );

        super::resolve::finish(&reports)
    }
}
