//! The `tree` command: render one root's dependency tree.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::pipeline::Pipeline;

use super::ResolverArgs;

/// Expand one root and print its dependency tree.
///
/// Files reached more than once (diamonds, tolerated cycles) are printed
/// where first encountered and marked `(*)` afterwards.
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Root file to expand.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    #[command(flatten)]
    resolver: ResolverArgs,
}

impl TreeCommand {
    /// Execute the command.
    pub fn execute(self) -> Result<()> {
        let config = self.resolver.build_config()?;
        let pipeline = Pipeline::new(config);

        let report = pipeline.process_path(&self.file)?;
        print!("{}", report.graph.to_tree_string(&report.root));

        super::resolve::finish(std::slice::from_ref(&report))
    }
}
