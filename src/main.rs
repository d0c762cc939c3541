//! depclose CLI entry point.
//!
//! Parses command-line arguments, executes the command, and renders
//! failures through the user-friendly error layer before exiting
//! non-zero.

use anyhow::Result;
use clap::Parser;
use depclose::cli::Cli;
use depclose::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let ctx = user_friendly_error(e);
            ctx.display();
            std::process::exit(1);
        }
    }
}
