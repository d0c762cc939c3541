//! Command-line interface for depclose.
//!
//! Each command is implemented in its own module with its own argument
//! struct and execution logic:
//!
//! - `resolve` - print the dependency-first closure for one or more roots
//! - `bundle` - concatenate each root's closure into an output file
//! - `tree` - render one root's dependency tree
//!
//! All commands share the same resolution flags ([`ResolverArgs`]): the
//! annotation pattern, cycle tolerance, include/exclude filters, and the
//! advanced resolver's search paths, extensions, and main files.
//!
//! # Usage
//!
//! ```bash
//! # Print the closure of main.js, dependency-first
//! depclose resolve src/main.js
//!
//! # Concatenate into a bundle
//! depclose bundle src/main.js --output dist/bundle.js
//!
//! # Custom annotation pattern and search paths
//! depclose resolve app.scss \
//!     --pattern '@import "(.*)"' \
//!     --search-path '*=node_modules' \
//!     --extension .scss --extension .css \
//!     --main-file index.scss
//!
//! # Show the dependency tree
//! depclose tree src/main.js
//! ```

mod bundle;
mod resolve;
mod tree;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::ResolveConfig;
use crate::resolve::{AdvancedResolver, RelativeResolver};

/// Top-level CLI parser.
#[derive(Parser)]
#[command(name = "depclose", version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to RUST_LOG=debug).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the dependency-first closure of each input file.
    Resolve(resolve::ResolveCommand),

    /// Concatenate each input's closure into a single output file.
    Bundle(bundle::BundleCommand),

    /// Render the dependency tree of one input file.
    Tree(tree::TreeCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Initializes logging from the verbosity flags and `RUST_LOG`, then
    /// dispatches to the subcommand.
    pub fn execute(self) -> Result<()> {
        self.init_logging();
        match self.command {
            Commands::Resolve(cmd) => cmd.execute(),
            Commands::Bundle(cmd) => cmd.execute(),
            Commands::Tree(cmd) => cmd.execute(),
        }
    }

    fn init_logging(&self) {
        use tracing_subscriber::EnvFilter;

        let default_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        // A subscriber may already be installed (e.g. in tests); that is fine.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Resolution flags shared by all commands.
#[derive(Args, Debug)]
pub struct ResolverArgs {
    /// Annotation pattern: a regex with exactly one capture group yielding
    /// the raw reference. Defaults to the `@requires` banner pattern.
    #[arg(long, value_name = "REGEX")]
    pattern: Option<String>,

    /// Skip detected circular references instead of reporting them.
    #[arg(long)]
    ignore_circular_dependencies: bool,

    /// Only follow references whose resolved path matches one of these
    /// globs. May be repeated.
    #[arg(long, value_name = "GLOB")]
    include: Vec<String>,

    /// Drop references whose resolved path matches one of these globs.
    /// May be repeated.
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Search-path entry for the advanced resolver, as
    /// `REFERENCE_GLOB=DIR[,DIR...]`. May be repeated; entries are
    /// consulted in the order given.
    #[arg(long = "search-path", value_name = "GLOB=DIR[,DIR...]")]
    search_paths: Vec<String>,

    /// Candidate extension for references without one, in priority order.
    /// May be repeated. Implies the advanced resolver.
    #[arg(long = "extension", value_name = "EXT")]
    extensions: Vec<String>,

    /// Filename probed when a reference resolves to a directory, in order.
    /// May be repeated. Implies the advanced resolver.
    #[arg(long = "main-file", value_name = "NAME")]
    main_files: Vec<String>,

    /// Log a summary of all paths returned for each root.
    #[arg(long)]
    log: bool,
}

impl ResolverArgs {
    /// Build a [`ResolveConfig`] from the flags.
    ///
    /// The advanced resolver is used when any of its options are present;
    /// otherwise resolution stays plain relative.
    pub fn build_config(&self) -> Result<ResolveConfig> {
        let mut config = ResolveConfig::new();
        if let Some(pattern) = &self.pattern {
            config = config.with_pattern(pattern)?;
        }
        config = config
            .ignore_circular_dependencies(self.ignore_circular_dependencies)
            .log(self.log)
            .include(&self.include)?
            .exclude(&self.exclude)?;

        let advanced = !self.search_paths.is_empty()
            || !self.extensions.is_empty()
            || !self.main_files.is_empty();
        if advanced {
            let mut resolver = AdvancedResolver::new()
                .extensions(self.extensions.clone())
                .main_files(self.main_files.clone());
            for entry in &self.search_paths {
                let (pattern, dirs) = parse_search_path(entry)?;
                resolver = resolver.search_path(pattern, dirs)?;
            }
            config = config.with_resolver(resolver);
        } else {
            config = config.with_resolver(RelativeResolver);
        }
        Ok(config)
    }
}

/// Parse a `GLOB=DIR[,DIR...]` search-path entry.
fn parse_search_path(entry: &str) -> Result<(&str, Vec<PathBuf>)> {
    let (pattern, dirs) = entry
        .split_once('=')
        .with_context(|| format!("invalid search path '{entry}': expected GLOB=DIR[,DIR...]"))?;
    let dirs: Vec<PathBuf> = dirs
        .split(',')
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .collect();
    if dirs.is_empty() {
        anyhow::bail!("invalid search path '{entry}': no directories given");
    }
    Ok((pattern, dirs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_path_single_dir() {
        let (pattern, dirs) = parse_search_path("*=node_modules").unwrap();
        assert_eq!(pattern, "*");
        assert_eq!(dirs, vec![PathBuf::from("node_modules")]);
    }

    #[test]
    fn test_parse_search_path_multiple_dirs() {
        let (pattern, dirs) = parse_search_path("lib/*=vendor,third_party").unwrap();
        assert_eq!(pattern, "lib/*");
        assert_eq!(
            dirs,
            vec![PathBuf::from("vendor"), PathBuf::from("third_party")]
        );
    }

    #[test]
    fn test_parse_search_path_rejects_missing_separator() {
        assert!(parse_search_path("no-equals-sign").is_err());
        assert!(parse_search_path("glob=").is_err());
    }

    #[test]
    fn test_build_config_rejects_bad_pattern() {
        let args = ResolverArgs {
            pattern: Some("(broken".to_string()),
            ignore_circular_dependencies: false,
            include: Vec::new(),
            exclude: Vec::new(),
            search_paths: Vec::new(),
            extensions: Vec::new(),
            main_files: Vec::new(),
            log: false,
        };
        assert!(args.build_config().is_err());
    }

    #[test]
    fn test_cli_parses_resolve_command() {
        let cli = Cli::try_parse_from([
            "depclose",
            "resolve",
            "main.js",
            "--extension",
            ".js",
            "--search-path",
            "*=libs",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Resolve(_)));
    }
}
