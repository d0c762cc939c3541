//! depclose - annotation-driven dependency closure resolution
//!
//! Source files declare what they depend on with inline textual
//! annotations, typically comment banners:
//!
//! ```text
//! /**
//!  * @requires libs/util.js
//!  */
//! ```
//!
//! depclose expands a root file into its full dependency closure, ordered
//! so that dependencies precede dependents, for downstream concatenation
//! or bundling. Annotations are found by pattern matching against the raw
//! file text - there is no syntax-aware parsing, so the same machinery
//! works for any source language by swapping the pattern.
//!
//! # Architecture
//!
//! The resolution engine is a small set of collaborating pieces:
//!
//! - [`extract`] - scans file content for references with a configurable
//!   single-capture-group pattern
//! - [`resolve`] - the pluggable [`PathResolver`](resolve::PathResolver)
//!   capability: relative resolution by default, a search-path /
//!   extension-globbing / main-file resolver for advanced setups, or any
//!   caller-supplied closure
//! - [`graph`] - the per-traversal dependency graph used purely for
//!   circular-reference detection
//! - [`walk`] - the recursive traversal engine producing the
//!   deduplicated, dependency-first file list plus out-of-band errors
//! - [`pipeline`] - the per-root driver with a shared read-only content
//!   cache and pass-through handling
//! - [`config`] - the validated configuration surface
//! - [`core`] - errors, file records, and the storage provider seam
//! - [`cli`] - the `resolve`, `bundle`, and `tree` commands
//!
//! # Concurrency model
//!
//! Traversal is single-threaded and synchronous per root: one call to
//! [`Pipeline::process`](pipeline::Pipeline::process) completes fully,
//! including all filesystem reads and glob evaluations, before returning.
//! Every root gets private traversal state (visited set and graph), so
//! independent roots can be expanded concurrently; the only shared
//! structure is the immutable-after-insert content cache.
//!
//! # Example
//!
//! ```rust,no_run
//! use depclose::config::ResolveConfig;
//! use depclose::pipeline::Pipeline;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ResolveConfig::new().ignore_circular_dependencies(false);
//! let pipeline = Pipeline::new(config);
//!
//! let report = pipeline.process_path(Path::new("src/main.js"))?;
//! for record in &report.files {
//!     println!("{}", record.path.display());
//! }
//! for error in &report.errors {
//!     eprintln!("{error}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod extract;
pub mod graph;
pub mod pipeline;
pub mod resolve;
pub mod walk;
