//! Traversal engine - recursive expansion of a root file into its
//! dependency closure.
//!
//! [`Walker::expand_root`] drives one root file through extraction,
//! resolution, graph recording, and recursion, producing a
//! [`TraversalReport`]: the deduplicated, dependency-first ordered file
//! list plus every error encountered along the way.
//!
//! # Algorithm
//!
//! For each file, depth-first:
//!
//! 1. Short-circuit if the path was already expanded in this traversal
//!    (diamond convergence, not an error).
//! 2. Extract references from the content, in document order.
//! 3. Per reference: resolve (skip sentinel drops it), apply the
//!    include/exclude filters, record the dependency edge (a detected
//!    cycle is skipped in tolerant mode or reported otherwise), check
//!    existence, then load and recurse into the child.
//! 4. Append the file itself after all its dependencies, which is what
//!    makes the output dependency-first.
//!
//! # Failure semantics
//!
//! `FileNotFound` and `CircularDependency` are collected out-of-band in
//! the report and never abort the traversal: the remaining references of
//! the same file and all other files keep being processed. Whether a
//! non-empty error list fails the whole run is the caller's policy.
//!
//! # State
//!
//! The visited set and the dependency graph are both scoped to one call
//! of [`Walker::expand_root`] - nothing is shared across roots, so
//! independent roots can be expanded concurrently. The two structures
//! stay separate on purpose: the visited set drives deduplication, the
//! graph exists only to detect cycles.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::config::ResolveConfig;
use crate::core::{FileProvider, FileRecord, ResolveError};
use crate::graph::DependencyGraph;

/// Outcome of expanding one root file.
#[derive(Debug)]
pub struct TraversalReport {
    /// Path of the root this report describes.
    pub root: PathBuf,
    /// Dependency-first ordered closure; the root itself is last. Every
    /// reachable file appears exactly once.
    pub files: Vec<FileRecord>,
    /// Errors collected out-of-band: missing files and detected cycles.
    pub errors: Vec<ResolveError>,
    /// The edge set accumulated during traversal, for tree rendering and
    /// diagnostics.
    pub graph: DependencyGraph,
}

impl TraversalReport {
    /// Whether the traversal finished without collecting any errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Per-traversal mutable state: the visited set, the accumulating output,
/// the edge set, and the error channel.
struct TraversalState {
    visited: HashSet<PathBuf>,
    output: Vec<FileRecord>,
    errors: Vec<ResolveError>,
    graph: DependencyGraph,
}

/// Recursive dependency expander over a configuration and a file provider.
///
/// A `Walker` holds no traversal state of its own; each
/// [`expand_root`](Self::expand_root) call gets a fresh visited set and
/// graph, so one walker can serve any number of roots.
pub struct Walker<'a, P: FileProvider> {
    config: &'a ResolveConfig,
    provider: &'a P,
}

impl<'a, P: FileProvider> Walker<'a, P> {
    /// Create a walker over `config` and `provider`.
    pub fn new(config: &'a ResolveConfig, provider: &'a P) -> Self {
        Self { config, provider }
    }

    /// Expand `root` into its full dependency closure.
    ///
    /// Always returns a report; resolution failures are carried in
    /// [`TraversalReport::errors`] rather than failing the call.
    pub fn expand_root(&self, root: FileRecord) -> TraversalReport {
        let root_path = root.path.clone();
        debug!("expanding root {}", root_path.display());

        let mut state = TraversalState {
            visited: HashSet::new(),
            output: Vec::new(),
            errors: Vec::new(),
            graph: DependencyGraph::new(),
        };
        self.expand(root, &mut state);

        debug!(
            "root {} expanded to {} file(s), {} error(s)",
            root_path.display(),
            state.output.len(),
            state.errors.len()
        );
        TraversalReport {
            root: root_path,
            files: state.output,
            errors: state.errors,
            graph: state.graph,
        }
    }

    fn expand(&self, file: FileRecord, state: &mut TraversalState) {
        if !state.visited.insert(file.path.clone()) {
            // Already expanded in this traversal; normal diamond
            // convergence, nothing to re-emit.
            trace!("{} already visited, skipping", file.path.display());
            return;
        }

        let references = self.config.extractor().extract(&file.contents_str());
        for reference in references {
            let Some(child) = self.config.resolver().resolve(&reference.raw, &file) else {
                trace!("reference '{}' skipped by resolver", reference.raw);
                continue;
            };

            if !self.config.follows(&child) {
                debug!("reference '{}' filtered out: {}", reference.raw, child.display());
                continue;
            }

            if let Err(cycle) = state.graph.add_edge(&file.path, &child) {
                if self.config.is_cycle_tolerant() {
                    debug!(
                        "tolerated circular reference {} -> {}",
                        cycle.from.display(),
                        cycle.to.display()
                    );
                } else {
                    state.errors.push(ResolveError::CircularDependency {
                        from: cycle.from,
                        to: cycle.to,
                    });
                }
                continue;
            }

            if !self.provider.exists(&child) {
                state.errors.push(ResolveError::FileNotFound { path: child });
                continue;
            }

            // Base is inherited from the requesting file so the whole
            // closure shares the root's relative naming.
            match self.provider.read(&child, &file.base) {
                Ok(record) => self.expand(record, state),
                Err(e) => state.errors.push(e),
            }
        }

        // Dependencies first, then the file itself.
        state.output.push(file);
    }
}
