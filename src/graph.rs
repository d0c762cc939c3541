//! Dependency graph and cycle detection.
//!
//! The traversal engine records every requester → dependency edge it
//! follows in a [`DependencyGraph`] scoped to one root-file traversal.
//! The graph exists purely for cycle detection and reporting - it is not
//! used for ordering (the depth-first traversal itself produces the
//! dependency-first output), so it stays separate from the visited set.
//!
//! [`DependencyGraph::add_edge`] rejects an edge exactly when the
//! dependency already (transitively) requires the requester, including the
//! degenerate self-reference. On rejection the caller decides policy:
//! report a circular-dependency error, or in tolerant mode skip the
//! back-edge and move on.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};

/// Signal that adding an edge would close a cycle.
///
/// Carries both endpoints so the caller can build a
/// [`ResolveError::CircularDependency`](crate::core::ResolveError::CircularDependency)
/// with full context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleDetected {
    /// The requesting file.
    pub from: PathBuf,
    /// The dependency that already requires `from`.
    pub to: PathBuf,
}

/// Directed graph over file paths, accumulated across one traversal.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    graph: DiGraph<PathBuf, ()>,
    nodes: HashMap<PathBuf, NodeIndex>,
}

impl DependencyGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node for `path` if it is not present yet.
    fn ensure_node(&mut self, path: &Path) -> NodeIndex {
        if let Some(&index) = self.nodes.get(path) {
            index
        } else {
            let index = self.graph.add_node(path.to_path_buf());
            self.nodes.insert(path.to_path_buf(), index);
            index
        }
    }

    /// Record that `from` requires `to`.
    ///
    /// # Errors
    ///
    /// Returns [`CycleDetected`] when the edge would close a cycle, i.e.
    /// `to` already reaches `from` through recorded edges (`from == to`
    /// included). The edge is not recorded in that case.
    pub fn add_edge(&mut self, from: &Path, to: &Path) -> Result<(), CycleDetected> {
        if from == to {
            return Err(CycleDetected {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            });
        }

        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);

        if has_path_connecting(&self.graph, to_idx, from_idx, None) {
            return Err(CycleDetected {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            });
        }

        // Duplicate edges are harmless but pointless.
        if !self.graph.contains_edge(from_idx, to_idx) {
            self.graph.add_edge(from_idx, to_idx, ());
        }
        Ok(())
    }

    /// Direct dependencies of `path`, in edge-insertion order.
    pub fn direct_deps(&self, path: &Path) -> Vec<&Path> {
        let Some(&index) = self.nodes.get(path) else {
            return Vec::new();
        };
        // petgraph yields neighbors most-recently-added first; reverse to
        // get them back in the order the references appeared.
        let mut deps: Vec<&Path> =
            self.graph.neighbors(index).map(|idx| self.graph[idx].as_path()).collect();
        deps.reverse();
        deps
    }

    /// Number of distinct files seen in edges so far.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Render the subtree under `root` as an indented tree, marking
    /// already-printed files so cycles and diamonds terminate.
    pub fn to_tree_string(&self, root: &Path) -> String {
        let mut out = String::new();
        let mut printed = std::collections::HashSet::new();
        out.push_str(&root.display().to_string());
        out.push('\n');
        printed.insert(root.to_path_buf());
        self.render_children(root, "", &mut out, &mut printed);
        out
    }

    fn render_children(
        &self,
        node: &Path,
        prefix: &str,
        out: &mut String,
        printed: &mut std::collections::HashSet<PathBuf>,
    ) {
        let children = self.direct_deps(node);
        let last = children.len().saturating_sub(1);
        for (i, child) in children.into_iter().enumerate() {
            let connector = if i == last { "└── " } else { "├── " };
            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(&child.display().to_string());
            if printed.insert(child.to_path_buf()) {
                out.push('\n');
                let child_prefix = if i == last {
                    format!("{prefix}    ")
                } else {
                    format!("{prefix}│   ")
                };
                self.render_children(child, &child_prefix, out, printed);
            } else {
                out.push_str(" (*)\n");
            }
        }
    }
}
