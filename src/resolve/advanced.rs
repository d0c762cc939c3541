//! Advanced path resolver: external search paths, extension globbing, and
//! directory main-file fallback.
//!
//! This resolver covers the cases the plain relative join cannot:
//!
//! - **Search paths**: references matching a glob pattern are looked up in
//!   an ordered list of external directories before falling back to the
//!   requesting file's directory (think `node_modules`-style lookup dirs)
//! - **Extension globbing**: a reference without an extension is expanded
//!   against an ordered candidate-extension list, so `@requires x` can find
//!   `x.scss` or `x.css`
//! - **Main files**: when a reference resolves to a directory, conventional
//!   filenames such as `index.scss` are probed inside it
//!
//! # Resolution order
//!
//! First success wins:
//!
//! 1. Each search-path entry whose glob matches the raw reference, in
//!    insertion order; within an entry, each directory in list order. The
//!    first extension-glob match (lexically sorted) is taken.
//! 2. Relative resolution against the requesting file's directory, with
//!    the same extension globbing.
//! 3. The plain relative-joined path, unmodified. Existence is checked
//!    later by the traversal engine and produces a file-not-found error.
//!
//! Whatever step produced the candidate, if it exists and is a directory
//! the configured main files are then probed in order; the first that
//! exists replaces the directory path.
//!
//! # Examples
//!
//! ```rust,no_run
//! use depclose::resolve::AdvancedResolver;
//! use std::path::PathBuf;
//!
//! # fn example() -> depclose::core::Result<()> {
//! let resolver = AdvancedResolver::new()
//!     .search_path("*", vec![PathBuf::from("/srv/styles/lib")])?
//!     .extensions([".scss", ".css"])
//!     .main_files(["index.scss"]);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::core::{FileRecord, ResolveError, Result};

use super::PathResolver;

/// Resolver with search paths, candidate extensions, and main-file
/// fallback. Construct with [`AdvancedResolver::new`] and the builder
/// methods; an empty configuration behaves like the relative resolver.
#[derive(Debug, Clone, Default)]
pub struct AdvancedResolver {
    /// Search-path entries in insertion order: a glob over raw references
    /// mapped to an ordered list of directories to look in.
    paths: Vec<(glob::Pattern, Vec<PathBuf>)>,
    /// Candidate extensions in priority order. Each entry is appended
    /// verbatim to the glob, so `".scss"` is a literal suffix and `"*"`
    /// matches any extension. Ignored entirely when the reference already
    /// carries an extension.
    extensions: Vec<String>,
    /// Filenames probed, in order, inside a resolved directory.
    main_files: Vec<String>,
}

impl AdvancedResolver {
    /// Create a resolver with no search paths, extensions, or main files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a search-path entry: references matching `pattern` are looked
    /// up in `dirs`, in order, before relative resolution. Entries are
    /// consulted in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidGlobPattern`] when `pattern` does
    /// not compile.
    pub fn search_path(mut self, pattern: &str, dirs: Vec<PathBuf>) -> Result<Self> {
        let compiled =
            glob::Pattern::new(pattern).map_err(|e| ResolveError::InvalidGlobPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        self.paths.push((compiled, dirs));
        Ok(self)
    }

    /// Set the candidate extensions, in priority order.
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the main files probed inside resolved directories, in order.
    #[must_use]
    pub fn main_files<I, S>(mut self, main_files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.main_files = main_files.into_iter().map(Into::into).collect();
        self
    }

    /// Glob-expand `base` against the candidate extensions and return all
    /// filesystem matches, lexically sorted.
    ///
    /// A base that already carries an extension disables the extension
    /// list entirely: only the exact path is looked up. With no configured
    /// extensions the exact path is looked up as well. Otherwise one glob
    /// per extension is evaluated and the merged results are sorted so
    /// ties break in lexical order.
    fn glob_with_extensions(&self, base: &Path) -> Vec<PathBuf> {
        let base_str = base.to_string_lossy();
        let has_extension = base.extension().is_some();

        let patterns: Vec<String> = if has_extension || self.extensions.is_empty() {
            vec![base_str.to_string()]
        } else {
            self.extensions
                .iter()
                .map(|ext| format!("{base_str}{ext}"))
                .collect()
        };

        let mut matches: Vec<PathBuf> = patterns
            .iter()
            .filter_map(|pattern| glob::glob(pattern).ok())
            .flatten()
            .filter_map(std::result::Result::ok)
            .collect();
        matches.sort();
        matches.dedup();
        trace!("glob over '{}' produced {} match(es)", base_str, matches.len());
        matches
    }

    /// Run the search-path and relative lookups; returns the winning
    /// candidate or the plain relative join when nothing matched.
    fn find_candidate(&self, reference: &str, requesting: &FileRecord) -> PathBuf {
        for (pattern, dirs) in &self.paths {
            if !pattern.matches(reference) {
                continue;
            }
            for dir in dirs {
                if let Some(found) = self.glob_with_extensions(&dir.join(reference)).into_iter().next() {
                    debug!(
                        "reference '{}' found in search path {}",
                        reference,
                        dir.display()
                    );
                    return found;
                }
            }
        }

        let relative = requesting.dir().join(reference);
        if let Some(found) = self.glob_with_extensions(&relative).into_iter().next() {
            return found;
        }

        // Unresolved. Hand back the relative join; the traversal engine
        // reports file-not-found if it still does not exist.
        relative
    }
}

impl PathResolver for AdvancedResolver {
    fn resolve(&self, reference: &str, requesting: &FileRecord) -> Option<PathBuf> {
        let candidate = self.find_candidate(reference, requesting);

        if candidate.is_dir() {
            for main_file in &self.main_files {
                let main_path = candidate.join(main_file);
                if main_path.exists() {
                    debug!(
                        "directory {} resolved to main file {}",
                        candidate.display(),
                        main_path.display()
                    );
                    return Some(main_path);
                }
            }
        }

        Some(candidate)
    }
}
