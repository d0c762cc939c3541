//! Pipeline driver - feeding roots through the resolver, one at a time.
//!
//! A [`Pipeline`] owns a [`ResolveConfig`] and a caching file provider and
//! processes any number of root files with it. Each root gets a completely
//! fresh traversal (its own visited set and dependency graph), so roots
//! never contaminate each other and could safely be processed from
//! separate threads. What *is* shared across roots is the read-only
//! content cache: a file read during one root's expansion is served from
//! memory for every later root that reaches it.
//!
//! Pass-through markers (records without contents) are forwarded untouched
//! and never expanded.
//!
//! With summary logging enabled ([`ResolveConfig::log`]), every root's
//! returned paths are emitted at `info` level, mirroring the classic
//! "files returned to stream" output of annotation-based bundlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use dashmap::DashMap;
use tracing::info;

use crate::config::ResolveConfig;
use crate::core::{DiskProvider, FileProvider, FileRecord, ResolveError, Result};
use crate::walk::{TraversalReport, Walker};

/// Entry in the cross-root content cache. Immutable after insert.
struct CacheEntry {
    contents: Arc<Vec<u8>>,
    modified: Option<SystemTime>,
}

/// A [`FileProvider`] decorator that caches file contents across reads.
///
/// The cache is keyed by path and immutable after insert, which makes it
/// safe to share between concurrently-expanding roots. The `base`
/// requested by each caller is applied to the cached contents, so cached
/// records still carry the right relative naming per root.
pub struct CachingProvider<P: FileProvider> {
    inner: P,
    cache: DashMap<PathBuf, CacheEntry>,
}

impl<P: FileProvider> CachingProvider<P> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    /// Number of files currently cached.
    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }
}

impl<P: FileProvider> FileProvider for CachingProvider<P> {
    fn read(&self, path: &Path, base: &Path) -> Result<FileRecord> {
        if let Some(entry) = self.cache.get(path) {
            return Ok(FileRecord::from_shared(
                path,
                base,
                Arc::clone(&entry.contents),
                entry.modified,
            ));
        }

        let record = self.inner.read(path, base)?;
        if let Some(contents) = record.shared_contents() {
            self.cache.insert(
                path.to_path_buf(),
                CacheEntry {
                    contents,
                    modified: record.modified,
                },
            );
        }
        Ok(record)
    }

    fn exists(&self, path: &Path) -> bool {
        self.cache.contains_key(path) || self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }
}

/// Per-root driver over a configuration and a (caching) provider.
pub struct Pipeline<P: FileProvider = DiskProvider> {
    config: ResolveConfig,
    provider: CachingProvider<P>,
}

impl Pipeline<DiskProvider> {
    /// Create a pipeline over the local filesystem.
    #[must_use]
    pub fn new(config: ResolveConfig) -> Self {
        Self::with_provider(config, DiskProvider)
    }
}

impl<P: FileProvider> Pipeline<P> {
    /// Create a pipeline over a custom provider.
    pub fn with_provider(config: ResolveConfig, provider: P) -> Self {
        Self {
            config,
            provider: CachingProvider::new(provider),
        }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Process one root record.
    ///
    /// Pass-through markers come back as a single-entry report untouched;
    /// anything else is expanded into its dependency closure. Resolution
    /// errors are carried in the report, never returned as `Err`.
    pub fn process(&self, root: FileRecord) -> TraversalReport {
        if root.is_passthrough() {
            let path = root.path.clone();
            return TraversalReport {
                root: path,
                files: vec![root],
                errors: Vec::new(),
                graph: crate::graph::DependencyGraph::new(),
            };
        }

        let walker = Walker::new(&self.config, &self.provider);
        let report = walker.expand_root(root);

        if self.config.log_enabled() {
            let returned: Vec<String> =
                report.files.iter().map(|f| f.path.display().to_string()).collect();
            info!(
                root = %report.root.display(),
                "files returned to stream: [{}]",
                returned.join(", ")
            );
        }
        report
    }

    /// Read a root from storage and process it.
    ///
    /// The path is canonicalized so records are identified by absolute
    /// path; the root's base is its containing directory.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::FileNotFound`] when the root itself is
    /// missing, or [`ResolveError::Io`] when it cannot be read. Errors
    /// for the root's *dependencies* are in the report instead.
    pub fn process_path(&self, path: &Path) -> Result<TraversalReport> {
        if !self.provider.exists(path) {
            return Err(ResolveError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let absolute = std::fs::canonicalize(path).map_err(|source| ResolveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base = absolute.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        let root = self.provider.read(&absolute, &base)?;
        Ok(self.process(root))
    }
}
