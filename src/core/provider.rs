//! File-content provider - the storage seam consumed by the traversal engine.
//!
//! The resolver core never touches `std::fs` directly for file loads; it
//! goes through [`FileProvider`] so tests can substitute instrumented or
//! in-memory providers. [`DiskProvider`] is the default implementation
//! backed by the local filesystem.

use std::fs;
use std::path::Path;

use super::error::{ResolveError, Result};
use super::record::FileRecord;

/// Storage abstraction for reading file contents and checking existence.
///
/// All operations are blocking; traversal is synchronous per root (see the
/// crate-level docs). Implementations must be usable from multiple root
/// traversals at once, hence `Send + Sync`.
pub trait FileProvider: Send + Sync {
    /// Read a file into a [`FileRecord`], capturing contents and stat data.
    ///
    /// `base` is inherited from the requesting file and carried through for
    /// relative output naming.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Io`] when the read fails.
    fn read(&self, path: &Path, base: &Path) -> Result<FileRecord>;

    /// Whether `path` exists on storage.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Default provider backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskProvider;

impl FileProvider for DiskProvider {
    fn read(&self, path: &Path, base: &Path) -> Result<FileRecord> {
        let contents = fs::read(path).map_err(|source| ResolveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let modified = fs::metadata(path).ok().and_then(|m| m.modified().ok());
        Ok(FileRecord::new(path, base, contents, modified))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
