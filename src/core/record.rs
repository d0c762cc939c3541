//! File records - the unit of data flowing through the resolver.
//!
//! A [`FileRecord`] is a snapshot of one file taken at read time: its
//! absolute path, raw contents, origin metadata (size and modification
//! time), and the base directory used for relative display naming.
//! Records are immutable once created; contents are shared behind an
//! [`Arc`] so cloning a record (for caching or re-emission) is cheap.
//!
//! A record without contents is a pass-through marker: the pipeline
//! forwards it downstream untouched and never expands it.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Immutable snapshot of one file as read from storage.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Absolute path of the file. This is the record's identity.
    pub path: PathBuf,
    /// Base directory used for relative output naming. Inherited from the
    /// requesting file when a record is created during traversal.
    pub base: PathBuf,
    /// Raw contents, or `None` for a pass-through marker.
    contents: Option<Arc<Vec<u8>>>,
    /// Size in bytes at read time.
    pub size: u64,
    /// Modification time at read time, when the platform reports one.
    pub modified: Option<SystemTime>,
}

impl FileRecord {
    /// Create a record from freshly-read contents and stat data.
    pub fn new(
        path: impl Into<PathBuf>,
        base: impl Into<PathBuf>,
        contents: Vec<u8>,
        modified: Option<SystemTime>,
    ) -> Self {
        let size = contents.len() as u64;
        Self {
            path: path.into(),
            base: base.into(),
            contents: Some(Arc::new(contents)),
            size,
            modified,
        }
    }

    /// Create a record from contents already shared elsewhere (e.g. a
    /// cross-root content cache), without copying them.
    pub fn from_shared(
        path: impl Into<PathBuf>,
        base: impl Into<PathBuf>,
        contents: Arc<Vec<u8>>,
        modified: Option<SystemTime>,
    ) -> Self {
        let size = contents.len() as u64;
        Self {
            path: path.into(),
            base: base.into(),
            contents: Some(contents),
            size,
            modified,
        }
    }

    /// The shared contents handle, `None` for pass-through markers.
    pub fn shared_contents(&self) -> Option<Arc<Vec<u8>>> {
        self.contents.clone()
    }

    /// Create a pass-through marker: a record with a path but no contents.
    ///
    /// The pipeline forwards these downstream without expansion.
    pub fn passthrough(path: impl Into<PathBuf>, base: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base: base.into(),
            contents: None,
            size: 0,
            modified: None,
        }
    }

    /// Whether this record is a pass-through marker (no contents).
    pub fn is_passthrough(&self) -> bool {
        self.contents.is_none()
    }

    /// Raw contents, empty for pass-through markers.
    pub fn contents(&self) -> &[u8] {
        self.contents.as_deref().map_or(&[], |c| c.as_slice())
    }

    /// Contents decoded as UTF-8, lossily. Binary files still scan fine;
    /// they simply tend to produce no annotation matches.
    pub fn contents_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.contents())
    }

    /// The directory containing this file. Relative references are joined
    /// against this.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Path relative to the record's base directory, for display. Falls
    /// back to the full path when the file lives outside its base.
    pub fn relative_name(&self) -> &Path {
        self.path.strip_prefix(&self.base).unwrap_or(&self.path)
    }
}
