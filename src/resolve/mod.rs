//! Path resolution - mapping raw references to filesystem paths.
//!
//! A reference like `libs/util.js` extracted from an annotation says
//! nothing about where that file lives. A [`PathResolver`] turns the
//! reference plus the requesting file into a concrete candidate path.
//!
//! Two resolvers ship with the crate:
//!
//! - [`RelativeResolver`] (default) - joins the reference onto the
//!   requesting file's directory, nothing else
//! - [`AdvancedResolver`] - searches external directories, globs over
//!   candidate extensions, and falls back to a conventional "main file"
//!   when a reference names a directory
//!
//! Callers can supply their own resolver; plain closures implement the
//! trait, which covers rewrite-style resolution (mapping module notation
//! to paths) as well as deliberate filtering via the skip sentinel.
//!
//! # The skip sentinel
//!
//! Returning `None` from [`PathResolver::resolve`] drops the reference
//! silently. This is the supported way to ignore specific dependencies:
//!
//! ```rust
//! use depclose::resolve::PathResolver;
//! use depclose::core::FileRecord;
//! use std::path::PathBuf;
//!
//! let skip_vendored = |reference: &str, requesting: &FileRecord| {
//!     if reference.starts_with("vendor/") {
//!         return None;
//!     }
//!     Some(requesting.dir().join(reference))
//! };
//!
//! let record = FileRecord::new("/src/app.js", "/src", Vec::new(), None);
//! assert_eq!(skip_vendored.resolve("vendor/x.js", &record), None);
//! assert_eq!(
//!     skip_vendored.resolve("util.js", &record),
//!     Some(PathBuf::from("/src/util.js"))
//! );
//! ```
//!
//! Resolvers do not check that the returned path exists (except where the
//! advanced resolver's algorithm requires it); a candidate that turns out
//! to be missing becomes a file-not-found error at the traversal layer.

mod advanced;

pub use advanced::AdvancedResolver;

use std::path::PathBuf;

use crate::core::FileRecord;

/// Capability for mapping a raw reference to a candidate path.
pub trait PathResolver: Send + Sync {
    /// Resolve `reference`, as extracted from `requesting`'s content, to a
    /// candidate path. `None` is the skip sentinel: the reference is
    /// deliberately ignored, with no error reported.
    fn resolve(&self, reference: &str, requesting: &FileRecord) -> Option<PathBuf>;
}

/// Closures with the right shape are resolvers.
impl<F> PathResolver for F
where
    F: Fn(&str, &FileRecord) -> Option<PathBuf> + Send + Sync,
{
    fn resolve(&self, reference: &str, requesting: &FileRecord) -> Option<PathBuf> {
        self(reference, requesting)
    }
}

/// Default resolver: join the reference onto the requesting file's
/// directory. Performs no existence checking of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeResolver;

impl PathResolver for RelativeResolver {
    fn resolve(&self, reference: &str, requesting: &FileRecord) -> Option<PathBuf> {
        Some(requesting.dir().join(reference))
    }
}
