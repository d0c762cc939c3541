//! Resolution configuration.
//!
//! [`ResolveConfig`] gathers everything a traversal needs to know: the
//! annotation pattern, the path resolver, cycle tolerance, include/exclude
//! filters, and whether to log a summary of returned paths. All validation
//! happens at construction - a pattern without exactly one capture group or
//! a malformed filter glob fails immediately, never per file.
//!
//! # Examples
//!
//! ```rust
//! use depclose::config::ResolveConfig;
//! use depclose::resolve::RelativeResolver;
//!
//! # fn example() -> depclose::core::Result<()> {
//! let config = ResolveConfig::new()
//!     .with_pattern(r"// import (\S+)")?
//!     .with_resolver(RelativeResolver)
//!     .ignore_circular_dependencies(true)
//!     .exclude(["**/vendor/**"])?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;

use regex::Regex;

use crate::core::{ResolveError, Result};
use crate::extract::AnnotationExtractor;
use crate::resolve::{PathResolver, RelativeResolver};

/// Configuration for one resolver instance.
///
/// Defaults match the classic `@requires`-banner workflow: the
/// [`DEFAULT_PATTERN`](crate::extract::DEFAULT_PATTERN), the relative
/// resolver, strict cycle handling, no filters, no summary logging.
pub struct ResolveConfig {
    extractor: AnnotationExtractor,
    resolver: Box<dyn PathResolver>,
    ignore_circular_dependencies: bool,
    include: Vec<glob::Pattern>,
    exclude: Vec<glob::Pattern>,
    log: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            extractor: AnnotationExtractor::default(),
            resolver: Box::new(RelativeResolver),
            ignore_circular_dependencies: false,
            include: Vec::new(),
            exclude: Vec::new(),
            log: false,
        }
    }
}

impl ResolveConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the annotation pattern from a string.
    ///
    /// # Errors
    ///
    /// Fails when the pattern does not compile or does not carry exactly
    /// one capture group.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.extractor = AnnotationExtractor::from_pattern(pattern)?;
        Ok(self)
    }

    /// Set the annotation pattern from a pre-compiled regex.
    ///
    /// # Errors
    ///
    /// Fails when the regex does not carry exactly one capture group.
    pub fn with_regex(mut self, pattern: Regex) -> Result<Self> {
        self.extractor = AnnotationExtractor::new(pattern)?;
        Ok(self)
    }

    /// Replace the path resolver. Closures of the right shape work too.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl PathResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Tolerate circular references: detected back-edges are skipped
    /// silently instead of reported as errors. Default `false`.
    #[must_use]
    pub fn ignore_circular_dependencies(mut self, ignore: bool) -> Self {
        self.ignore_circular_dependencies = ignore;
        self
    }

    /// Restrict traversal to resolved paths matching at least one of these
    /// globs. References resolving elsewhere are left unfollowed, silently.
    ///
    /// # Errors
    ///
    /// Fails when any glob does not compile.
    pub fn include<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include = compile_globs(patterns)?;
        Ok(self)
    }

    /// Drop references whose resolved path matches any of these globs.
    ///
    /// # Errors
    ///
    /// Fails when any glob does not compile.
    pub fn exclude<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude = compile_globs(patterns)?;
        Ok(self)
    }

    /// Emit an `info`-level summary of every path returned for a root.
    #[must_use]
    pub fn log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    /// The configured extractor.
    pub fn extractor(&self) -> &AnnotationExtractor {
        &self.extractor
    }

    /// The configured resolver.
    pub fn resolver(&self) -> &dyn PathResolver {
        self.resolver.as_ref()
    }

    /// Whether detected cycles are tolerated (skipped) instead of reported.
    pub fn is_cycle_tolerant(&self) -> bool {
        self.ignore_circular_dependencies
    }

    /// Whether summary logging is enabled.
    pub fn log_enabled(&self) -> bool {
        self.log
    }

    /// Apply the include/exclude filters to a resolved path. Returns
    /// `true` when the reference should be followed.
    pub fn follows(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        if !self.include.is_empty() && !self.include.iter().any(|g| g.matches(&path_str)) {
            return false;
        }
        !self.exclude.iter().any(|g| g.matches(&path_str))
    }
}

impl fmt::Debug for ResolveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveConfig")
            .field("pattern", &self.extractor.pattern())
            .field("ignore_circular_dependencies", &self.ignore_circular_dependencies)
            .field("include", &self.include.iter().map(glob::Pattern::as_str).collect::<Vec<_>>())
            .field("exclude", &self.exclude.iter().map(glob::Pattern::as_str).collect::<Vec<_>>())
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

fn compile_globs<I, S>(patterns: I) -> Result<Vec<glob::Pattern>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| {
            glob::Pattern::new(p.as_ref()).map_err(|e| ResolveError::InvalidGlobPattern {
                pattern: p.as_ref().to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = ResolveConfig::new();
        assert!(!config.is_cycle_tolerant());
        assert!(!config.log_enabled());
        assert!(config.follows(Path::new("/anything/at/all.js")));
        assert_eq!(config.extractor().pattern(), crate::extract::DEFAULT_PATTERN);
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        assert!(ResolveConfig::new().with_pattern("(broken").is_err());
        assert!(ResolveConfig::new().with_pattern("no groups").is_err());
    }

    #[test]
    fn test_include_filter_only_follows_matches() {
        let config = ResolveConfig::new().include(["/src/**/*"]).unwrap();
        assert!(config.follows(Path::new("/src/libs/a.js")));
        assert!(!config.follows(Path::new("/vendor/b.js")));
    }

    #[test]
    fn test_exclude_filter_drops_matches() {
        let config = ResolveConfig::new().exclude(["**/vendor/**"]).unwrap();
        assert!(config.follows(Path::new("/src/a.js")));
        assert!(!config.follows(Path::new("/src/vendor/b.js")));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let config = ResolveConfig::new()
            .include(["/src/**"])
            .unwrap()
            .exclude(["/src/gen/**"])
            .unwrap();
        assert!(config.follows(Path::new("/src/a.js")));
        assert!(!config.follows(Path::new("/src/gen/b.js")));
    }

    #[test]
    fn test_invalid_filter_glob_fails_at_construction() {
        let err = ResolveConfig::new().include(["["]).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidGlobPattern { .. }));
    }

    #[test]
    fn test_custom_resolver_via_closure() {
        let config = ResolveConfig::new().with_resolver(
            |_reference: &str, _requesting: &crate::core::FileRecord| -> Option<PathBuf> { None },
        );
        let record = crate::core::FileRecord::new("/src/a.js", "/src", Vec::new(), None);
        assert_eq!(config.resolver().resolve("x.js", &record), None);
    }
}
