//! Annotation extraction - finding dependency references in file content.
//!
//! Dependencies are declared with inline textual annotations, typically
//! inside comment banners:
//!
//! ```text
//! /**
//!  * @requires libs/util.js
//!  * @requires libs/dom.js
//!  */
//! ```
//!
//! The extractor matches a caller-supplied regular expression against the
//! raw file text. No syntax-aware parsing happens here: annotations are
//! found by pattern matching alone, so they work the same in any source
//! language. The pattern must carry exactly one capture group; the group's
//! text is the raw reference handed to the path resolver.
//!
//! Each call to [`AnnotationExtractor::extract`] scans the full content
//! from the start and returns every match in document order. No match
//! position or other state is carried between files.
//!
//! # Examples
//!
//! ```rust
//! use depclose::extract::AnnotationExtractor;
//!
//! # fn example() -> depclose::core::Result<()> {
//! let extractor = AnnotationExtractor::from_pattern(r"// import (\S+)")?;
//! let refs = extractor.extract("// import a.js\nlet x;\n// import b.js\n");
//! assert_eq!(refs.len(), 2);
//! assert_eq!(refs[0].raw, "a.js");
//! assert_eq!(refs[1].raw, "b.js");
//! # Ok(())
//! # }
//! ```

use regex::Regex;
use tracing::{debug, trace};

use crate::core::{ResolveError, Result};

/// Default annotation pattern: `@requires` lines in comment banners that
/// name a `.js` file, e.g. `* @requires libs/util.js`.
pub const DEFAULT_PATTERN: &str = r"\* @requires [\s-]*(.*\.js)";

/// A raw dependency reference extracted from file content.
///
/// References are transient: they are consumed by the path resolver
/// immediately after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The text captured by the pattern's single capture group.
    pub raw: String,
    /// Zero-based position of this reference among the file's matches,
    /// in document order.
    pub index: usize,
}

/// Stateless annotation scanner over a compiled pattern.
///
/// The pattern is validated once at construction: it must compile and it
/// must contain exactly one explicit capture group. A malformed pattern is
/// a fatal configuration error, surfaced immediately rather than per file.
#[derive(Debug, Clone)]
pub struct AnnotationExtractor {
    pattern: Regex,
}

impl AnnotationExtractor {
    /// Compile and validate a pattern string.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidPattern`] when the pattern does not compile
    /// - [`ResolveError::PatternCaptureGroups`] when it has zero or more
    ///   than one explicit capture group
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| ResolveError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Self::new(regex)
    }

    /// Wrap an already-compiled regex, validating the capture-group arity.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::PatternCaptureGroups`] when the regex does
    /// not carry exactly one explicit capture group.
    pub fn new(pattern: Regex) -> Result<Self> {
        // captures_len counts the implicit whole-match group at index 0.
        let explicit = pattern.captures_len() - 1;
        if explicit != 1 {
            return Err(ResolveError::PatternCaptureGroups {
                pattern: pattern.as_str().to_string(),
                found: explicit,
            });
        }
        Ok(Self { pattern })
    }

    /// The pattern string this extractor was built from.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Scan `content` and return all references in document order.
    ///
    /// No match yields an empty vector; that is normal for files without
    /// annotations, not an error.
    pub fn extract(&self, content: &str) -> Vec<Reference> {
        let refs: Vec<Reference> = self
            .pattern
            .captures_iter(content)
            .enumerate()
            .filter_map(|(index, captures)| {
                let m = captures.get(1)?;
                trace!("annotation match at byte {}: '{}'", m.start(), m.as_str());
                Some(Reference {
                    raw: m.as_str().to_string(),
                    index,
                })
            })
            .collect();
        debug!("extracted {} reference(s)", refs.len());
        refs
    }
}

impl Default for AnnotationExtractor {
    fn default() -> Self {
        // The default pattern is a compile-time constant with one group.
        Self::from_pattern(DEFAULT_PATTERN).unwrap()
    }
}
