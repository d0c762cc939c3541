//! Error handling for depclose
//!
//! The error system is built around two types:
//! - [`ResolveError`] - strongly-typed errors for every failure mode in the
//!   resolution core, suitable for matching in code
//! - [`ErrorContext`] - a wrapper that adds a user-friendly message and an
//!   actionable suggestion for CLI display
//!
//! # Error Categories
//!
//! - **Resolution**: [`ResolveError::FileNotFound`],
//!   [`ResolveError::CircularDependency`] - raised per reference during
//!   traversal and collected out-of-band; they never abort the rest of a
//!   traversal on their own
//! - **Configuration**: [`ResolveError::InvalidPattern`],
//!   [`ResolveError::PatternCaptureGroups`],
//!   [`ResolveError::InvalidGlobPattern`] - construction-time errors, fatal
//!   and surfaced immediately rather than per-file
//! - **I/O**: [`ResolveError::Io`] - filesystem failures wrapped with the
//!   path that triggered them
//!
//! # Examples
//!
//! ```rust,no_run
//! use depclose::core::{ResolveError, user_friendly_error};
//!
//! fn read_dependency() -> Result<(), ResolveError> {
//!     Err(ResolveError::FileNotFound { path: "/missing/lib.js".into() })
//! }
//!
//! if let Err(e) = read_dependency() {
//!     let ctx = user_friendly_error(anyhow::Error::from(e));
//!     ctx.display();
//! }
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for dependency resolution.
///
/// Resolution errors ([`FileNotFound`](Self::FileNotFound) and
/// [`CircularDependency`](Self::CircularDependency)) are reported out-of-band
/// during traversal: the offending reference is skipped and the traversal
/// continues with the remaining references. Configuration errors are fatal
/// at construction time.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A resolved reference points at a path that does not exist on storage.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The resolved path that was missing.
        path: PathBuf,
    },

    /// Adding the dependency edge would close a cycle in the reference graph.
    #[error("circular dependency between \"{}\" and \"{}\"", from.display(), to.display())]
    CircularDependency {
        /// The file that declared the reference.
        from: PathBuf,
        /// The resolved dependency that already (transitively) requires `from`.
        to: PathBuf,
    },

    /// The annotation pattern failed to compile as a regular expression.
    #[error("invalid annotation pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// The regex engine's diagnostic.
        reason: String,
    },

    /// The annotation pattern does not carry exactly one capture group.
    ///
    /// The single group is what the extractor yields as the raw reference,
    /// so a pattern with zero or several groups is ambiguous.
    #[error("annotation pattern '{pattern}' must have exactly one capture group, found {found}")]
    PatternCaptureGroups {
        /// The pattern as supplied.
        pattern: String,
        /// Number of explicit capture groups found.
        found: usize,
    },

    /// An include/exclude/search-path glob failed to compile.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidGlobPattern {
        /// The glob as supplied.
        pattern: String,
        /// The glob engine's diagnostic.
        reason: String,
    },

    /// A filesystem read failed for a path that was expected to be readable.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`ResolveError`].
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Error context wrapper that adds a suggestion and optional details
/// for user-facing display.
///
/// Created by [`user_friendly_error`] or built manually with
/// [`ErrorContext::new`] plus the `with_*` builders.
pub struct ErrorContext {
    /// The underlying error.
    pub error: anyhow::Error,
    /// A short, actionable hint shown below the error message.
    pub suggestion: Option<String>,
    /// Extra background shown below the suggestion.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error with no suggestion or details.
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self {
            error: error.into(),
            suggestion: None,
            details: None,
        }
    }

    /// Attach an actionable suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach background details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{} {}", "Error:".red().bold(), self.error);
        if let Some(details) = &self.details {
            eprintln!("  {}", details.dimmed());
        }
        if let Some(suggestion) = &self.suggestion {
            eprintln!("{} {}", "Hint:".yellow().bold(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nHint: {suggestion}")?;
        }
        Ok(())
    }
}

/// Convert any error into an [`ErrorContext`] with a suggestion keyed to
/// the specific [`ResolveError`] variant where one applies.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let suggestion = match error.downcast_ref::<ResolveError>() {
        Some(ResolveError::FileNotFound { path }) => Some(format!(
            "Check the annotation that points at '{}' for typos, \
             or configure search paths with --search-path",
            path.display()
        )),
        Some(ResolveError::CircularDependency { .. }) => Some(
            "Break the cycle in the annotations, or pass --ignore-circular-dependencies \
             to skip back-edges"
                .to_string(),
        ),
        Some(ResolveError::InvalidPattern { .. } | ResolveError::PatternCaptureGroups { .. }) => {
            Some(
                "The pattern must be a valid regular expression with exactly one \
                 capture group, e.g. '@requires\\s+(.*\\.js)'"
                    .to_string(),
            )
        }
        Some(ResolveError::InvalidGlobPattern { .. }) => {
            Some("Glob patterns use '*', '?' and '[..]' wildcards, e.g. 'libs/**/*.js'".to_string())
        }
        _ => None,
    };

    let mut ctx = ErrorContext::new(error);
    if let Some(s) = suggestion {
        ctx = ctx.with_suggestion(s);
    }
    ctx
}
