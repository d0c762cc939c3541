//! Core types shared across the resolver: errors, file records, and the
//! storage provider seam.
//!
//! This module deliberately contains no resolution logic. It defines the
//! vocabulary the rest of the crate speaks:
//!
//! - [`ResolveError`] / [`ErrorContext`] - typed errors plus the
//!   user-friendly display layer used by the CLI
//! - [`FileRecord`] - an immutable snapshot of one file (path, contents,
//!   stat, base directory)
//! - [`FileProvider`] / [`DiskProvider`] - the file-content collaborator the
//!   traversal engine reads through

pub mod error;
pub mod provider;
pub mod record;

pub use error::{ErrorContext, ResolveError, Result, user_friendly_error};
pub use provider::{DiskProvider, FileProvider};
pub use record::FileRecord;
