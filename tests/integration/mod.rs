//! Integration test suite for depclose
//!
//! End-to-end tests that drive the `depclose` binary against temporary
//! fixture trees and assert on output, bundles, and exit codes.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **resolve**: closure listing, ordering, filters, error exit codes
//! - **bundle**: concatenation output
//! - **tree**: dependency tree rendering

mod bundle;
mod common;
mod resolve;
mod tree;
