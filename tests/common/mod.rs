//! Common test utilities for Seimei contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated config and data directories for the CLI
//! - Assertion macros: `assert_output_contains!`, `assert_success!`

pub mod assertions;
pub mod env;

pub use env::*;
