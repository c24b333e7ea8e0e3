//! Common test utilities for astviz-ir
//!
//! Shared fixtures and structural assertions for integration tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
