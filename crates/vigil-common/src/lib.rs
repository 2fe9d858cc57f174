//! Vigil common types.
//!
//! This crate provides the error taxonomy shared by the checker crates.
//! Checkers return a single [`Error`] enum so the hosting scheduler can
//! tell an unhealthy result apart from a broken checker.

pub mod error;

pub use error::{Error, Result};
