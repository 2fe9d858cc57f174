//! Vigil checker configuration and capability contract.
//!
//! This crate provides:
//! - The [`Checker`] trait every health-check plugin implements
//! - Typed extraction helpers over the generic configuration map
//! - A [`Registry`] mapping configuration-declared checker type names to
//!   constructors
//!
//! Checkers receive their options as a [`ConfigMap`] supplied by the
//! hosting scheduler; nothing here reads files or the environment.

pub mod checker;
pub mod loader;
pub mod registry;

pub use checker::{Checker, ConfigMap};
pub use loader::{config_bool, config_string};
pub use registry::{Constructor, Registry};
