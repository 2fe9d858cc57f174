//! Checker registry: configuration-declared type names to constructors.

use std::collections::HashMap;

use vigil_common::{Error, Result};

use crate::checker::Checker;

/// Constructor for an unconfigured checker instance.
pub type Constructor = fn() -> Box<dyn Checker>;

/// Maps checker type names (as declared in host configuration) to
/// constructors. Checker crates register themselves into a registry owned
/// by the host; the registry itself schedules nothing.
#[derive(Default)]
pub struct Registry {
    constructors: HashMap<String, Constructor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a checker type. Re-registering a name replaces the
    /// previous constructor.
    pub fn register(&mut self, name: &str, constructor: Constructor) {
        self.constructors.insert(name.to_string(), constructor);
    }

    /// Construct an unconfigured checker for a declared type name.
    pub fn create(&self, name: &str) -> Result<Box<dyn Checker>> {
        self.constructors
            .get(name)
            .map(|constructor| constructor())
            .ok_or_else(|| Error::UnknownChecker(name.to_string()))
    }

    /// Registered type names, sorted for stable listing.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
