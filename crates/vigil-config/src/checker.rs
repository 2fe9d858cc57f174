//! The checker capability contract.

use vigil_common::Result;

/// Generic configuration options for one checker instance, as supplied by
/// the hosting scheduler. Keyed and iterated in key order.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

/// A pluggable health check.
///
/// The hosting scheduler constructs a checker through the [`Registry`],
/// calls [`init`] exactly once with the instance's configuration, and then
/// invokes [`check`] on whatever cadence it owns. A checker whose `init`
/// failed must not be checked.
///
/// `check` takes `&self`: a checker holds no mutable state after
/// initialization, so concurrent checks on one instance are safe.
///
/// [`Registry`]: crate::Registry
/// [`init`]: Checker::init
/// [`check`]: Checker::check
pub trait Checker: Send + Sync {
    /// Load and validate configuration. All-or-nothing: on error the
    /// checker retains no partial state and stays unusable.
    fn init(&mut self, conf: &ConfigMap) -> Result<()>;

    /// Run the check once against a fresh snapshot of the target.
    ///
    /// `Ok(())` means healthy. `Error::CheckFailed` means the check ran
    /// correctly and the target is unhealthy; any other error means the
    /// check itself could not run.
    fn check(&self) -> Result<()>;
}

impl std::fmt::Debug for dyn Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Checker")
    }
}
