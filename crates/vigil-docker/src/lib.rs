//! Docker container health checker.
//!
//! Verifies that a specific container is currently running on the host by
//! invoking `docker ps --format '{{json .}}'`, decoding its
//! one-JSON-object-per-line output, and testing each listed container
//! against configured match criteria.
//!
//! # Options
//!
//! All four are required:
//!
//! - `id` — exact container identifier to match; empty disables the ID tier
//! - `nameRegex` — pattern tested against each container's names field
//! - `imageRegex` — pattern tested against each container's image field
//! - `debug` — trace the raw listing and the match that succeeded
//!
//! # Match priority
//!
//! Containers are scanned in listing order; per container the tiers are
//! evaluated as identifier, then names, then image. The first container
//! satisfying any tier ends the scan. This is an existence check, not a
//! ranking.

pub mod check;
pub mod record;

pub use check::{find_match, list_containers, DockerChecker, MatchCriteria, MatchTier};
pub use record::{decode_records, ContainerRecord};

use vigil_config::{Checker, Registry};

/// Type name under which this checker registers.
pub const CHECKER_TYPE: &str = "docker";

fn new_boxed() -> Box<dyn Checker> {
    Box::new(DockerChecker::default())
}

/// Register the docker checker with a host registry.
pub fn register(registry: &mut Registry) {
    registry.register(CHECKER_TYPE, new_boxed);
}
