//! Match criteria, process-list invocation, and the matching scan.

use std::fmt;
use std::process::Command;

use regex::Regex;
use tracing::debug;

use vigil_common::{Error, Result};
use vigil_config::{config_bool, config_string, Checker, ConfigMap};

use crate::record::{decode_records, ContainerRecord};

/// The listing command this checker drives. Other runtimes are out of
/// scope; tests substitute a stub through [`DockerChecker::check_runtime`].
pub const RUNTIME_PROGRAM: &str = "docker";

const CONF_ID: &str = "id";
const CONF_NAME_REGEX: &str = "nameRegex";
const CONF_IMAGE_REGEX: &str = "imageRegex";
const CONF_DEBUG: &str = "debug";

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Compiled match criteria, built once at `init` and immutable after.
#[derive(Debug)]
pub struct MatchCriteria {
    /// Exact-match container identifier. Empty means "no ID filter":
    /// the identifier tier is skipped, so an empty target never matches a
    /// record whose own ID field happens to be empty.
    pub container_id: String,
    /// Pattern tested against each record's names field.
    pub name_pattern: Regex,
    /// Pattern tested against each record's image field.
    pub image_pattern: Regex,
    /// Trace the raw listing and the match that succeeded. Never affects
    /// the check result.
    pub debug: bool,
}

impl MatchCriteria {
    /// Load criteria from checker configuration. First failure aborts;
    /// no partial criteria are ever observable.
    pub fn from_config(conf: &ConfigMap) -> Result<Self> {
        let container_id = config_string(conf, CONF_ID)?;

        let name_source = config_string(conf, CONF_NAME_REGEX)?;
        let name_pattern = compile_pattern(CONF_NAME_REGEX, &name_source)?;

        let image_source = config_string(conf, CONF_IMAGE_REGEX)?;
        let image_pattern = compile_pattern(CONF_IMAGE_REGEX, &image_source)?;

        let debug = config_bool(conf, CONF_DEBUG)?;

        Ok(MatchCriteria {
            container_id,
            name_pattern,
            image_pattern,
            debug,
        })
    }
}

fn compile_pattern(key: &str, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|source| Error::PatternCompile {
        key: key.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Invocation
// ---------------------------------------------------------------------------

/// Run `<program> ps --format '{{json .}}'` and capture its combined
/// output, stdout first.
///
/// Blocks until the listing command exits; deadline enforcement belongs to
/// the calling scheduler. Spawn failure and non-zero exit both surface as
/// [`Error::Execution`] carrying the captured text.
pub fn list_containers(program: &str) -> Result<Vec<u8>> {
    let output = Command::new(program)
        .args(["ps", "--format", "{{json .}}"])
        .output()
        .map_err(|e| Error::Execution(format!("{program} ps: {e}")))?;

    let mut raw = output.stdout;
    raw.extend_from_slice(&output.stderr);

    if !output.status.success() {
        return Err(Error::Execution(format!(
            "{program} ps exited {}: {}",
            output.status,
            String::from_utf8_lossy(&raw).trim()
        )));
    }

    Ok(raw)
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Which predicate a record satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Exact identifier equality.
    Id,
    /// Name pattern matched the names field.
    Name,
    /// Image pattern matched the image field.
    Image,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Id => write!(f, "id"),
            MatchTier::Name => write!(f, "name"),
            MatchTier::Image => write!(f, "image"),
        }
    }
}

/// Scan records in listing order and return the first one satisfying any
/// tier, with the tier that matched. Tiers are evaluated per record in
/// fixed priority: identifier, names, image. First match ends the scan.
pub fn find_match<'a>(
    criteria: &MatchCriteria,
    records: &'a [ContainerRecord],
) -> Option<(MatchTier, &'a ContainerRecord)> {
    for record in records {
        if !criteria.container_id.is_empty() && record.id == criteria.container_id {
            return Some((MatchTier::Id, record));
        }
        if criteria.name_pattern.is_match(&record.names) {
            return Some((MatchTier::Name, record));
        }
        if criteria.image_pattern.is_match(&record.image) {
            return Some((MatchTier::Image, record));
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Checker
// ---------------------------------------------------------------------------

/// Checker that passes while a container matching the configured criteria
/// is running on the host.
#[derive(Debug, Default)]
pub struct DockerChecker {
    criteria: Option<MatchCriteria>,
}

impl DockerChecker {
    /// Run the check against an arbitrary listing program.
    ///
    /// [`Checker::check`] always uses [`RUNTIME_PROGRAM`]; this entry point
    /// exists so tests can drive the full path through a stub script.
    pub fn check_runtime(&self, program: &str) -> Result<()> {
        let criteria = self.criteria.as_ref().ok_or(Error::NotInitialized)?;

        let raw = list_containers(program)?;
        if criteria.debug {
            debug!(listing = %String::from_utf8_lossy(&raw), "raw process listing");
        }

        let records = decode_records(&raw)?;
        match find_match(criteria, &records) {
            Some((tier, record)) => {
                if criteria.debug {
                    debug!(%tier, id = %record.id, names = %record.names, "criteria matched");
                }
                Ok(())
            }
            None => Err(Error::CheckFailed),
        }
    }
}

impl Checker for DockerChecker {
    fn init(&mut self, conf: &ConfigMap) -> Result<()> {
        self.criteria = Some(MatchCriteria::from_config(conf)?);
        Ok(())
    }

    fn check(&self) -> Result<()> {
        self.check_runtime(RUNTIME_PROGRAM)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
