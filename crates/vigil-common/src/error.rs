//! Error types for vigil checkers.

use thiserror::Error;

/// Result type alias for checker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for checker initialization and execution.
///
/// Initialization errors (`ConfigMissing`, `ConfigTypeMismatch`,
/// `PatternCompile`) leave the checker unusable. `Execution` and `Parse`
/// are fatal to a single `check()` call only. `CheckFailed` is the
/// expected unhealthy signal: the check ran correctly and found nothing.
#[derive(Debug, Error)]
pub enum Error {
    // Initialization errors
    #[error("missing configuration key: {key}")]
    ConfigMissing { key: String },

    #[error("configuration key {key}: expected {expected}, got {actual}")]
    ConfigTypeMismatch {
        key: String,
        expected: &'static str,
        actual: String,
    },

    #[error("invalid {key} pattern: {source}")]
    PatternCompile {
        key: String,
        #[source]
        source: regex::Error,
    },

    // Registry errors
    #[error("unknown checker type: {0}")]
    UnknownChecker(String),

    #[error("checker used before successful initialization")]
    NotInitialized,

    // Check execution errors
    #[error("process listing failed: {0}")]
    Execution(String),

    #[error("malformed process listing: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no running container matched the configured criteria")]
    CheckFailed,
}

impl Error {
    /// True for the expected "unhealthy" signal, as opposed to a checker
    /// malfunction. Callers that alert on broken checkers but retry on
    /// unhealthy targets branch on this.
    pub fn is_check_failed(&self) -> bool {
        matches!(self, Error::CheckFailed)
    }

    /// True for errors that leave the checker permanently unusable
    /// (configuration and pattern errors surfaced from `init`).
    pub fn is_init_error(&self) -> bool {
        matches!(
            self,
            Error::ConfigMissing { .. }
                | Error::ConfigTypeMismatch { .. }
                | Error::PatternCompile { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_failed_is_distinguishable() {
        assert!(Error::CheckFailed.is_check_failed());
        assert!(!Error::Execution("docker ps: exit 1".into()).is_check_failed());
        assert!(!Error::NotInitialized.is_check_failed());
    }

    #[test]
    fn test_init_errors_classified() {
        let missing = Error::ConfigMissing { key: "id".into() };
        assert!(missing.is_init_error());
        assert!(!missing.is_check_failed());

        let mismatch = Error::ConfigTypeMismatch {
            key: "debug".into(),
            expected: "bool",
            actual: "string".into(),
        };
        assert!(mismatch.is_init_error());

        assert!(!Error::CheckFailed.is_init_error());
        assert!(!Error::Execution("spawn failed".into()).is_init_error());
    }

    #[test]
    fn test_display_names_the_key() {
        let e = Error::ConfigMissing {
            key: "imageRegex".into(),
        };
        assert!(e.to_string().contains("imageRegex"));

        let e = Error::PatternCompile {
            key: "nameRegex".into(),
            source: regex::Regex::new("((").unwrap_err(),
        };
        assert!(e.to_string().contains("nameRegex"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let bad: std::result::Result<serde_json::Value, _> = serde_json::from_str("{truncated");
        let e: Error = bad.unwrap_err().into();
        assert!(matches!(e, Error::Parse(_)));
    }
}
