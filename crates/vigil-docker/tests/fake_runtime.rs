//! End-to-end checker tests against a stub listing program.
//!
//! Each test writes a small shell script standing in for the container
//! runtime and drives the full `init` + check path through it.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

use vigil_common::Error;
use vigil_config::{Checker, ConfigMap};
use vigil_docker::DockerChecker;

fn stub_runtime(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("stub-runtime");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn configured_checker() -> DockerChecker {
    let mut conf = ConfigMap::new();
    conf.insert("id".into(), json!("abc123"));
    conf.insert("nameRegex".into(), json!("^web-"));
    conf.insert("imageRegex".into(), json!("nginx.*"));
    conf.insert("debug".into(), json!(true));

    let mut checker = DockerChecker::default();
    checker.init(&conf).unwrap();
    checker
}

#[test]
fn healthy_when_listing_contains_id_match() {
    let dir = TempDir::new().unwrap();
    let stub = stub_runtime(
        &dir,
        r#"echo '{"ID":"xyz999","Names":"cache-1","Image":"redis:7"}'
echo '{"ID":"abc123","Names":"worker-2","Image":"custom:latest"}'"#,
    );

    let checker = configured_checker();
    checker.check_runtime(stub.to_str().unwrap()).unwrap();
}

#[test]
fn healthy_when_listing_contains_name_match() {
    let dir = TempDir::new().unwrap();
    let stub = stub_runtime(
        &dir,
        r#"echo '{"ID":"other","Names":"web-frontend","Image":"custom:latest"}'"#,
    );

    let checker = configured_checker();
    checker.check_runtime(stub.to_str().unwrap()).unwrap();
}

#[test]
fn unhealthy_when_nothing_matches() {
    let dir = TempDir::new().unwrap();
    let stub = stub_runtime(
        &dir,
        r#"echo '{"ID":"other","Names":"cache-1","Image":"redis:7"}'"#,
    );

    let checker = configured_checker();
    let err = checker.check_runtime(stub.to_str().unwrap()).unwrap_err();
    assert!(err.is_check_failed());
}

#[test]
fn unhealthy_when_listing_is_empty() {
    let dir = TempDir::new().unwrap();
    let stub = stub_runtime(&dir, "exit 0");

    let checker = configured_checker();
    let err = checker.check_runtime(stub.to_str().unwrap()).unwrap_err();
    assert!(err.is_check_failed());
}

#[test]
fn execution_error_carries_captured_output() {
    let dir = TempDir::new().unwrap();
    let stub = stub_runtime(
        &dir,
        r#"echo 'Cannot connect to the runtime daemon' >&2
exit 1"#,
    );

    let checker = configured_checker();
    let err = checker.check_runtime(stub.to_str().unwrap()).unwrap_err();
    match err {
        Error::Execution(detail) => {
            assert!(detail.contains("Cannot connect to the runtime daemon"))
        }
        other => panic!("expected execution error, got {other}"),
    }
}

#[test]
fn malformed_record_mid_stream_aborts_check() {
    let dir = TempDir::new().unwrap();
    let stub = stub_runtime(
        &dir,
        r#"echo '{"ID":"abc123","Names":"web-1","Image":"nginx:1.25"}'
echo '{"ID": truncated'"#,
    );

    // The first record would match; the malformed one still aborts the
    // whole check and discards it.
    let checker = configured_checker();
    let err = checker.check_runtime(stub.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn stderr_noise_poisons_combined_capture() {
    let dir = TempDir::new().unwrap();
    let stub = stub_runtime(
        &dir,
        r#"echo '{"ID":"abc123","Names":"web-1","Image":"nginx:1.25"}'
echo 'WARNING: bridge network unavailable' >&2"#,
    );

    let checker = configured_checker();
    let err = checker.check_runtime(stub.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}
