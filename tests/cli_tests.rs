#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{fixtures, temp_files};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn kindgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kindgen"))
        .args(args)
        .env_remove("KINDGEN_LOG_LEVEL")
        .env_remove("KINDGEN_LOG_FORMAT")
        .output()
        .expect("failed to run kindgen")
}

fn linter_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("linter")
        .join(name)
}

#[test]
fn test_cli_generate_creates_modules() {
    let dir = tempfile::tempdir().unwrap();
    let spec = temp_files::write_spec(dir.path(), "swagger.json", &fixtures::swagger());
    let out = dir.path().join("out");
    let test_file = dir.path().join("test_imports.py");

    let output = kindgen(&[
        "generate",
        "--spec",
        spec.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--test-file",
        test_file.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    assert!(out.join("resources").join("core_v1.py").exists());
    assert!(out.join("resources").join("apps_v1.py").exists());
    let smoke = fs::read_to_string(&test_file).unwrap();
    assert!(smoke.contains("from lightkube.resources import apps_v1"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 module(s), 5 class(es) from 13 path(s)"));
}

#[test]
fn test_cli_generate_fail_on_warning() {
    let dir = tempfile::tempdir().unwrap();
    let spec = temp_files::write_spec(dir.path(), "swagger.yaml", &fixtures::swagger());
    let out = dir.path().join("out");

    let output = kindgen(&[
        "generate",
        "--spec",
        spec.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--fail-on-warning",
    ]);
    assert!(!output.status.success());
    assert!(!out.join("resources").exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("would drop resources"));
}

#[test]
fn test_cli_lint_fail_on_error() {
    let output = kindgen(&[
        "lint",
        "--spec",
        linter_file("dangling_definition.yaml").to_str().unwrap(),
        "--fail-on-error",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("unresolved_reference"));

    let output = kindgen(&[
        "lint",
        "--spec",
        linter_file("unidentified_resources.yaml").to_str().unwrap(),
        "--fail-on-error",
    ]);
    assert!(output.status.success());
}

#[test]
fn test_cli_inspect_module() {
    let dir = tempfile::tempdir().unwrap();
    let spec = temp_files::write_spec(dir.path(), "swagger.json", &fixtures::swagger());

    let output = kindgen(&["inspect", "--spec", spec.to_str().unwrap(), "--module", "apps_v1"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let module: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(module["name"], "apps_v1");
    assert_eq!(module["classes"][0]["name"], "DeploymentScale");
    assert_eq!(module["classes"][1]["properties"]["plural"], "'deployments'");
}

#[test]
fn test_cli_missing_spec_fails() {
    let output = kindgen(&["inspect", "--spec", "/nonexistent/swagger.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}
