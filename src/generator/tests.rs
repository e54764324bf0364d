#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::spec::{compile_document, parse_document, Compilation};
use std::fs;

fn compilation() -> Compilation {
    let doc = parse_document(
        r#"{
            "paths": {
                "/api/v1/namespaces/{namespace}/configmaps": {
                    "get": {
                        "x-kubernetes-action": "list",
                        "x-kubernetes-group-version-kind": {"group": "", "version": "v1", "kind": "ConfigMap"},
                        "tags": ["core_v1"]
                    }
                },
                "/apis/apps/v1/namespaces/{namespace}/deployments": {
                    "get": {
                        "x-kubernetes-action": "list",
                        "x-kubernetes-group-version-kind": {"group": "apps", "version": "v1", "kind": "Deployment"},
                        "tags": ["apps_v1"]
                    }
                }
            }
        }"#,
        false,
    )
    .unwrap();
    compile_document(&doc).unwrap()
}

fn options(dir: &std::path::Path) -> GenerateOptions {
    GenerateOptions {
        test_file: Some(dir.join("tests").join("test_resources.py")),
        ..GenerateOptions::from_config(dir, &GeneratorConfig::default())
    }
}

#[test]
fn test_smoke_test_contents() {
    let c = compilation();
    assert_eq!(
        smoke_test_contents("lightkube", "resources", &c.modules),
        "from lightkube.resources import core_v1\nfrom lightkube.resources import apps_v1\n"
    );
}

#[test]
fn test_generate_writes_one_file_per_module() {
    let dir = tempfile::tempdir().unwrap();
    let env = template_environment(DEFAULT_RESOURCES_TEMPLATE).unwrap();
    let opts = options(dir.path());

    let report = generate_resources(&compilation(), &env, &opts).unwrap();

    let names: Vec<&str> = report.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["core_v1", "apps_v1"]);
    let core = fs::read_to_string(dir.path().join("resources").join("core_v1.py")).unwrap();
    assert!(core.contains("class ConfigMap(res.NamespacedResource):"));
    let apps = fs::read_to_string(dir.path().join("resources").join("apps_v1.py")).unwrap();
    assert!(apps.contains("class Deployment(res.NamespacedResource):"));

    let smoke = fs::read_to_string(dir.path().join("tests").join("test_resources.py")).unwrap();
    assert_eq!(smoke.lines().count(), 2);
}

#[test]
fn test_clean_removes_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let stale = dir.path().join("resources").join("stale_v1.py");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "# old").unwrap();

    let env = template_environment(DEFAULT_RESOURCES_TEMPLATE).unwrap();
    let mut opts = options(dir.path());
    opts.clean = false;
    generate_resources(&compilation(), &env, &opts).unwrap();
    assert!(stale.exists());

    opts.clean = true;
    generate_resources(&compilation(), &env, &opts).unwrap();
    assert!(!stale.exists());
    assert!(dir.path().join("resources").join("core_v1.py").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let env = template_environment(DEFAULT_RESOURCES_TEMPLATE).unwrap();
    let opts = GenerateOptions {
        dry_run: true,
        ..options(dir.path())
    };

    let report = generate_resources(&compilation(), &env, &opts).unwrap();
    assert_eq!(report.modules.len(), 2);
    assert!(report.test_file.is_some());
    assert!(!dir.path().join("resources").exists());
    assert!(!dir.path().join("tests").exists());
}
