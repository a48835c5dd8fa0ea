//! Loading CRD manifests from disk.

use std::path::{Path, PathBuf};

use crdgen_ir::Resource;
use crdgen_manifest::{Error, LoadOptions, load_groups, read_manifest};
use tempfile::TempDir;

fn crd_json(group: &str, kind: &str, schema: &str) -> String {
    let plural = format!("{}s", kind.to_lowercase());
    format!(
        r#"{{
  "apiVersion": "apiextensions.k8s.io/v1",
  "kind": "CustomResourceDefinition",
  "metadata": {{ "name": "{plural}.{group}" }},
  "spec": {{
    "group": "{group}",
    "names": {{ "kind": "{kind}", "plural": "{plural}" }},
    "scope": "Namespaced",
    "versions": [
      {{ "name": "v1", "served": true, "storage": true,
         "schema": {{ "openAPIV3Schema": {schema} }} }}
    ]
  }}
}}"#
    )
}

const SCHEMA: &str = r#"{ "type": "object", "description": "Widget is a thing. It has parts.",
  "properties": { "replicas": { "type": "integer", "description": "How many. Defaults to one." } } }"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_groups_from_directory() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "apps/widgets.json", &crd_json("apps.example.com", "Widget", SCHEMA));
    write(temp.path(), "apps/gadgets.json", &crd_json("apps.example.com", "Gadget", SCHEMA));
    write(temp.path(), "batch/jobs.json", &crd_json("batch.example.com", "Job", SCHEMA));
    write(temp.path(), "notes.txt", "not a manifest");

    let groups = load_groups(&[temp.path().to_path_buf()], LoadOptions::default()).unwrap();

    let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();
    assert_eq!(names, ["apps.example.com", "batch.example.com"]);
    let apps: Vec<&str> = groups[0].definitions().map(|(name, _)| name).collect();
    assert_eq!(apps, ["Gadget", "Widget"]);
    let (_, job) = groups[1].definitions().next().unwrap();
    assert_eq!(job.group(), "batch.example.com");
    assert_eq!(job.spec.versions[0].name, "v1");
}

#[test]
fn test_arrays_and_other_kinds() {
    let temp = TempDir::new().unwrap();
    let list = format!(
        r#"[{}, {{"apiVersion": "v1", "kind": "ConfigMap", "metadata": {{"name": "x"}}}}]"#,
        crd_json("apps.example.com", "Widget", SCHEMA)
    );
    let path = write(temp.path(), "all.json", &list);

    let crds = read_manifest(&path).unwrap();
    assert_eq!(crds.len(), 1);
    assert_eq!(crds[0].definition_name(), "Widget");
}

#[test]
fn test_duplicate_definitions() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.json", &crd_json("apps.example.com", "Widget", SCHEMA));
    write(temp.path(), "b.json", &crd_json("apps.example.com", "Widget", SCHEMA));

    let err = load_groups(&[temp.path().to_path_buf()], LoadOptions::default()).unwrap_err();
    match *err {
        Error::DuplicateDefinition { group, name, first, second } => {
            assert_eq!(group, "apps.example.com");
            assert_eq!(name, "Widget");
            assert!(first.ends_with("a.json"));
            assert!(second.ends_with("b.json"));
        }
        other => panic!("expected duplicate definition, got {other:?}"),
    }
}

#[test]
fn test_dangerous_types() {
    let temp = TempDir::new().unwrap();
    let schema = r#"{ "type": "object", "properties": { "ratio": { "type": "number" } } }"#;
    write(temp.path(), "w.json", &crd_json("apps.example.com", "Widget", schema));
    let inputs = [temp.path().to_path_buf()];

    let err = load_groups(&inputs, LoadOptions::default()).unwrap_err();
    assert!(matches!(*err, Error::DangerousType { ref path, .. } if path == "v1.openAPIV3Schema.properties.ratio"));

    let allowed = LoadOptions {
        allow_dangerous_types: true,
        ..Default::default()
    };
    assert_eq!(load_groups(&inputs, allowed).unwrap().len(), 1);
}

#[test]
fn test_descriptions_truncated() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "w.json", &crd_json("apps.example.com", "Widget", SCHEMA));
    let inputs = [temp.path().to_path_buf()];

    let options = LoadOptions {
        max_desc_len: Some(20),
        ..Default::default()
    };
    let mut groups = load_groups(&inputs, options).unwrap();
    let crd = groups[0].definitions_mut().next().unwrap();
    let (_, schema) = crd.schemas_mut().next().unwrap();
    assert_eq!(schema.description, "Widget is a thing.");
    assert_eq!(schema.properties["replicas"].description, "How many.");

    let strip = LoadOptions {
        max_desc_len: Some(0),
        ..Default::default()
    };
    let mut groups = load_groups(&inputs, strip).unwrap();
    let crd = groups[0].definitions_mut().next().unwrap();
    let (_, schema) = crd.schemas_mut().next().unwrap();
    assert!(schema.description.is_empty());
}

#[test]
fn test_invalid_json() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "broken.json", "{ \"kind\": ");
    let err = load_groups(&[path], LoadOptions::default()).unwrap_err();
    assert!(matches!(*err, Error::Manifest { .. }));
}

#[test]
fn test_missing_group() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "w.json", &crd_json("", "Widget", SCHEMA));
    let err = load_groups(&[path], LoadOptions::default()).unwrap_err();
    assert!(err.to_string().ends_with("is incomplete: spec.group is empty"));
}

#[test]
fn test_missing_input() {
    let err = load_groups(&[PathBuf::from("/nonexistent/crds")], LoadOptions::default()).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}
