//! Reading CRD manifests and grouping them by API group.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crdgen_apis::CustomResourceDefinition;
use crdgen_apis::apiextensions::KIND;
use crdgen_ir::{Group, Resource};
use serde_json::Value;
use tracing::debug;

use crate::truncate::truncate_descriptions;
use crate::validate::check_dangerous_types;
use crate::{Error, Result};

/// Parse-phase policies.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub allow_dangerous_types: bool,
    pub max_desc_len: Option<usize>,
}

/// Every JSON file named by `inputs`. Directories are searched
/// recursively; the result is sorted so loading order is stable.
pub fn collect_manifest_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let metadata = std::fs::metadata(input).map_err(|e| io_error(input, e))?;
        if metadata.is_dir() {
            walk_dir(input, &mut files)?;
        } else {
            files.push(input.clone());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_error(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| io_error(dir, e))?.path();
        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> Box<Error> {
    Box::new(Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the CRDs in one manifest file. The file holds a single object or an
/// array of objects; objects of any other kind are skipped.
pub fn read_manifest(path: &Path) -> Result<Vec<CustomResourceDefinition>> {
    let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let manifest_error = |source| {
        Box::new(Error::Manifest {
            path: path.to_path_buf(),
            source,
        })
    };
    let objects = match serde_json::from_str(&content).map_err(manifest_error)? {
        Value::Array(items) => items,
        object => vec![object],
    };

    let mut crds = Vec::new();
    for object in objects {
        let kind = object.get("kind").and_then(Value::as_str).unwrap_or_default();
        if kind != KIND {
            debug!(path = %path.display(), kind, "skipping manifest object");
            continue;
        }
        let crd: CustomResourceDefinition = serde_json::from_value(object).map_err(manifest_error)?;
        check_complete(path, &crd)?;
        crds.push(crd);
    }
    Ok(crds)
}

fn check_complete(path: &Path, crd: &CustomResourceDefinition) -> Result<()> {
    let reason = if crd.spec.group.is_empty() {
        "spec.group is empty"
    } else if crd.spec.names.kind.is_empty() {
        "spec.names.kind is empty"
    } else {
        return Ok(());
    };
    Err(Box::new(Error::Incomplete {
        path: path.to_path_buf(),
        name: crd.metadata.name.clone(),
        reason: reason.to_string(),
    }))
}

/// Load every CRD below `inputs`, apply the parse-phase policies and group
/// the definitions. Groups come back sorted by name.
pub fn load_groups(inputs: &[PathBuf], options: LoadOptions) -> Result<Vec<Group<CustomResourceDefinition>>> {
    let mut groups: BTreeMap<String, (Group<CustomResourceDefinition>, BTreeMap<String, PathBuf>)> =
        BTreeMap::new();

    for file in collect_manifest_files(inputs)? {
        for mut crd in read_manifest(&file)? {
            if let Some(max_len) = options.max_desc_len {
                truncate_descriptions(&mut crd, max_len);
            }
            if !options.allow_dangerous_types {
                check_dangerous_types(&mut crd)?;
            }

            let (group, sources) = groups
                .entry(crd.group().to_string())
                .or_insert_with(|| (Group::new(crd.group()), BTreeMap::new()));
            let name = crd.definition_name().to_string();
            if let Some(first) = sources.get(&name) {
                return Err(Box::new(Error::DuplicateDefinition {
                    group: group.name().to_string(),
                    name,
                    first: first.display().to_string(),
                    second: file.display().to_string(),
                }));
            }
            debug!(group = group.name(), definition = %name, path = %file.display(), "loaded definition");
            sources.insert(name, file.clone());
            group.insert(crd);
        }
    }

    Ok(groups.into_values().map(|(group, _)| group).collect())
}
