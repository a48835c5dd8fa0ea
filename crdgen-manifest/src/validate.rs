//! Schema policies checked while loading manifests.

use crdgen_apis::CustomResourceDefinition;

use crate::{Error, Result};

/// Reject floating point schemas (`type: number`).
///
/// The error names the CRD and the first offending schema, as
/// `<version>.openAPIV3Schema<path>`.
pub fn check_dangerous_types(crd: &mut CustomResourceDefinition) -> Result<()> {
    let name = crd.metadata.name.clone();
    let mut found = None;
    for (version, schema) in crd.schemas_mut() {
        schema.walk_mut("", &mut |path, schema| {
            if found.is_none() && schema.type_ == "number" {
                found = Some(format!("{version}.openAPIV3Schema{path}"));
            }
        });
        if found.is_some() {
            break;
        }
    }
    match found {
        Some(path) => Err(Box::new(Error::DangerousType { name, path })),
        None => Ok(()),
    }
}
