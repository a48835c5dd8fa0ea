//! Check operation - compile everything without writing.

use std::path::Path;

use crdgen_apis::CustomResourceDefinition;
use crdgen_codegen_go::{Generator, GeneratorOptions};
use crdgen_ir::{Group, Package};

use super::summarize;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Compile failures end up in the report rather than the return value.
pub fn check(
    config_path: &Path,
    groups: Vec<Group<CustomResourceDefinition>>,
    packages: Vec<Package>,
    options: GeneratorOptions,
) -> CheckReport {
    let generator = Generator::new(groups, packages, options);
    let (file_count, errors) = match generator.render() {
        Ok(registry) => (registry.len(), Vec::new()),
        Err(err) => (0, vec![format!("{err:#}")]),
    };

    CheckReport {
        config_path: config_path.to_path_buf(),
        groups: summarize(generator.groups()),
        file_count,
        errors,
    }
}
