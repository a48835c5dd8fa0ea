//! Names of generated files, packages and functions.

use crdgen_core::{capitalize, path_base, path_dir};
use crdgen_ir::Package;

/// Annotation the API server requires on CRDs in community-owned groups.
pub const API_APPROVED_ANNOTATION: &str = "api-approved.kubernetes.io";

/// Approval link recorded in [`API_APPROVED_ANNOTATION`].
pub const API_APPROVED_URL: &str = "https://github.com/kubernetes/enhancements/pull/1111";

const PROTECTED_SUFFIXES: [&str; 2] = [".k8s.io", ".kubernetes.io"];

pub const CRD_FILE: &str = "zz.generated.crd.go";
pub const INSTALL_FILE: &str = "zz.generated.install.go";
pub const SCHEME_FILE: &str = "zz.generated.scheme.go";
pub const INSTALL_DIR: &str = "install";

/// Name of the function returning every definition of a group.
pub const AGGREGATOR: &str = "NewCustomResourceDefinitions";

/// Whether `group` belongs to a Kubernetes community owned namespace.
pub fn is_protected_group(group: &str) -> bool {
    PROTECTED_SUFFIXES.iter().any(|suffix| group.ends_with(suffix))
}

/// `widget` -> `NewWidgetCRD`
pub fn constructor_name(definition: &str) -> String {
    format!("New{}CRD", capitalize(definition))
}

/// Import alias for a registered API package: the last two path elements
/// joined, without dots (`example.com/apis/apps/v1` -> `appsv1`).
pub fn install_alias(package_path: &str) -> String {
    format!("{}{}", path_base(path_dir(package_path)), path_base(package_path)).replace('.', "")
}

/// Output directory and Go package name of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLayout {
    pub dir: String,
    pub package: String,
}

impl GroupLayout {
    /// Take the parent directory of the group's first package (by path):
    /// `k8s.io/api/apps/v1` -> `apps`, `example.com/a.b.c/v1` -> `abc`.
    /// Groups without packages use the first element of the group name.
    pub fn resolve(group: &str, packages: &[Package]) -> Self {
        let first = packages
            .iter()
            .filter(|p| p.group == group)
            .min_by(|a, b| a.path.cmp(&b.path));

        match first {
            Some(package) => {
                let dir = path_base(path_dir(&package.path)).to_string();
                Self {
                    package: dir.replace('.', ""),
                    dir,
                }
            }
            None => {
                let name = group.split('.').next().unwrap_or(group).to_string();
                Self {
                    dir: name.clone(),
                    package: name,
                }
            }
        }
    }
}
