use std::path::{Path, PathBuf};

use crdgen_core::{Boilerplate, GeneratedFile};

use crate::imports::META_V1;
use crate::naming::{INSTALL_DIR, SCHEME_FILE};

/// `install/zz.generated.scheme.go`: registers the packages of every
/// group with a scheme.
#[derive(Debug, Clone)]
pub struct SchemeFile {
    packages: Vec<String>,
    header: Boilerplate,
}

impl SchemeFile {
    /// The metav1 package is never registered.
    pub fn new(packages: impl IntoIterator<Item = String>, header: Boilerplate) -> Self {
        let mut packages: Vec<String> = packages.into_iter().filter(|p| p != META_V1).collect();
        packages.sort();
        packages.dedup();
        Self { packages, header }
    }

    pub fn relative_path(&self) -> String {
        format!("{INSTALL_DIR}/{SCHEME_FILE}")
    }
}

impl GeneratedFile for SchemeFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(INSTALL_DIR).join(SCHEME_FILE)
    }

    fn render(&self) -> String {
        super::install_file(&self.packages, &self.header).render()
    }
}
