use std::path::{Path, PathBuf};

use crdgen_core::{Boilerplate, GeneratedFile};

use crate::naming::{INSTALL_DIR, INSTALL_FILE};

/// `<group-dir>/install/zz.generated.install.go`: registers the group's
/// packages with a scheme.
#[derive(Debug, Clone)]
pub struct GroupInstallFile {
    dir: String,
    packages: Vec<String>,
    header: Boilerplate,
}

impl GroupInstallFile {
    /// `packages` are Go import paths; they are registered in path order.
    pub fn new(dir: impl Into<String>, packages: impl IntoIterator<Item = String>, header: Boilerplate) -> Self {
        let mut packages: Vec<String> = packages.into_iter().collect();
        packages.sort();
        packages.dedup();
        Self {
            dir: dir.into(),
            packages,
            header,
        }
    }

    /// Output path relative to the output root.
    pub fn relative_path(&self) -> String {
        format!("{}/{INSTALL_DIR}/{INSTALL_FILE}", self.dir)
    }
}

impl GeneratedFile for GroupInstallFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(INSTALL_DIR).join(INSTALL_FILE)
    }

    fn render(&self) -> String {
        super::install_file(&self.packages, &self.header).render()
    }
}
