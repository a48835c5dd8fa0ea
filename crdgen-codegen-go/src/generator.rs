use std::collections::BTreeMap;
use std::path::Path;

use crdgen_codegen::generation::{FileEntry, FileRegistry};
use crdgen_core::{Boilerplate, GenerateResult, GeneratedFile, PreviewFile};
use crdgen_ir::{Group, Package, Resource};
use eyre::{Result, WrapErr, bail};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::files::{GroupCrdFile, GroupInstallFile, SchemeFile};
use crate::naming::{API_APPROVED_ANNOTATION, API_APPROVED_URL, GroupLayout, is_protected_group};

/// Which files to emit, and the header they start with.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub header: Boilerplate,
    /// Per-group constructor files.
    pub gen_crd: bool,
    /// Per-group install files and the global scheme file.
    pub gen_install: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            header: Boilerplate::default(),
            gen_crd: true,
            gen_install: true,
        }
    }
}

/// Emits the Go files for a set of groups.
///
/// Groups are compiled in parallel, but files are registered in group
/// name order so the output never depends on scheduling.
pub struct Generator<R> {
    groups: Vec<Group<R>>,
    packages: Vec<Package>,
    options: GeneratorOptions,
}

impl<R: Resource> Generator<R> {
    /// Definitions in protected groups are annotated here, once, before
    /// anything is compiled.
    pub fn new(groups: Vec<Group<R>>, packages: Vec<Package>, options: GeneratorOptions) -> Self {
        let mut groups = groups;
        groups.sort_by(|a, b| a.name().cmp(b.name()));
        for group in groups.iter_mut().filter(|g| is_protected_group(g.name())) {
            debug!(group = group.name(), "annotating protected group");
            for definition in group.definitions_mut() {
                definition.annotate(API_APPROVED_ANNOTATION, API_APPROVED_URL);
            }
        }
        Self {
            groups,
            packages,
            options,
        }
    }

    pub fn groups(&self) -> &[Group<R>] {
        &self.groups
    }

    /// Render every file without touching the disk. Fails when two groups
    /// resolve to the same output directory.
    pub fn render(&self) -> Result<FileRegistry> {
        self.check_layouts()?;
        let emitted = self
            .groups
            .par_iter()
            .filter(|group| !group.is_empty())
            .map(|group| self.emit_group(group))
            .collect::<Result<Vec<_>>>()?;

        let mut registry = FileRegistry::new();
        for entries in emitted {
            registry.register_all(entries);
        }
        if self.options.gen_install && self.groups.iter().any(|g| !g.is_empty()) {
            registry.register(self.emit_scheme());
        }
        Ok(registry)
    }

    fn check_layouts(&self) -> Result<()> {
        let mut owners: BTreeMap<String, &str> = BTreeMap::new();
        for group in self.groups.iter().filter(|g| !g.is_empty()) {
            let layout = GroupLayout::resolve(group.name(), &self.packages);
            if let Some(first) = owners.insert(layout.dir.clone(), group.name()) {
                bail!(
                    "groups '{first}' and '{}' both resolve to output directory '{}'",
                    group.name(),
                    layout.dir
                );
            }
        }
        Ok(())
    }

    /// The files of one group: its install file, then its constructors.
    pub fn emit_group(&self, group: &Group<R>) -> Result<Vec<FileEntry>> {
        let layout = GroupLayout::resolve(group.name(), &self.packages);
        debug!(
            group = group.name(),
            dir = %layout.dir,
            definitions = group.len(),
            "emitting group"
        );

        let mut entries = Vec::new();
        if self.options.gen_install {
            let packages = self
                .packages
                .iter()
                .filter(|p| p.group == group.name())
                .map(|p| p.path.clone());
            let file = GroupInstallFile::new(&layout.dir, packages, self.options.header.clone());
            entries.push(FileEntry::new(file.relative_path(), file.render()));
        }
        if self.options.gen_crd {
            let file = GroupCrdFile::compile(group, &layout.dir, &layout.package, &self.options.header)
                .wrap_err_with(|| format!("failed to compile group '{}'", group.name()))?;
            entries.push(FileEntry::new(file.relative_path(), file.render()));
        }
        Ok(entries)
    }

    pub fn emit_scheme(&self) -> FileEntry {
        let packages = self.packages.iter().map(|p| p.path.clone());
        let file = SchemeFile::new(packages, self.options.header.clone());
        FileEntry::new(file.relative_path(), file.render())
    }

    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self.render()?.preview())
    }

    /// Render everything, then write it below `output`.
    pub fn generate(&self, output: &Path) -> Result<GenerateResult> {
        let registry = self.render()?;
        let result = registry.write_all(output)?;
        for path in &result.written {
            info!(path = %path.display(), "wrote file");
        }
        Ok(result)
    }
}
