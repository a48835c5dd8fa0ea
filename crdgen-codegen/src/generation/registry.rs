//! File registration for declarative code generation.
//!
//! Generators render every output file into a [`FileRegistry`] before
//! anything touches the disk. The registry is then either previewed
//! (dry run) or written in registration order.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::new("apps/zz.generated.crd.go", crd.render()));
//! registry.register(FileEntry::new("install/zz.generated.scheme.go", scheme.render()));
//! registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use crdgen_core::{GenerateResult, GeneratedFile, PreviewFile};
use eyre::Result;

/// A rendered file, relative to the output directory.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: String,
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

impl GeneratedFile for FileEntry {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file. A later entry with the same path replaces the
    /// earlier one in place.
    pub fn register(&mut self, entry: FileEntry) {
        match self.entries.iter_mut().find(|e| e.path == entry.path) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        for entry in entries {
            self.register(entry);
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn preview(&self) -> Vec<PreviewFile> {
        self.entries
            .iter()
            .map(|e| PreviewFile {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect()
    }

    /// Write every registered file below `base`, stopping at the first
    /// failure.
    pub fn write_all(&self, base: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for entry in &self.entries {
            result.written.push(entry.write(base)?);
        }
        Ok(result)
    }
}
