//! Generate command report data structures.

use std::path::PathBuf;

use crdgen_core::PreviewFile;

use super::output::{Output, Report};
use crate::generators::GeneratorKind;

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Groups that were emitted, sorted by name.
    pub groups: Vec<GroupSummary>,

    /// Generators that ran.
    pub generators: Vec<GeneratorKind>,

    pub result: GenerationResult,
}

/// One API group and the definitions in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub name: String,
    pub definitions: Vec<String>,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        files: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl GenerateReport {
    pub fn definition_count(&self) -> usize {
        self.groups.iter().map(|g| g.definitions.len()).sum()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
            }
            GenerationResult::Written { output_dir, files } => {
                let generators: Vec<&str> = self.generators.iter().map(|g| g.name()).collect();
                out.key_value("Generators", &generators.join(", "));
                out.section(&format!(
                    "Groups ({}, {} definitions)",
                    self.groups.len(),
                    self.definition_count()
                ));
                for group in &self.groups {
                    out.list_item(&format!("{} [{}]", group.name, group.definitions.join(", ")));
                }
                out.newline();
                out.section(&format!("Wrote {} files to {}", files.len(), output_dir.display()));
                for file in files {
                    let shown = file.strip_prefix(output_dir).unwrap_or(file.as_path());
                    out.added_item(&shown.display().to_string());
                }
            }
        }
    }
}
