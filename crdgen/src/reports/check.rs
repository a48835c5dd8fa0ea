//! Check command report data structures.

use std::path::PathBuf;

use super::GroupSummary;
use super::output::{Output, Report};

/// Report data from config and manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub groups: Vec<GroupSummary>,
    /// Number of files the enabled generators would emit.
    pub file_count: usize,
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        let count = self.groups.len();
        out.section(&format!("{} group{}", count, if count == 1 { "" } else { "s" }));
        for group in &self.groups {
            out.list_item(&group.name);
            for definition in &group.definitions {
                out.preformatted(&format!("      {}", definition));
            }
        }
        out.newline();
        out.key_value("Files", &self.file_count.to_string());
    }
}
