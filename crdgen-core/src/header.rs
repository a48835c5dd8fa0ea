//! Headers prepended to every generated file.

use std::path::Path;

use eyre::{Context, Result};

/// Build constraint excluding generated files from `ignore_autogenerated` builds.
pub const BUILD_TAG: &str = "// +build !ignore_autogenerated";

/// Marker recognised by tooling as "machine generated, do not edit".
pub const GENERATED_MARKER: &str = "// Code generated by crd-gen. DO NOT EDIT.";

/// License/header block read from a boilerplate file.
///
/// Every `" YEAR"` token is replaced with the configured year when the
/// boilerplate is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boilerplate {
    text: String,
}

impl Boilerplate {
    /// Create a boilerplate from raw text, substituting the year token.
    pub fn new(text: impl AsRef<str>, year: &str) -> Self {
        Self {
            text: text.as_ref().replace(" YEAR", &format!(" {}", year)),
        }
    }

    /// Read a boilerplate file from disk.
    pub fn load(path: &Path, year: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read header file '{}'", path.display()))?;
        Ok(Self::new(text, year))
    }

    /// The header text with surrounding blank lines removed.
    pub fn text(&self) -> &str {
        self.text.trim_matches('\n')
    }

    /// Whether there is any header to emit.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_year_substitution() {
        let header = Boilerplate::new("// Copyright YEAR The Authors.\n", "2026");
        assert_eq!(header.text(), "// Copyright 2026 The Authors.");
    }

    #[test]
    fn test_year_token_needs_leading_space() {
        let header = Boilerplate::new("// YEARLY report", "2026");
        assert_eq!(header.text(), "// YEARLY report");
    }

    #[test]
    fn test_empty_header() {
        assert!(Boilerplate::default().is_empty());
        assert!(Boilerplate::new("\n\n", "2026").is_empty());
        assert!(!Boilerplate::new("/* x */", "2026").is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Boilerplate::load(&temp.path().join("nope.txt"), "2026").unwrap_err();
        assert!(err.to_string().contains("failed to read header file"));
    }

    #[test]
    fn test_load_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("boilerplate.go.txt");
        std::fs::write(&path, "/*\nCopyright YEAR Example.\n*/\n").unwrap();

        let header = Boilerplate::load(&path, "2025").unwrap();
        assert_eq!(header.text(), "/*\nCopyright 2025 Example.\n*/");
    }
}
