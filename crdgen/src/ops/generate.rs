//! Generate operation - emit Go files for the loaded groups.

use std::path::Path;

use crdgen_apis::CustomResourceDefinition;
use crdgen_codegen_go::{Generator, GeneratorOptions};
use crdgen_ir::{Group, Package};
use eyre::{Context, Result};

use super::summarize;
use crate::generators::GeneratorKind;
use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    pub generators: Vec<GeneratorKind>,
    pub emitter: GeneratorOptions,
}

/// Execute the generate operation.
pub fn generate(
    groups: Vec<Group<CustomResourceDefinition>>,
    packages: Vec<Package>,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator = Generator::new(groups, packages, opts.emitter);
    let groups = summarize(generator.groups());

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview()?)
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written {
            output_dir: opts.output_dir.to_path_buf(),
            files: written.written,
        }
    };

    Ok(GenerateReport {
        groups,
        generators: opts.generators,
        result,
    })
}
