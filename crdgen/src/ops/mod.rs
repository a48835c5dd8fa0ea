//! Core operations.
//!
//! This module contains the business logic for crdgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::generate;

use chrono::Datelike;
use crdgen_apis::CustomResourceDefinition;
use crdgen_codegen_go::GeneratorOptions;
use crdgen_core::Boilerplate;
use crdgen_ir::{Group, Resource};
use crdgen_manifest::CrdgenToml;
use eyre::Result;

use crate::generators::GeneratorKind;
use crate::reports::GroupSummary;

/// Header and enabled generators for the emitter.
pub fn generator_options(file: &CrdgenToml, enabled: &[GeneratorKind]) -> Result<GeneratorOptions> {
    let year = match &file.config().generator.year {
        Some(year) => year.clone(),
        None => chrono::Local::now().year().to_string(),
    };
    let header = match file.header_file() {
        Some(path) => Boilerplate::load(&path, &year)?,
        None => Boilerplate::default(),
    };
    Ok(GeneratorOptions {
        header,
        gen_crd: enabled.contains(&GeneratorKind::Crd),
        gen_install: enabled.contains(&GeneratorKind::Install),
    })
}

pub fn summarize(groups: &[Group<CustomResourceDefinition>]) -> Vec<GroupSummary> {
    groups
        .iter()
        .filter(|group| !group.is_empty())
        .map(|group| GroupSummary {
            name: group.name().to_string(),
            definitions: group.definitions().map(|(_, crd)| crd.definition_name().to_string()).collect(),
        })
        .collect()
}
