//! `crdgen.toml` configuration and CRD manifest loading for crdgen.
//!
//! Manifests are JSON `CustomResourceDefinition` objects. Loading applies
//! the parse-phase policies (description truncation, dangerous type
//! rejection, duplicate detection) and groups definitions by API group.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod load;
mod truncate;
mod validate;

pub use config::{Config, GeneratorConfig, InputConfig, PackageConfig, parse_config};
pub use error::{Error, Result, SourceContext};
pub use file::{CONFIG_FILE, CrdgenToml};
pub use load::{LoadOptions, collect_manifest_files, load_groups, read_manifest};
pub use truncate::{truncate_description, truncate_descriptions};
pub use validate::check_dangerous_types;
