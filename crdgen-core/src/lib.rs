//! Core utilities and types for the crdgen generator.
//!
//! This crate provides fundamental types and utilities used across
//! the crdgen workspace.

mod codegen;
mod file;
mod header;
mod utils;

pub use codegen::{GenerateResult, PreviewFile};
// File operations
pub use file::GeneratedFile;
pub use header::{Boilerplate, BUILD_TAG, GENERATED_MARKER};
// String utilities
pub use utils::{capitalize, path_base, path_dir};
