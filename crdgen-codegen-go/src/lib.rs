//! Go code generation for crdgen.
//!
//! Quoted values are compiled into Go constructor expressions by
//! [`ValueCompiler`]; [`Generator`] arranges the constructors of each API
//! group into files.
//!
//! - [`ast`] - Go syntax tree
//! - [`files`] - the generated files
//! - [`testing`] - evaluator for emitted expressions (feature-gated)

mod compiler;
mod error;
mod generator;
mod go_file;
mod imports;
mod literal;
mod naming;
mod printer;

pub mod ast;
pub mod files;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use compiler::{RenderContext, ValueCompiler, type_expr};
pub use error::{QuoteError, Result};
pub use generator::{Generator, GeneratorOptions};
pub use go_file::GoFile;
pub use imports::{GoImports, guess_alias};
pub use naming::{
    AGGREGATOR, API_APPROVED_ANNOTATION, API_APPROVED_URL, GroupLayout, constructor_name, install_alias,
    is_protected_group,
};
pub use printer::{Printer, QualResolver};
