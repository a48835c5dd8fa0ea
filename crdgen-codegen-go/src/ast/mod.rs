//! Go syntax tree for the subset crdgen emits.
//!
//! Nodes are import-agnostic: qualified identifiers keep their full import
//! path and only receive a local alias when a file prints them.

mod decl;
mod expr;
mod stmt;

pub use decl::FuncDecl;
pub use expr::{Element, Expr};
pub use stmt::Stmt;
