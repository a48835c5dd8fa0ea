//! Shared code generation utilities for crdgen.
//!
//! This crate provides language-agnostic abstractions used by the
//! Go generator in `crdgen-codegen-go`.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text writer (CodeBuilder)
//! - [`generation`] - Output management (ImportCollector, FileRegistry)

pub mod builder;
pub mod generation;
