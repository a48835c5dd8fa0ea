//! Generated output management.
//!
//! - [`ImportCollector`] - Import path to alias allocation
//! - [`FileRegistry`] - Rendered files awaiting preview or write

mod imports;
mod registry;

pub use imports::ImportCollector;
pub use registry::{FileEntry, FileRegistry};
