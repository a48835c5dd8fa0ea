//! Intermediate representation for the crdgen value quoter.
//!
//! Values that should be embedded as Go constructor expressions are first
//! lowered into a [`Value`] tree. Every node carries its [`TypeDescriptor`],
//! which is produced statically by the [`Quote`] trait instead of runtime
//! reflection.
//!
//! # Architecture
//!
//! ```text
//! CRD manifests -> crdgen-manifest (parsing) -> crdgen-apis (typed objects)
//!     -> crdgen-ir (Quote -> Value) -> crdgen-codegen-go (Go source)
//! ```
//!
//! The IR is self-contained: no external dependencies beyond std.

mod group;
mod quote;
mod types;
mod value;

pub use group::{Group, Package, Resource};
pub use quote::{Quote, Uintptr};
pub use types::{DescriptorFn, FieldDescriptor, Kind, ScalarKind, TypeDescriptor, TypeName, Unsupported};
pub use value::{Data, RecordData, Scalar, Value};
