//! Rust models of the Kubernetes API types crdgen embeds into Go source.
//!
//! Every type mirrors its Go counterpart field for field: serde handles the
//! JSON wire format and the [`Quote`](crdgen_ir::Quote) impls describe the
//! Go layout (package path, type name, exported field names).

pub mod apiextensions;
pub mod meta;

mod bytes;

pub use apiextensions::CustomResourceDefinition;
pub use meta::{ObjectMeta, Time, TypeMeta};

/// `k8s.io/apimachinery/pkg/apis/meta/v1`
pub const META_V1: &str = "k8s.io/apimachinery/pkg/apis/meta/v1";

/// `k8s.io/apiextensions-apiserver/pkg/apis/apiextensions/v1`
pub const APIEXTENSIONS_V1: &str = "k8s.io/apiextensions-apiserver/pkg/apis/apiextensions/v1";

/// `k8s.io/apiextensions-apiserver/pkg/apis/apiextensions/v1beta1`
pub const APIEXTENSIONS_V1BETA1: &str = "k8s.io/apiextensions-apiserver/pkg/apis/apiextensions/v1beta1";

/// `k8s.io/apimachinery/pkg/types`
pub const TYPES: &str = "k8s.io/apimachinery/pkg/types";
