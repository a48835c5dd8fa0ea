//! The [`Quote`] trait and its implementations for std types.
//!
//! Declared Go types are described with [`quote_record!`](crate::quote_record)
//! and [`quote_named!`](crate::quote_named).

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::mpsc::Sender;

use indexmap::IndexMap;

use crate::types::{ScalarKind, TypeDescriptor};
use crate::value::{Scalar, Value};

/// Types that can be lowered into a typed [`Value`] tree.
pub trait Quote: Sized {
    /// Static type information shared by every value of this type.
    fn descriptor() -> TypeDescriptor;

    fn quote(&self) -> Value;
}

/// Go `uintptr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Uintptr(pub usize);

macro_rules! quote_scalar {
    ($($ty:ty => $kind:ident, |$v:ident| $payload:expr;)*) => {
        $(
            impl Quote for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::scalar(ScalarKind::$kind)
                }

                fn quote(&self) -> Value {
                    let $v = self;
                    Value::scalar(Self::descriptor(), $payload)
                }
            }
        )*
    };
}

quote_scalar! {
    bool => Bool, |v| Scalar::Bool(*v);
    isize => Int, |v| Scalar::Int(*v as i64);
    i8 => Int8, |v| Scalar::Int(i64::from(*v));
    i16 => Int16, |v| Scalar::Int(i64::from(*v));
    i32 => Int32, |v| Scalar::Int(i64::from(*v));
    i64 => Int64, |v| Scalar::Int(*v);
    usize => Uint, |v| Scalar::Uint(*v as u64);
    u8 => Uint8, |v| Scalar::Uint(u64::from(*v));
    u16 => Uint16, |v| Scalar::Uint(u64::from(*v));
    u32 => Uint32, |v| Scalar::Uint(u64::from(*v));
    u64 => Uint64, |v| Scalar::Uint(*v);
    Uintptr => Uintptr, |v| Scalar::Uint(v.0 as u64);
    f32 => Float32, |v| Scalar::Float(f64::from(*v));
    f64 => Float64, |v| Scalar::Float(*v);
    String => String, |v| Scalar::String(v.clone());
}

impl Quote for &str {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::scalar(ScalarKind::String)
    }

    fn quote(&self) -> Value {
        Value::scalar(Self::descriptor(), Scalar::String((*self).to_string()))
    }
}

impl<T: Quote> Quote for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer(T::descriptor())
    }

    fn quote(&self) -> Value {
        Value::pointer(Self::descriptor(), self.as_ref().map(Quote::quote))
    }
}

/// Boxing is a storage detail and does not show up in the Go type.
impl<T: Quote> Quote for Box<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }

    fn quote(&self) -> Value {
        (**self).quote()
    }
}

impl<T: Quote> Quote for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::slice(T::descriptor())
    }

    fn quote(&self) -> Value {
        Value::sequence(Self::descriptor(), self.iter().map(Quote::quote).collect())
    }
}

impl<T: Quote, const N: usize> Quote for [T; N] {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::array(T::descriptor(), N)
    }

    fn quote(&self) -> Value {
        Value::sequence(Self::descriptor(), self.iter().map(Quote::quote).collect())
    }
}

impl<K: Quote, V: Quote> Quote for BTreeMap<K, V> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::map(K::descriptor(), V::descriptor())
    }

    fn quote(&self) -> Value {
        let entries = self.iter().map(|(k, v)| (k.quote(), v.quote())).collect();
        Value::mapping(Self::descriptor(), entries)
    }
}

impl<K: Quote, V: Quote, S: BuildHasher> Quote for HashMap<K, V, S> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::map(K::descriptor(), V::descriptor())
    }

    fn quote(&self) -> Value {
        let entries = self.iter().map(|(k, v)| (k.quote(), v.quote())).collect();
        Value::mapping(Self::descriptor(), entries)
    }
}

impl<K: Quote, V: Quote, S: BuildHasher> Quote for IndexMap<K, V, S> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::map(K::descriptor(), V::descriptor())
    }

    fn quote(&self) -> Value {
        let entries = self.iter().map(|(k, v)| (k.quote(), v.quote())).collect();
        Value::mapping(Self::descriptor(), entries)
    }
}

impl<T: Quote> Quote for Sender<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::chan(T::descriptor())
    }

    fn quote(&self) -> Value {
        Value::unsupported(Self::descriptor())
    }
}

impl Quote for fn() {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::func()
    }

    fn quote(&self) -> Value {
        Value::unsupported(Self::descriptor())
    }
}

/// Implement [`Quote`] for a struct that mirrors a declared Go struct.
///
/// ```
/// use crdgen_ir::quote_record;
///
/// #[derive(Clone, Default)]
/// struct Spec {
///     replicas: Option<i32>,
///     image: String,
/// }
///
/// quote_record!(Spec => "example.com/api/v1", "Spec" {
///     "Replicas" => replicas: Option<i32>,
///     "Image" => image: String,
/// });
/// ```
#[macro_export]
macro_rules! quote_record {
    (
        $ty:ty => $package:expr, $name:literal {
            $( $go:literal => $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        impl $crate::Quote for $ty {
            fn descriptor() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::record(
                    ::core::option::Option::Some($crate::TypeName::new($package, $name)),
                    ::std::vec![
                        $( $crate::FieldDescriptor::visible($go, <$fty as $crate::Quote>::descriptor) ),*
                    ],
                )
            }

            fn quote(&self) -> $crate::Value {
                $crate::Value::record(
                    <Self as $crate::Quote>::descriptor(),
                    ::std::vec![ $( $crate::Quote::quote(&self.$field) ),* ],
                )
            }
        }
    };
}

/// Implement [`Quote`] for a tuple struct wrapping a built-in
/// representation under a declared Go name (`type Phase string`).
#[macro_export]
macro_rules! quote_named {
    ($ty:ty => $package:expr, $name:literal, $inner:ty) => {
        impl $crate::Quote for $ty {
            fn descriptor() -> $crate::TypeDescriptor {
                <$inner as $crate::Quote>::descriptor().named($crate::TypeName::new($package, $name))
            }

            fn quote(&self) -> $crate::Value {
                $crate::Quote::quote(&self.0).retyped(<Self as $crate::Quote>::descriptor())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Kind;
    use crate::value::Data;

    #[derive(Clone, Default)]
    struct Phase(String);

    quote_named!(Phase => "example.com/api/v1", "Phase", String);

    #[derive(Clone, Default)]
    struct Status {
        phase: Phase,
        ready: Option<bool>,
        conditions: Vec<String>,
    }

    quote_record!(Status => "example.com/api/v1", "Status" {
        "Phase" => phase: Phase,
        "Ready" => ready: Option<bool>,
        "Conditions" => conditions: Vec<String>,
    });

    #[test]
    fn test_scalar_descriptors() {
        assert_eq!(u8::descriptor().scalar_kind(), Some(ScalarKind::Uint8));
        assert_eq!(usize::descriptor().scalar_kind(), Some(ScalarKind::Uint));
        assert_eq!(Uintptr::descriptor().scalar_kind(), Some(ScalarKind::Uintptr));
        assert_eq!(f32::descriptor().scalar_kind(), Some(ScalarKind::Float32));
    }

    #[test]
    fn test_widening() {
        assert_eq!(*(-3i8).quote().data(), Data::Scalar(Scalar::Int(-3)));
        assert_eq!(*255u8.quote().data(), Data::Scalar(Scalar::Uint(255)));
        assert_eq!(*1.5f32.quote().data(), Data::Scalar(Scalar::Float(1.5)));
    }

    #[test]
    fn test_str_and_string_agree() {
        assert_eq!("x".quote(), String::from("x").quote());
    }

    #[test]
    fn test_map_entries() {
        let mut map = IndexMap::new();
        map.insert("b".to_string(), 2u32);
        map.insert("a".to_string(), 1u32);
        match map.quote().data() {
            Data::Mapping(entries) => assert_eq!(entries.len(), 2),
            other => panic!("expected mapping, got {other:?}"),
        }
        assert!(BTreeMap::<String, u32>::new().quote().is_zero());
    }

    #[test]
    fn test_option_is_pointer() {
        let value = Some(5i32).quote();
        assert!(matches!(value.classify().kind, Kind::Pointer(_)));
        assert!(None::<i32>.quote().is_zero());
    }

    #[test]
    fn test_box_is_transparent() {
        let value = Box::new(4u16).quote();
        assert_eq!(value.classify().scalar_kind(), Some(ScalarKind::Uint16));
    }

    #[test]
    fn test_array_len() {
        match <[u8; 4]>::descriptor().kind {
            Kind::Sequence { len, .. } => assert_eq!(len, Some(4)),
            other => panic!("expected sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_kinds() {
        let (tx, _rx) = std::sync::mpsc::channel::<i32>();
        assert!(tx.quote().classify().is_unsupported());
        let f: fn() = || {};
        assert!(f.quote().classify().is_unsupported());
    }

    #[test]
    fn test_named_scalar() {
        let value = Phase("Running".into()).quote();
        let name = value.classify().name.as_ref().map(|n| n.name.as_str());
        assert_eq!(name, Some("Phase"));
        assert_eq!(*value.data(), Data::Scalar(Scalar::String("Running".into())));
    }

    #[test]
    fn test_record_fields_in_order() {
        let status = Status {
            phase: Phase("Ready".into()),
            ready: Some(true),
            conditions: vec!["a".into()],
        };
        let value = status.quote();
        let names: Vec<_> = value.classify().fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["Phase", "Ready", "Conditions"]);
        match value.data() {
            Data::Record(record) => assert_eq!(record.fields.len(), 3),
            other => panic!("expected record, got {other:?}"),
        }
        assert!(Status::default().quote().is_zero());
    }
}
