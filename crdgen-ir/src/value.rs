//! Quoted values.

use crate::types::{Kind, ScalarKind, TypeDescriptor};

/// Payload of a scalar value.
///
/// Signed kinds are widened to `i64`, unsigned kinds to `u64` and
/// `float32` to `f64`; the exact kind is carried by the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
}

impl Scalar {
    pub fn zero(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Bool => Scalar::Bool(false),
            ScalarKind::String => Scalar::String(String::new()),
            ScalarKind::Float32 | ScalarKind::Float64 => Scalar::Float(0.0),
            k if k.is_unsigned() => Scalar::Uint(0),
            _ => Scalar::Int(0),
        }
    }

    /// Go zero-value test. Negative zero is not the zero float.
    pub fn is_zero(&self) -> bool {
        match self {
            Scalar::Bool(b) => !b,
            Scalar::Int(i) => *i == 0,
            Scalar::Uint(u) => *u == 0,
            Scalar::Float(f) => f.to_bits() == 0,
            Scalar::String(s) => s.is_empty(),
        }
    }
}

/// Record payload.
///
/// `fields` is aligned with the descriptor's field list, hidden fields
/// included. `encoded` holds the JSON form of records that cannot be
/// spelled as composite literals, or the reason encoding failed.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordData {
    pub fields: Vec<Value>,
    pub encoded: Option<Result<String, String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    Scalar(Scalar),
    /// `None` is the nil pointer.
    Pointer(Option<Box<Value>>),
    /// Elements of a slice or array. An empty slice is Go's nil slice.
    Sequence(Vec<Value>),
    /// Map entries; order is not significant.
    Mapping(Vec<(Value, Value)>),
    Record(RecordData),
    Unsupported,
}

/// A value paired with its type.
#[derive(Debug, Clone)]
pub struct Value {
    ty: TypeDescriptor,
    data: Data,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Value {
    pub fn new(ty: TypeDescriptor, data: Data) -> Self {
        Self { ty, data }
    }

    pub fn scalar(ty: TypeDescriptor, scalar: Scalar) -> Self {
        Self::new(ty, Data::Scalar(scalar))
    }

    pub fn pointer(ty: TypeDescriptor, target: Option<Value>) -> Self {
        Self::new(ty, Data::Pointer(target.map(Box::new)))
    }

    pub fn sequence(ty: TypeDescriptor, items: Vec<Value>) -> Self {
        Self::new(ty, Data::Sequence(items))
    }

    pub fn mapping(ty: TypeDescriptor, entries: Vec<(Value, Value)>) -> Self {
        Self::new(ty, Data::Mapping(entries))
    }

    pub fn record(ty: TypeDescriptor, fields: Vec<Value>) -> Self {
        Self::new(ty, Data::Record(RecordData { fields, encoded: None }))
    }

    pub fn unsupported(ty: TypeDescriptor) -> Self {
        Self::new(ty, Data::Unsupported)
    }

    /// Attach the JSON encoding used for opaque records. No effect on
    /// other kinds.
    pub fn with_encoding(mut self, encoded: Result<String, String>) -> Self {
        if let Data::Record(record) = &mut self.data {
            record.encoded = Some(encoded);
        }
        self
    }

    /// Replace the descriptor, keeping the data. Used for declared types
    /// that wrap a built-in representation.
    pub fn retyped(mut self, ty: TypeDescriptor) -> Self {
        self.ty = ty;
        self
    }

    /// The zero value of `ty`.
    pub fn zero(ty: &TypeDescriptor) -> Self {
        let data = match &ty.kind {
            Kind::Scalar(kind) => Data::Scalar(Scalar::zero(*kind)),
            Kind::Pointer(_) => Data::Pointer(None),
            Kind::Sequence { elem, len } => {
                Data::Sequence((0..len.unwrap_or(0)).map(|_| Value::zero(elem)).collect())
            }
            Kind::Mapping { .. } => Data::Mapping(Vec::new()),
            Kind::Record(fields) => Data::Record(RecordData {
                fields: fields.iter().map(|f| Value::zero(&f.ty())).collect(),
                encoded: None,
            }),
            Kind::Unsupported(_) => Data::Unsupported,
        };
        Self::new(ty.clone(), data)
    }

    pub fn classify(&self) -> &TypeDescriptor {
        &self.ty
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Go zero-value semantics: nil pointers, slices and maps, empty
    /// strings, false, numeric zero and records whose fields are all zero.
    pub fn is_zero(&self) -> bool {
        match &self.data {
            Data::Scalar(scalar) => scalar.is_zero(),
            Data::Pointer(target) => target.is_none(),
            Data::Sequence(items) => match self.ty.kind {
                Kind::Sequence { len: Some(_), .. } => items.iter().all(Value::is_zero),
                _ => items.is_empty(),
            },
            Data::Mapping(entries) => entries.is_empty(),
            Data::Record(record) => record.fields.iter().all(Value::is_zero),
            Data::Unsupported => true,
        }
    }
}
