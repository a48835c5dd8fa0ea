//! Type descriptors.
//!
//! A [`TypeDescriptor`] is the static type information that accompanies
//! every quoted [`Value`](crate::Value). It records the structural kind
//! and, for declared types, the Go package path and name.

use std::fmt;

/// Built-in scalar kinds understood by the quoter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    String,
}

impl ScalarKind {
    /// The predeclared Go identifier for this kind.
    pub fn go_name(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::Int8 => "int8",
            ScalarKind::Int16 => "int16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint => "uint",
            ScalarKind::Uint8 => "uint8",
            ScalarKind::Uint16 => "uint16",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Uintptr => "uintptr",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
            ScalarKind::String => "string",
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            ScalarKind::Int | ScalarKind::Int8 | ScalarKind::Int16 | ScalarKind::Int32 | ScalarKind::Int64
        )
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            ScalarKind::Uint
                | ScalarKind::Uint8
                | ScalarKind::Uint16
                | ScalarKind::Uint32
                | ScalarKind::Uint64
                | ScalarKind::Uintptr
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ScalarKind::Float32 | ScalarKind::Float64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.go_name())
    }
}

/// A declared type: Go import path plus identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName {
    pub package: String,
    pub name: String,
}

impl TypeName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.name)
    }
}

/// Lazily evaluated descriptor, used for record fields so that
/// self-referential types do not recurse while being described.
pub type DescriptorFn = fn() -> TypeDescriptor;

/// One field of a record type, in declaration order.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    ty: DescriptorFn,
    pub visible: bool,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, ty: DescriptorFn, visible: bool) -> Self {
        Self { name, ty, visible }
    }

    /// An exported field.
    pub fn visible(name: &'static str, ty: DescriptorFn) -> Self {
        Self::new(name, ty, true)
    }

    /// An unexported field. Its presence forces the opaque encoding path.
    pub fn hidden(name: &'static str, ty: DescriptorFn) -> Self {
        Self::new(name, ty, false)
    }

    pub fn ty(&self) -> TypeDescriptor {
        (self.ty)()
    }
}

/// Kinds the quoter recognizes but cannot express as Go literals.
#[derive(Debug, Clone)]
pub enum Unsupported {
    Chan(Box<TypeDescriptor>),
    Func,
}

/// Structural shape of a type.
#[derive(Debug, Clone)]
pub enum Kind {
    Scalar(ScalarKind),
    Pointer(Box<TypeDescriptor>),
    /// A slice when `len` is `None`, a fixed-size array otherwise.
    Sequence {
        elem: Box<TypeDescriptor>,
        len: Option<usize>,
    },
    Mapping {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },
    Record(Vec<FieldDescriptor>),
    Unsupported(Unsupported),
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Scalar(_) => "scalar",
            Kind::Pointer(_) => "pointer",
            Kind::Sequence { len: None, .. } => "slice",
            Kind::Sequence { len: Some(_), .. } => "array",
            Kind::Mapping { .. } => "map",
            Kind::Record(_) => "struct",
            Kind::Unsupported(Unsupported::Chan(_)) => "chan",
            Kind::Unsupported(Unsupported::Func) => "func",
        }
    }
}

/// Static type information for a quoted value.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub kind: Kind,
    /// Present for declared (custom named) types.
    pub name: Option<TypeName>,
}

impl TypeDescriptor {
    pub fn new(kind: Kind) -> Self {
        Self { kind, name: None }
    }

    pub fn scalar(kind: ScalarKind) -> Self {
        Self::new(Kind::Scalar(kind))
    }

    pub fn pointer(elem: TypeDescriptor) -> Self {
        Self::new(Kind::Pointer(Box::new(elem)))
    }

    pub fn slice(elem: TypeDescriptor) -> Self {
        Self::new(Kind::Sequence {
            elem: Box::new(elem),
            len: None,
        })
    }

    pub fn array(elem: TypeDescriptor, len: usize) -> Self {
        Self::new(Kind::Sequence {
            elem: Box::new(elem),
            len: Some(len),
        })
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::new(Kind::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    pub fn record(name: Option<TypeName>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            kind: Kind::Record(fields),
            name,
        }
    }

    pub fn chan(elem: TypeDescriptor) -> Self {
        Self::new(Kind::Unsupported(Unsupported::Chan(Box::new(elem))))
    }

    pub fn func() -> Self {
        Self::new(Kind::Unsupported(Unsupported::Func))
    }

    /// Attach a declared name, turning this into a custom named type.
    pub fn named(mut self, name: TypeName) -> Self {
        self.name = Some(name);
        self
    }

    /// True when the type was declared rather than being a built-in or
    /// an unnamed composite.
    pub fn is_custom_named(&self) -> bool {
        self.name.is_some()
    }

    /// True for unnamed record types (`struct{...}` literals).
    pub fn is_anonymous(&self) -> bool {
        matches!(self.kind, Kind::Record(_)) && self.name.is_none()
    }

    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self.kind {
            Kind::Scalar(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        match &self.kind {
            Kind::Record(fields) => fields,
            _ => &[],
        }
    }

    /// Records with at least one unexported field cannot be spelled as a
    /// composite literal from another package.
    pub fn has_hidden_fields(&self) -> bool {
        self.fields().iter().any(|f| !f.visible)
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, Kind::Unsupported(_))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            return name.fmt(f);
        }
        match &self.kind {
            Kind::Scalar(kind) => kind.fmt(f),
            Kind::Pointer(elem) => write!(f, "*{elem}"),
            Kind::Sequence { elem, len: None } => write!(f, "[]{elem}"),
            Kind::Sequence { elem, len: Some(n) } => write!(f, "[{n}]{elem}"),
            Kind::Mapping { key, value } => write!(f, "map[{key}]{value}"),
            Kind::Record(fields) => {
                f.write_str("struct{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{} {}", field.name, field.ty())?;
                }
                f.write_str("}")
            }
            Kind::Unsupported(Unsupported::Chan(elem)) => write!(f, "chan {elem}"),
            Kind::Unsupported(Unsupported::Func) => f.write_str("func()"),
        }
    }
}
