use super::Stmt;

/// A Go expression. Types are expressions too (`[]string`, `*T`,
/// `map[K]V`), as they are in Go's own syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Predeclared or local identifier: `int32`, `nil`, `obj`.
    Ident(String),
    /// Identifier exported by another package.
    Qual { path: String, name: String },
    /// A literal token, already spelled in Go syntax.
    Lit(String),
    Call { func: Box<Expr>, args: Vec<Expr> },
    Paren(Box<Expr>),
    /// `&x`
    AddressOf(Box<Expr>),
    /// `*x`, a pointer type or a dereference.
    Star(Box<Expr>),
    /// `T{...}`. `ty` is `None` when the enclosing literal supplies it.
    Composite { ty: Option<Box<Expr>>, elems: Vec<Element> },
    /// `func() T { ... }`
    FuncLit { result: Box<Expr>, body: Vec<Stmt> },
    SliceType(Box<Expr>),
    ArrayType(usize, Box<Expr>),
    MapType(Box<Expr>, Box<Expr>),
    StructType(Vec<(String, Expr)>),
    ChanType(Box<Expr>),
    FuncType,
}

/// One entry of a composite literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Value(Expr),
    Keyed(Expr, Expr),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn qual(path: impl Into<String>, name: impl Into<String>) -> Self {
        Expr::Qual {
            path: path.into(),
            name: name.into(),
        }
    }

    pub fn lit(token: impl Into<String>) -> Self {
        Expr::Lit(token.into())
    }

    pub fn nil() -> Self {
        Expr::ident("nil")
    }

    pub fn call(self, args: Vec<Expr>) -> Self {
        Expr::Call {
            func: Box::new(self),
            args,
        }
    }

    pub fn paren(self) -> Self {
        Expr::Paren(Box::new(self))
    }

    pub fn address_of(self) -> Self {
        Expr::AddressOf(Box::new(self))
    }

    pub fn star(self) -> Self {
        Expr::Star(Box::new(self))
    }

    pub fn composite(ty: Option<Expr>, elems: Vec<Element>) -> Self {
        Expr::Composite {
            ty: ty.map(Box::new),
            elems,
        }
    }

    pub fn func_lit(result: Expr, body: Vec<Stmt>) -> Self {
        Expr::FuncLit {
            result: Box::new(result),
            body,
        }
    }

    /// `(func() T { ... })()`
    pub fn invoke(self) -> Self {
        self.paren().call(Vec::new())
    }

    pub fn slice_of(elem: Expr) -> Self {
        Expr::SliceType(Box::new(elem))
    }

    pub fn array_of(len: usize, elem: Expr) -> Self {
        Expr::ArrayType(len, Box::new(elem))
    }

    pub fn map_of(key: Expr, value: Expr) -> Self {
        Expr::MapType(Box::new(key), Box::new(value))
    }

    pub fn chan_of(elem: Expr) -> Self {
        Expr::ChanType(Box::new(elem))
    }

    /// Visit every qualified identifier, in source order.
    pub fn walk_quals<'a>(&'a self, f: &mut dyn FnMut(&'a str, &'a str)) {
        match self {
            Expr::Ident(_) | Expr::Lit(_) | Expr::FuncType => {}
            Expr::Qual { path, name } => f(path, name),
            Expr::Call { func, args } => {
                func.walk_quals(f);
                for arg in args {
                    arg.walk_quals(f);
                }
            }
            Expr::Paren(inner)
            | Expr::AddressOf(inner)
            | Expr::Star(inner)
            | Expr::SliceType(inner)
            | Expr::ArrayType(_, inner)
            | Expr::ChanType(inner) => inner.walk_quals(f),
            Expr::Composite { ty, elems } => {
                if let Some(ty) = ty {
                    ty.walk_quals(f);
                }
                for elem in elems {
                    match elem {
                        Element::Value(value) => value.walk_quals(f),
                        Element::Keyed(key, value) => {
                            key.walk_quals(f);
                            value.walk_quals(f);
                        }
                    }
                }
            }
            Expr::FuncLit { result, body } => {
                result.walk_quals(f);
                for stmt in body {
                    stmt.walk_quals(f);
                }
            }
            Expr::MapType(key, value) => {
                key.walk_quals(f);
                value.walk_quals(f);
            }
            Expr::StructType(fields) => {
                for (_, ty) in fields {
                    ty.walk_quals(f);
                }
            }
        }
    }

    /// Render with full import paths in place of aliases. Independent of
    /// any file's import table, so it is a stable sort key.
    pub fn canonical(&self) -> String {
        crate::printer::Printer::canonical().print(self)
    }
}
