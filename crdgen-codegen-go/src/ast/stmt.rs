use super::Expr;

/// Statements that appear in emitted function bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `name := value`
    Define(String, Expr),
    /// `var name T` or `var name T = value`
    Var {
        name: String,
        ty: Expr,
        value: Option<Expr>,
    },
    Expr(Expr),
    Return(Option<Expr>),
}

impl Stmt {
    pub fn define(name: impl Into<String>, value: Expr) -> Self {
        Stmt::Define(name.into(), value)
    }

    pub fn var(name: impl Into<String>, ty: Expr, value: Option<Expr>) -> Self {
        Stmt::Var {
            name: name.into(),
            ty,
            value,
        }
    }

    pub fn ret(value: Expr) -> Self {
        Stmt::Return(Some(value))
    }

    pub fn walk_quals<'a>(&'a self, f: &mut dyn FnMut(&'a str, &'a str)) {
        match self {
            Stmt::Define(_, value) | Stmt::Expr(value) | Stmt::Return(Some(value)) => value.walk_quals(f),
            Stmt::Var { ty, value, .. } => {
                ty.walk_quals(f);
                if let Some(value) = value {
                    value.walk_quals(f);
                }
            }
            Stmt::Return(None) => {}
        }
    }
}
