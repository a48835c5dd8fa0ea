use super::{Expr, Stmt};

/// A top-level function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: String,
    /// Comment lines printed directly above the declaration, without `//`.
    pub comments: Vec<String>,
    pub params: Vec<(String, Expr)>,
    pub result: Option<Expr>,
    pub body: Vec<Stmt>,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            params: Vec::new(),
            result: None,
            body: Vec::new(),
        }
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(text.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: Expr) -> Self {
        self.params.push((name.into(), ty));
        self
    }

    pub fn returns(mut self, ty: Expr) -> Self {
        self.result = Some(ty);
        self
    }

    pub fn stmt(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn walk_quals<'a>(&'a self, f: &mut dyn FnMut(&'a str, &'a str)) {
        for (_, ty) in &self.params {
            ty.walk_quals(f);
        }
        if let Some(result) = &self.result {
            result.walk_quals(f);
        }
        for stmt in &self.body {
            stmt.walk_quals(f);
        }
    }
}
