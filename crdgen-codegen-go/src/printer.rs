//! Go source printer.
//!
//! Output uses tab indentation and puts every composite literal element on
//! its own line, the layout `gofmt` keeps for multi-line literals. Nodes
//! are written at the cursor of a [`CodeBuilder`], which owns indentation.

use crdgen_codegen::builder::CodeBuilder;

use crate::ast::{Element, Expr, FuncDecl, Stmt};

/// Maps import paths to the local names used in a file.
pub trait QualResolver {
    fn resolve(&self, path: &str) -> String;
}

struct FullPath;

impl QualResolver for FullPath {
    fn resolve(&self, path: &str) -> String {
        format!("{path:?}")
    }
}

static FULL_PATH: FullPath = FullPath;

pub struct Printer<'a> {
    resolver: &'a dyn QualResolver,
}

impl<'a> Printer<'a> {
    pub fn new(resolver: &'a dyn QualResolver) -> Self {
        Self { resolver }
    }

    /// A printer that spells qualified identifiers as `"path".Name`.
    pub fn canonical() -> Printer<'static> {
        Printer { resolver: &FULL_PATH }
    }

    pub fn print(&self, expr: &Expr) -> String {
        let mut out = CodeBuilder::go();
        self.write_expr(&mut out, expr);
        out.build()
    }

    pub fn print_func(&self, decl: &FuncDecl) -> String {
        let mut out = CodeBuilder::go();
        self.write_func(&mut out, decl);
        out.build()
    }

    /// Write `decl` at the cursor of `out`, leaving the cursor after the
    /// closing brace.
    pub fn write_func(&self, out: &mut CodeBuilder, decl: &FuncDecl) {
        for comment in &decl.comments {
            out.write("//").write(comment).newline();
        }
        out.write("func ").write(&decl.name).write("(");
        for (i, (name, ty)) in decl.params.iter().enumerate() {
            if i > 0 {
                out.write(", ");
            }
            out.write(name).write(" ");
            self.write_expr(out, ty);
        }
        out.write(")");
        if let Some(result) = &decl.result {
            out.write(" ");
            self.write_expr(out, result);
        }
        self.write_body(out, &decl.body);
    }

    fn write_body(&self, out: &mut CodeBuilder, body: &[Stmt]) {
        out.write(" {").indent();
        for stmt in body {
            out.newline();
            self.write_stmt(out, stmt);
        }
        out.dedent().newline().write("}");
    }

    fn write_stmt(&self, out: &mut CodeBuilder, stmt: &Stmt) {
        match stmt {
            Stmt::Define(name, value) => {
                out.write(name).write(" := ");
                self.write_expr(out, value);
            }
            Stmt::Var { name, ty, value } => {
                out.write("var ").write(name).write(" ");
                self.write_expr(out, ty);
                if let Some(value) = value {
                    out.write(" = ");
                    self.write_expr(out, value);
                }
            }
            Stmt::Expr(expr) => self.write_expr(out, expr),
            Stmt::Return(None) => {
                out.write("return");
            }
            Stmt::Return(Some(value)) => {
                out.write("return ");
                self.write_expr(out, value);
            }
        }
    }

    fn write_expr(&self, out: &mut CodeBuilder, expr: &Expr) {
        match expr {
            Expr::Ident(name) => {
                out.write(name);
            }
            Expr::Lit(token) => {
                out.write(token);
            }
            Expr::Qual { path, name } => {
                out.write(&self.resolver.resolve(path)).write(".").write(name);
            }
            Expr::Call { func, args } => {
                self.write_expr(out, func);
                out.write("(");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.write(", ");
                    }
                    self.write_expr(out, arg);
                }
                out.write(")");
            }
            Expr::Paren(inner) => {
                out.write("(");
                self.write_expr(out, inner);
                out.write(")");
            }
            Expr::AddressOf(inner) => {
                out.write("&");
                self.write_expr(out, inner);
            }
            Expr::Star(inner) => {
                out.write("*");
                self.write_expr(out, inner);
            }
            Expr::Composite { ty, elems } => {
                if let Some(ty) = ty {
                    self.write_expr(out, ty);
                }
                if elems.is_empty() {
                    out.write("{}");
                    return;
                }
                out.write("{").indent();
                for elem in elems {
                    out.newline();
                    match elem {
                        Element::Value(value) => self.write_expr(out, value),
                        Element::Keyed(key, value) => {
                            self.write_expr(out, key);
                            out.write(": ");
                            self.write_expr(out, value);
                        }
                    }
                    out.write(",");
                }
                out.dedent().newline().write("}");
            }
            Expr::FuncLit { result, body } => {
                out.write("func() ");
                self.write_expr(out, result);
                self.write_body(out, body);
            }
            Expr::SliceType(elem) => {
                out.write("[]");
                self.write_expr(out, elem);
            }
            Expr::ArrayType(len, elem) => {
                out.write(&format!("[{len}]"));
                self.write_expr(out, elem);
            }
            Expr::MapType(key, value) => {
                out.write("map[");
                self.write_expr(out, key);
                out.write("]");
                self.write_expr(out, value);
            }
            Expr::StructType(fields) => {
                if fields.is_empty() {
                    out.write("struct{}");
                    return;
                }
                out.write("struct {").indent();
                for (name, ty) in fields {
                    out.newline().write(name).write(" ");
                    self.write_expr(out, ty);
                }
                out.dedent().newline().write("}");
            }
            Expr::ChanType(elem) => {
                out.write("chan ");
                self.write_expr(out, elem);
            }
            Expr::FuncType => {
                out.write("func()");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LastSegment;

    impl QualResolver for LastSegment {
        fn resolve(&self, path: &str) -> String {
            path.rsplit('/').next().unwrap_or(path).to_string()
        }
    }

    #[test]
    fn test_empty_composite() {
        let expr = Expr::composite(Some(Expr::slice_of(Expr::ident("string"))), vec![]);
        assert_eq!(Printer::new(&LastSegment).print(&expr), "[]string{}");
    }

    #[test]
    fn test_nested_composite_layout() {
        let inner = Expr::composite(None, vec![Element::Value(Expr::lit("\"a\""))]);
        let expr = Expr::composite(
            Some(Expr::map_of(Expr::ident("string"), Expr::slice_of(Expr::ident("string")))),
            vec![Element::Keyed(Expr::lit("\"k\""), inner)],
        );
        assert_eq!(
            Printer::new(&LastSegment).print(&expr),
            "map[string][]string{\n\t\"k\": {\n\t\t\"a\",\n\t},\n}"
        );
    }

    #[test]
    fn test_qualified_and_canonical() {
        let expr = Expr::qual("github.com/zoumo/golib/pointer", "Int32").call(vec![Expr::lit("5")]);
        assert_eq!(Printer::new(&LastSegment).print(&expr), "pointer.Int32(5)");
        assert_eq!(expr.canonical(), "\"github.com/zoumo/golib/pointer\".Int32(5)");
    }

    #[test]
    fn test_func_lit_invocation() {
        let body = vec![
            Stmt::var("p", Expr::ident("int"), None),
            Stmt::ret(Expr::ident("p").address_of()),
        ];
        let expr = Expr::func_lit(Expr::ident("int").star(), body).invoke();
        assert_eq!(
            Printer::new(&LastSegment).print(&expr),
            "(func() *int {\n\tvar p int\n\treturn &p\n})()"
        );
    }

    #[test]
    fn test_func_decl() {
        let decl = FuncDecl::new("NewWidgetCRD")
            .comment("nolint")
            .returns(Expr::qual("k8s.io/x/v1", "Widget").star())
            .stmt(Stmt::ret(Expr::nil()));
        assert_eq!(
            Printer::new(&LastSegment).print_func(&decl),
            "//nolint\nfunc NewWidgetCRD() *v1.Widget {\n\treturn nil\n}"
        );
    }

    #[test]
    fn test_struct_type() {
        let ty = Expr::StructType(vec![("A".into(), Expr::ident("int")), ("B".into(), Expr::ident("string"))]);
        assert_eq!(Printer::new(&LastSegment).print(&ty), "struct {\n\tA int\n\tB string\n}");
        assert_eq!(Printer::new(&LastSegment).print(&Expr::StructType(vec![])), "struct{}");
    }
}
