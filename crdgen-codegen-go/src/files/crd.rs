use std::path::{Path, PathBuf};

use crdgen_core::{Boilerplate, GeneratedFile};
use crdgen_ir::{Group, Resource, TypeDescriptor, Value};
use tracing::debug;

use crate::ast::{Element, Expr, FuncDecl, Stmt};
use crate::compiler::{RenderContext, ValueCompiler, type_expr};
use crate::error::Result;
use crate::naming::{AGGREGATOR, CRD_FILE, constructor_name};
use crate::GoFile;

/// `<group-dir>/zz.generated.crd.go`: one constructor per definition and
/// an aggregator returning all of them.
#[derive(Debug, Clone)]
pub struct GroupCrdFile {
    dir: String,
    file: GoFile,
}

impl GroupCrdFile {
    /// Compile every definition of `group`, in name order.
    pub fn compile<R: Resource>(group: &Group<R>, dir: &str, package: &str, header: &Boilerplate) -> Result<Self> {
        let compiler = ValueCompiler::new();
        let result = type_expr(&TypeDescriptor::pointer(R::descriptor()));

        let mut decls = Vec::with_capacity(group.len() + 1);
        let mut calls = Vec::with_capacity(group.len());
        for (name, definition) in group.definitions() {
            debug!(group = group.name(), definition = name, "compiling definition");
            let value = Value::pointer(TypeDescriptor::pointer(R::descriptor()), Some(definition.quote()));
            let body = compiler
                .render(&value, RenderContext::TOP)?
                .unwrap_or_else(Expr::nil);

            let constructor = constructor_name(name);
            calls.push(Element::Value(Expr::ident(&constructor).call(vec![])));
            decls.push(
                FuncDecl::new(constructor)
                    .comment("nolint")
                    .returns(result.clone())
                    .stmt(Stmt::ret(body)),
            );
        }

        let all = Expr::slice_of(result);
        decls.push(
            FuncDecl::new(AGGREGATOR)
                .comment("nolint")
                .returns(all.clone())
                .stmt(Stmt::ret(Expr::composite(Some(all), calls))),
        );

        Ok(Self {
            dir: dir.to_string(),
            file: GoFile::new(package).header(header.clone()).add_all(decls),
        })
    }

    pub fn relative_path(&self) -> String {
        format!("{}/{CRD_FILE}", self.dir)
    }
}

impl GeneratedFile for GroupCrdFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(CRD_FILE)
    }

    fn render(&self) -> String {
        self.file.render()
    }
}
