//! GoFile abstraction for structured Go file generation.

use std::collections::BTreeSet;

use crdgen_codegen::builder::CodeBuilder;
use crdgen_core::{BUILD_TAG, Boilerplate, GENERATED_MARKER};

use crate::ast::FuncDecl;
use crate::imports::GoImports;
use crate::printer::Printer;

/// A generated Go source file.
///
/// Imports are derived from the declarations when the file is rendered;
/// [`GoFile::import_as`] only pins the alias of a path up front.
///
/// # Example
///
/// ```ignore
/// let source = GoFile::new("install")
///     .header(boilerplate)
///     .add(FuncDecl::new("Install"))
///     .render();
/// ```
#[derive(Debug, Clone)]
pub struct GoFile {
    package: String,
    header: Boilerplate,
    aliases: Vec<(String, String)>,
    decls: Vec<FuncDecl>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            header: Boilerplate::default(),
            aliases: Vec::new(),
            decls: Vec::new(),
        }
    }

    pub fn header(mut self, header: Boilerplate) -> Self {
        self.header = header;
        self
    }

    /// Import `path` under `alias` if the file references it.
    pub fn import_as(mut self, path: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.push((path.into(), alias.into()));
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, decl: FuncDecl) -> Self {
        self.decls.push(decl);
        self
    }

    pub fn add_all(mut self, decls: impl IntoIterator<Item = FuncDecl>) -> Self {
        self.decls.extend(decls);
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    fn imports(&self) -> GoImports {
        let mut used = BTreeSet::new();
        for decl in &self.decls {
            decl.walk_quals(&mut |path, _| {
                used.insert(path);
            });
        }

        let mut imports = GoImports::new();
        for (path, alias) in &self.aliases {
            if used.contains(path.as_str()) {
                imports.add_as(path, alias);
            }
        }
        for decl in &self.decls {
            imports.collect(decl);
        }
        imports
    }

    pub fn render(&self) -> String {
        let imports = self.imports();
        let printer = Printer::new(&imports);

        let mut builder = CodeBuilder::go();
        builder.push_line(BUILD_TAG).push_blank();
        if !self.header.is_empty() {
            builder.push_lines(self.header.text()).push_blank();
        }
        builder
            .push_line(GENERATED_MARKER)
            .push_blank()
            .push_line(&format!("package {}", self.package));

        if let Some(block) = imports.render() {
            builder.push_blank().push_lines(&block);
        }
        for decl in &self.decls {
            builder.push_blank();
            printer.write_func(&mut builder, decl);
            builder.newline();
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Stmt};

    #[test]
    fn test_layout_without_header() {
        let source = GoFile::new("install").render();
        assert_eq!(
            source,
            "// +build !ignore_autogenerated\n\n// Code generated by crd-gen. DO NOT EDIT.\n\npackage install\n"
        );
    }

    #[test]
    fn test_layout_with_header_and_imports() {
        let decl = FuncDecl::new("Zero")
            .returns(Expr::qual("example.com/apis/apps/v1", "Spec"))
            .stmt(Stmt::ret(Expr::composite(Some(Expr::qual("example.com/apis/apps/v1", "Spec")), vec![])));
        let source = GoFile::new("apps")
            .header(Boilerplate::new("/*\nCopyright YEAR.\n*/\n", "2026"))
            .add(decl)
            .render();
        assert_eq!(
            source,
            "// +build !ignore_autogenerated\n\n\
             /*\nCopyright 2026.\n*/\n\n\
             // Code generated by crd-gen. DO NOT EDIT.\n\n\
             package apps\n\n\
             import \"example.com/apis/apps/v1\"\n\n\
             func Zero() v1.Spec {\n\treturn v1.Spec{}\n}\n"
        );
    }

    #[test]
    fn test_pinned_alias_only_when_used() {
        let decl = FuncDecl::new("Install").stmt(Stmt::Expr(
            Expr::qual("example.com/apis/apps/v1", "AddToScheme").call(vec![Expr::ident("scheme")]),
        ));
        let source = GoFile::new("install")
            .import_as("example.com/apis/apps/v1", "appsv1")
            .import_as("example.com/apis/batch/v1", "batchv1")
            .add(decl)
            .render();
        assert!(source.contains("import appsv1 \"example.com/apis/apps/v1\"\n"));
        assert!(source.contains("\tappsv1.AddToScheme(scheme)\n"));
        assert!(!source.contains("batchv1"));
    }
}
