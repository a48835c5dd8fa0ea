//! Per-file Go import table.

use crdgen_codegen::generation::ImportCollector;
use crdgen_core::path_base;

use crate::ast::FuncDecl;
use crate::printer::QualResolver;

/// Pointer-of helpers: `pointer.Int32(5)` returns `*int32`.
pub const POINTER: &str = "github.com/zoumo/golib/pointer";
pub const ENCODING_JSON: &str = "encoding/json";
pub const MATH: &str = "math";
pub const RUNTIME: &str = "k8s.io/apimachinery/pkg/runtime";
pub const UTIL_RUNTIME: &str = "k8s.io/apimachinery/pkg/util/runtime";
pub const META_V1: &str = "k8s.io/apimachinery/pkg/apis/meta/v1";

/// Paths that always import under a fixed alias.
const KNOWN_ALIASES: &[(&str, &str)] = &[
    (META_V1, "metav1"),
    ("k8s.io/apiextensions-apiserver/pkg/apis/apiextensions/v1beta1", "apiextensionsv1beta1"),
    ("k8s.io/apiextensions-apiserver/pkg/apis/apiextensions/v1", "apiextensionsv1"),
    (UTIL_RUNTIME, "utilruntime"),
];

/// Keywords, predeclared identifiers and the locals emitted function
/// bodies declare. None of them may be used as an import alias.
const RESERVED: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for", "func", "go",
    "goto", "if", "import", "interface", "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var", "any", "append", "bool", "byte", "cap", "clear", "close", "comparable", "complex", "complex64",
    "complex128", "copy", "delete", "error", "false", "float32", "float64", "imag", "int", "int8", "int16", "int32",
    "int64", "iota", "len", "make", "max", "min", "new", "nil", "panic", "print", "println", "real", "recover",
    "rune", "string", "true", "uint", "uint8", "uint16", "uint32", "uint64", "uintptr", "scheme", "obj", "jsonStr",
    "p",
];

/// The alias a Go toolchain assumes for `path` when the import has none:
/// the last path element, lowercased, reduced to ASCII alphanumerics and
/// without leading digits.
pub fn guess_alias(path: &str) -> String {
    let alias: String = path_base(path)
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .skip_while(char::is_ascii_digit)
        .collect();
    if alias.is_empty() { "pkg".to_string() } else { alias }
}

fn preferred_alias(path: &str) -> String {
    KNOWN_ALIASES
        .iter()
        .find(|(known, _)| *known == path)
        .map(|(_, alias)| alias.to_string())
        .unwrap_or_else(|| guess_alias(path))
}

/// Import table of one Go file.
///
/// Aliases are assigned in order of first use, so a file whose
/// declarations reference the same packages in the same order always
/// imports them under the same names.
#[derive(Debug, Clone)]
pub struct GoImports {
    collector: ImportCollector,
}

impl Default for GoImports {
    fn default() -> Self {
        Self::new()
    }
}

impl GoImports {
    pub fn new() -> Self {
        Self {
            collector: ImportCollector::with_reserved(RESERVED.iter().copied()),
        }
    }

    /// Register `path`, returning its alias.
    pub fn add(&mut self, path: &str) -> String {
        self.collector.add(path, &preferred_alias(path))
    }

    /// Register `path` preferring `alias` over the usual choice.
    pub fn add_as(&mut self, path: &str, alias: &str) -> String {
        self.collector.add(path, alias)
    }

    /// Register every package `decl` references.
    pub fn collect(&mut self, decl: &FuncDecl) {
        decl.walk_quals(&mut |path, _| {
            self.add(path);
        });
    }

    pub fn is_empty(&self) -> bool {
        self.collector.is_empty()
    }

    pub fn len(&self) -> usize {
        self.collector.len()
    }

    /// The import declaration, sorted by path. Aliases are spelled out
    /// only where they differ from [`guess_alias`].
    pub fn render(&self) -> Option<String> {
        let specs: Vec<String> = self
            .collector
            .sorted()
            .into_iter()
            .map(|(path, alias)| {
                if alias == guess_alias(path) {
                    format!("{path:?}")
                } else {
                    format!("{alias} {path:?}")
                }
            })
            .collect();
        match specs.as_slice() {
            [] => None,
            [single] => Some(format!("import {single}")),
            many => {
                let body: Vec<String> = many.iter().map(|spec| format!("\t{spec}")).collect();
                Some(format!("import (\n{}\n)", body.join("\n")))
            }
        }
    }
}

impl QualResolver for GoImports {
    fn resolve(&self, path: &str) -> String {
        self.collector
            .alias(path)
            .map(str::to_string)
            .unwrap_or_else(|| guess_alias(path))
    }
}
