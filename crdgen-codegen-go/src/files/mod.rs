//! The Go files written for a set of groups.

mod crd;
mod install;
mod scheme;

pub use crd::GroupCrdFile;
pub use install::GroupInstallFile;
pub use scheme::SchemeFile;

use crate::ast::{Expr, FuncDecl, Stmt};
use crate::imports::{RUNTIME, UTIL_RUNTIME};
use crate::naming::install_alias;
use crate::GoFile;

/// `func Install(scheme *runtime.Scheme)` registering every package.
fn install_file(packages: &[String], header: &crdgen_core::Boilerplate) -> GoFile {
    let register = packages.iter().map(|path| {
        let add = Expr::qual(path, "AddToScheme").call(vec![Expr::ident("scheme")]);
        Stmt::Expr(Expr::qual(UTIL_RUNTIME, "Must").call(vec![add]))
    });
    let decl = FuncDecl::new("Install").param("scheme", Expr::qual(RUNTIME, "Scheme").star());
    let decl = register.fold(decl, FuncDecl::stmt);

    packages
        .iter()
        .fold(GoFile::new("install").header(header.clone()), |file, path| {
            file.import_as(path, install_alias(path))
        })
        .add(decl)
}
