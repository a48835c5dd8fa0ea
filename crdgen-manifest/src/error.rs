use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for crdgen-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "crdgen.toml");
/// ctx.validation_error("package path must not be empty", None);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, labelled at the first occurrence of
    /// `needle` in the source when there is one.
    pub fn validation_error(&self, message: impl Into<String>, needle: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: needle.and_then(|needle| find_span(&self.src, needle)),
            message: message.into(),
        })
    }
}

/// Span of the first quoted occurrence of `needle`, falling back to a bare
/// occurrence.
pub(crate) fn find_span(src: &str, needle: &str) -> Option<SourceSpan> {
    if needle.is_empty() {
        return None;
    }
    let quoted = format!("\"{needle}\"");
    if let Some(offset) = src.find(&quoted) {
        return Some((offset + 1, needle.len()).into());
    }
    src.find(needle).map(|offset| (offset, needle.len()).into())
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(crdgen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse crdgen.toml")]
    #[diagnostic(code(crdgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(crdgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to parse CRD manifest '{path}'")]
    #[diagnostic(
        code(crdgen::manifest_error),
        help("manifests must be JSON CustomResourceDefinition objects, or arrays of them")
    )]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("CRD '{name}' in '{path}' is incomplete: {reason}")]
    #[diagnostic(code(crdgen::incomplete_definition))]
    Incomplete {
        path: PathBuf,
        name: String,
        reason: String,
    },

    #[error("definition '{name}' is declared twice in group '{group}'")]
    #[diagnostic(
        code(crdgen::duplicate_definition),
        help("first declared in '{first}', again in '{second}'")
    )]
    DuplicateDefinition {
        group: String,
        name: String,
        first: String,
        second: String,
    },

    #[error("CRD '{name}' uses a floating point type at '{path}'")]
    #[diagnostic(
        code(crdgen::dangerous_type),
        help("set allow_dangerous_types = true in crdgen.toml or pass --allow-dangerous-types")
    )]
    DangerousType { name: String, path: String },
}
