use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Errors raised while compiling a value to Go source.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// An opaque record's own JSON encoding failed.
    #[error("failed to serialize {type_name}: {message}")]
    Serialize { type_name: String, message: String },

    /// The value's payload does not have the shape its descriptor names.
    #[error("value of type {type_name} does not match its {kind} descriptor")]
    Malformed { type_name: String, kind: &'static str },
}
