use thiserror::Error;

use crate::path::PathError;

/// Configuration errors raised while compiling a [`Matcher`](crate::Matcher).
///
/// All of these indicate a programming mistake rather than a run-time
/// condition; a pattern that simply does not match is reported as `None` or an
/// empty `Vec`, never as an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The pattern failed to compile.
    #[error(transparent)]
    Regex(#[from] regex::Error),

    /// The tag key was empty.
    #[error("capture tag key must not be empty")]
    EmptyTag,

    /// No field of the record, at any depth, carries the tag key.
    #[error("type {record} has no fields with capture tag `{tag}`")]
    NoTaggedFields { record: &'static str, tag: String },

    /// The record reaches itself through tagged or flattened fields.
    #[error("type {record} is recursive through tagged or flattened fields")]
    RecursiveRecord { record: &'static str },

    /// A hand-written `Fields` impl disagrees with its schema.
    #[error("capture group `{group}` cannot be bound: {source}")]
    Path {
        group: String,
        #[source]
        source: PathError,
    },
}

/// Convenience alias for results produced while compiling matchers.
pub type Result<T, E = Error> = std::result::Result<T, E>;
