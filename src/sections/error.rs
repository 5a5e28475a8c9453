//! Error types for extraction passes.

use thiserror::Error;

/// Failure of a whole extraction pass.
///
/// Malformed constructs that can be reported on their own section become
/// diagnostics instead; only definitions that cannot be named fail the pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// `$ : type` or `@ type` with nothing to name the entity by.
    #[error("missing entity name at line {line}")]
    MissingEntityName { line: u32 },

    /// `@` with neither a type nor a name.
    #[error("missing entity type at line {line}")]
    MissingEntityType { line: u32 },

    /// A construct whose syntax node lacks a required part.
    #[error("malformed {construct} at line {line}")]
    Malformed { construct: &'static str, line: u32 },
}
