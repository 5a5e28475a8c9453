//! Section layer tests
//!
//! Tests for nested intents and the `enableSections` directive, and for
//! the extraction API used directly on a `SyntaxFile`.

pub mod tests_enablement;
pub mod tests_extraction;
