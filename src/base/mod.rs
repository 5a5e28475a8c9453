//! Foundation types for the LU toolchain.
//!
//! This module provides fundamental types used throughout the parser:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`SourceRange`] - 1-based line spans attached to sections and diagnostics
//!
//! This module has NO dependencies on other lu modules.

mod line_index;
mod position;

pub use line_index::{LineCol, LineIndex};
pub use position::SourceRange;

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
