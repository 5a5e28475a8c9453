//! # lu-base
//!
//! Core library for LU authoring files: lossless parsing, typed sections,
//! and diagnostics.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! lu_parser → Orchestration: phases, batch parsing
//!   ↓
//! sections  → Extraction passes, enablement, body ranges
//!   ↓
//! syntax    → SyntaxFile: paragraphs, line index, syntax diagnostics
//!   ↓
//! parser    → Logos lexer, line-oriented recursive-descent parser, typed AST
//!   ↓
//! base      → Primitives (LineIndex, SourceRange, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! let resource = lu::parse("# Greet\n- hello\n- hi there\n").unwrap();
//! assert!(!resource.has_errors());
//! assert_eq!(resource.sections[0].name(), Some("Greet"));
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → sections → lu_parser)
// ============================================================================

/// Foundation types: LineIndex, SourceRange, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST wrappers
pub mod parser;

/// Syntax: SyntaxFile and syntax diagnostics
pub mod syntax;

/// Sections: extraction passes, enablement, body range resolution
pub mod sections;

mod error;
mod lu_parser;
mod resource;

pub use error::{LuError, MAX_INPUT_LEN};
pub use lu_parser::{LuParser, Phase, parse, parse_batch};
pub use resource::LuResource;

// Re-export foundation types
pub use base::{LineCol, LineIndex, SourceRange, TextRange, TextSize};
pub use sections::{Diagnostic, Section, SectionData, SectionKind, Severity};
