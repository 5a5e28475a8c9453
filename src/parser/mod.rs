//! Rowan-based parser for LU files
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! This is the rust-analyzer approach: we build a lossless CST that preserves
//! all whitespace and comments, then extract an AST layer on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Line classifier → one LineClass per physical line
//!     ↓
//! Parser → GreenNode tree of paragraphs (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! sections → Extracted, range-resolved sections
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use errors::{ErrorCode, SyntaxError};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse_lu};
pub use syntax_kind::{LuLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
