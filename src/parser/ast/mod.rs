//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for LU syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.

use super::syntax_kind::SyntaxKind;
use super::SyntaxNode;

// ============================================================================
// Helper utilities for reducing code duplication
// ============================================================================

/// Check if a syntax node has a direct child token of the specified kind.
#[inline]
fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

/// Node text with surrounding whitespace and line breaks removed
fn trimmed_text(node: &SyntaxNode) -> String {
    node.text().to_string().trim().to_string()
}

/// Text of a list line after its `-`, `*` or `+` marker
fn list_item_text(node: &SyntaxNode) -> String {
    let mut seen_marker = false;
    let mut text = String::new();
    let tokens = node
        .descendants_with_tokens()
        .filter_map(|e| e.into_token());
    for token in tokens {
        if !seen_marker {
            seen_marker = token.kind().is_list_marker();
            continue;
        }
        text.push_str(token.text());
    }
    text.trim().to_string()
}

/// Macro to generate boolean property methods that check for a specific token kind.
macro_rules! has_token_method {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Check if this node has the `", stringify!($kind), "` token.")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
}

/// Macro to generate a method that finds the first child of a specific AST type.
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns an iterator over children of a specific AST type.
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// Macro to generate an accessor for the trimmed text of a marker child node.
macro_rules! child_text_method {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Trimmed text of the `", stringify!($kind), "` child, if present.")]
        pub fn $name(&self) -> Option<String> {
            self.0
                .children()
                .find(|n| n.kind() == SyntaxKind::$kind)
                .map(|n| trimmed_text(&n))
        }
    };
}

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

// Declared after the macros so they are in scope
mod blocks;
mod file;
mod intents;

// Re-export all public types so external code sees a flat namespace
pub use self::blocks::*;
pub use self::file::*;
pub use self::intents::*;
