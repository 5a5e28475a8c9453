//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the LU syntax tree.
//! Tokens come from the logos lexer; nodes are built by the line-oriented
//! paragraph parser.

/// All syntax kinds (tokens and nodes) in an LU file
///
/// Tokens are leaf nodes (words, markers, punctuation).
/// Nodes are composite (paragraphs, sections, lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    NEWLINE,

    // =========================================================================
    // TEXT
    // =========================================================================
    WORD,

    // =========================================================================
    // MARKERS AND PUNCTUATION
    // =========================================================================
    HASH,      // #
    HASH_HASH, // ##
    QUESTION,  // ?
    DASH,      // -
    STAR,      // *
    PLUS,      // +
    DOLLAR,    // $
    AT,        // @
    GT,        // >
    BANG,      // !
    EQ,        // =
    COLON,     // :
    COMMA,     // ,
    L_BRACKET, // [
    R_BRACKET, // ]
    L_PAREN,   // (
    R_PAREN,   // )
    L_BRACE,   // {
    R_BRACE,   // }
    FENCE,     // ```
    BACKTICK,  // `

    // =========================================================================
    // NODES
    // =========================================================================
    LU_FILE,
    PARAGRAPH,
    COMMENT_LINE,
    INVALID_LINE,

    // Model info
    MODEL_INFO_SECTION,

    // Import
    IMPORT_SECTION,
    IMPORT_DESCRIPTION,
    IMPORT_PATH,

    // Intents
    NESTED_INTENT_SECTION,
    NESTED_INTENT_NAME_LINE,
    NESTED_INTENT_BODY,
    SIMPLE_INTENT_SECTION,
    INTENT_DEFINITION,
    INTENT_NAME_LINE,
    INTENT_NAME,
    INTENT_BODY,
    UTTERANCE_LINE,

    // Entities
    ENTITY_SECTION,
    ENTITY_LINE,
    ENTITY_NAME,
    ENTITY_TYPE,
    NEW_ENTITY_SECTION,
    NEW_ENTITY_LINE,
    NEW_ENTITY_TYPE,
    NEW_ENTITY_NAME,
    ENTITY_BODY,
    LIST_ITEM,

    // QnA
    QNA_SECTION,
    QNA_QUESTION_LINE,
    QNA_QUESTION,
    QNA_ALT_QUESTION,
    QNA_FILTER_SECTION,
    QNA_FILTER_LINE,
    QNA_ANSWER,
    ANSWER_FENCE,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or line break)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE)
    }

    /// Check if this is a list marker (`-`, `*`, `+`)
    pub fn is_list_marker(self) -> bool {
        matches!(self, Self::DASH | Self::STAR | Self::PLUS)
    }

    /// Check if this is a punctuation or marker token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::HASH as u16) && (self as u16) <= (Self::BACKTICK as u16)
    }

    /// Check if this kind is a composite node
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::LU_FILE as u16) && (self as u16) < (Self::__LAST as u16)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LuLanguage {}

impl rowan::Language for LuLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<LuLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<LuLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<LuLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<LuLanguage>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip() {
        let raw: rowan::SyntaxKind = SyntaxKind::QNA_SECTION.into();
        assert_eq!(SyntaxKind::from(raw), SyntaxKind::QNA_SECTION);
    }

    #[test]
    fn test_classification() {
        assert!(SyntaxKind::NEWLINE.is_trivia());
        assert!(!SyntaxKind::WORD.is_trivia());
        assert!(SyntaxKind::HASH_HASH.is_punct());
        assert!(SyntaxKind::DASH.is_list_marker());
        assert!(SyntaxKind::PARAGRAPH.is_node());
        assert!(!SyntaxKind::FENCE.is_node());
    }
}
