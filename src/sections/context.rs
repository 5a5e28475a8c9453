//! Extraction context: the line index shared by every extractor.

use rowan::TextRange;

use crate::base::{LineIndex, SourceRange};
use crate::parser::SyntaxNode;

/// Extraction state passed through all extraction functions.
pub(super) struct ExtractionContext {
    /// Line index for converting byte offsets to line/column
    pub line_index: LineIndex,
}

impl ExtractionContext {
    pub fn new(line_index: LineIndex) -> Self {
        Self { line_index }
    }

    /// Line span of a node: from its first byte to its last non-trivia token
    pub fn node_range(&self, node: &SyntaxNode) -> SourceRange {
        let start = node.text_range().start();
        let end = node
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .last()
            .map_or(start, |t| t.text_range().end());
        self.text_range_to_source(TextRange::new(start, end.max(start)))
    }

    /// 1-based line of a node's first byte
    pub fn start_line(&self, node: &SyntaxNode) -> u32 {
        self.line_index.line_number(node.text_range().start())
    }

    /// Convert a byte range to a 1-based line span with 0-based columns
    pub fn text_range_to_source(&self, range: TextRange) -> SourceRange {
        let start = self.line_index.line_col(range.start());
        let end = self.line_index.line_col(range.end());
        SourceRange::lines(start.line + 1, end.line + 1).with_columns(start.col, end.col)
    }
}
