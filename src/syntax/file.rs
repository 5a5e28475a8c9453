//! Syntax file wrapper for parsed LU files.
//!
//! This is the only view the section layer has of the grammar: typed
//! paragraphs, a line index for provenance, and syntax errors already
//! converted to diagnostics.

use crate::base::{LineIndex, SourceRange};
use crate::parser::{AstNode, LuFile, Paragraph, Parse, SyntaxError, parse_lu};
use crate::sections::Diagnostic;

/// A parsed syntax file that wraps a rowan Parse result.
#[derive(Debug, Clone)]
pub struct SyntaxFile {
    /// The underlying rowan parse result
    parse: Parse,
    /// Line starts of the parsed text
    line_index: LineIndex,
}

// Two SyntaxFiles are equal if they parsed the same text with the same errors
impl PartialEq for SyntaxFile {
    fn eq(&self, other: &Self) -> bool {
        self.line_index == other.line_index
            && self.parse.errors == other.parse.errors
            && self.parse.green == other.parse.green
    }
}

impl Eq for SyntaxFile {}

impl SyntaxFile {
    /// Parse source text
    pub fn new(source: &str) -> Self {
        Self {
            parse: parse_lu(source),
            line_index: LineIndex::new(source),
        }
    }

    /// Get the underlying parse result
    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    /// Get the root LU file AST node
    pub fn lu_file(&self) -> Option<LuFile> {
        LuFile::cast(self.parse.syntax())
    }

    /// Top-level paragraphs in document order
    pub fn paragraphs(&self) -> Vec<Paragraph> {
        self.lu_file()
            .map(|file| file.paragraphs().collect())
            .unwrap_or_default()
    }

    /// Check if parsing had errors
    pub fn has_errors(&self) -> bool {
        !self.parse.errors.is_empty()
    }

    /// Get parse errors
    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }

    /// Syntax errors as diagnostics with 1-based line ranges
    pub fn syntax_diagnostics(&self) -> Vec<Diagnostic> {
        self.parse
            .errors
            .iter()
            .map(|err| self.to_diagnostic(err))
            .collect()
    }

    fn to_diagnostic(&self, err: &SyntaxError) -> Diagnostic {
        let mut message = err.full_message();
        if let Some(related) = &err.related {
            let line = self.line_index.line_col(related.range.start()).line + 1;
            message.push_str(&format!(" ({}: line {})", related.label, line));
        }
        let start = self.line_index.line_col(err.range.start());
        let end = self.line_index.line_col(err.range.end());
        Diagnostic::error(message)
            .with_range(
                SourceRange::lines(start.line + 1, end.line + 1).with_columns(start.col, end.col),
            )
            .with_code(err.code.as_str())
    }

    /// The line index for converting byte offsets to line/column positions
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }
}
