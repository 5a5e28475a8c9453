/// Line span of a section or diagnostic in the source document.
///
/// Lines are 1-based and inclusive on both ends. Columns, when present, are
/// 0-based byte columns taken from the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceRange {
    pub start_line: u32,
    pub stop_line: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub start_col: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub stop_col: Option<u32>,
}

impl SourceRange {
    /// Create a line-only range
    pub fn lines(start_line: u32, stop_line: u32) -> Self {
        Self {
            start_line,
            stop_line,
            start_col: None,
            stop_col: None,
        }
    }

    /// A range covering a single line
    pub fn line(line: u32) -> Self {
        Self::lines(line, line)
    }

    /// Attach column information
    pub fn with_columns(mut self, start_col: u32, stop_col: u32) -> Self {
        self.start_col = Some(start_col);
        self.stop_col = Some(stop_col);
        self
    }

    /// Number of lines covered (0 for an inverted range)
    pub fn line_count(&self) -> u32 {
        if self.stop_line < self.start_line {
            0
        } else {
            self.stop_line - self.start_line + 1
        }
    }
}

impl std::fmt::Display for SourceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start_line == self.stop_line {
            write!(f, "line {}", self.start_line)
        } else {
            write!(f, "lines {}-{}", self.start_line, self.stop_line)
        }
    }
}
