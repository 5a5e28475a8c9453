//! Syntax errors reported by the paragraph parser

use std::fmt;

use rowan::TextRange;

use super::codes::ErrorCode;

/// Where the parser was when it met an unexpected line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseContext {
    TopLevel,
    /// After a `# ?` header, before the answer
    QnaBody,
    /// Below a `**Filters:**` line
    QnaFilters,
    /// Between answer fences
    AnswerBlock,
    Import,
}

impl ParseContext {
    /// Location phrase, e.g. `"at top level"`
    pub fn location(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::QnaBody => "in qna block",
            Self::QnaFilters => "in qna filters",
            Self::AnswerBlock => "in answer block",
            Self::Import => "in import line",
        }
    }

    /// What a line in this position should look like
    pub fn expectation(&self) -> &'static str {
        match self {
            Self::TopLevel => {
                "an intent header, entity definition, qna block, import, or model info line"
            }
            Self::QnaBody => "an alternate question, filters, or a fenced answer",
            Self::QnaFilters => "a filter line of the form '- key = value'",
            Self::AnswerBlock => "answer text or a closing '```'",
            Self::Import => "'[description](path)'",
        }
    }
}

/// A second location that explains an error, e.g. where an answer opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedSpan {
    pub label: String,
    pub range: TextRange,
}

/// One syntax error with its byte range
///
/// Syntax errors always make a document unusable for training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub code: ErrorCode,
    pub message: String,
    pub range: TextRange,
    pub hint: Option<String>,
    pub related: Option<RelatedSpan>,
}

impl SyntaxError {
    /// An error carrying the code's default message
    pub fn new(code: ErrorCode, range: TextRange) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
            range,
            hint: None,
            related: None,
        }
    }

    /// `unexpected <found> <location>, expected <expectation>`
    pub fn unexpected(found: &str, context: ParseContext, code: ErrorCode, range: TextRange) -> Self {
        Self::new(code, range).with_message(format!(
            "unexpected {} {}, expected {}",
            found,
            context.location(),
            context.expectation()
        ))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, label: impl Into<String>, range: TextRange) -> Self {
        self.related = Some(RelatedSpan {
            label: label.into(),
            range,
        });
        self
    }

    /// Message with the hint appended, as shown to users
    pub fn full_message(&self) -> String {
        match &self.hint {
            Some(hint) => format!("{} (hint: {})", self.message, hint),
            None => self.message.clone(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.full_message())
    }
}
