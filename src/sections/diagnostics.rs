//! Diagnostics: non-fatal problems found while building sections.
//!
//! Every diagnostic is immutable once created. A parse collects them per
//! pass and concatenates them into one ordered stream.

use std::fmt;
use std::sync::Arc;

use crate::base::SourceRange;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
///
/// Any `Error` makes a document unusable for training; `Warning`s do not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        }
    }
}

/// A diagnostic message with an optional line range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Lines the diagnostic points at, if known.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub range: Option<SourceRange>,
    /// Error/warning code (e.g., "E0202" or "L0001").
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub code: Option<Arc<str>>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            range: None,
            code: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            range: None,
            code: None,
        }
    }

    /// Set the source range for this diagnostic.
    pub fn with_range(mut self, range: SourceRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.range {
            Some(range) => write!(f, "[{}] {}: {}", self.severity.as_str(), range, self.message),
            None => write!(f, "[{}] {}", self.severity.as_str(), self.message),
        }
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes for section-level problems.
///
/// Syntax errors keep the `E0xxx` code of the grammar error that produced
/// them; the codes below cover everything found after parsing.
///
/// - **L0001-L0099**: extraction and range errors
/// - **W0001-W0099**: warnings
pub mod codes {
    // ========================================================================
    // ERRORS (L0001-L0099)
    // ========================================================================

    /// An extraction pass failed as a whole.
    pub const PASS_FAILED: &str = "L0001";
    /// Intent header with an empty name.
    pub const EMPTY_INTENT_NAME: &str = "L0002";
    /// Text line inside an intent body.
    pub const INVALID_INTENT_BODY_LINE: &str = "L0003";
    /// Entity definition without a `:` type separator.
    pub const MISSING_ENTITY_TYPE: &str = "L0004";
    /// Import with no path.
    pub const EMPTY_IMPORT_PATH: &str = "L0005";
    /// Text line inside a QnA block.
    pub const INVALID_QNA_LINE: &str = "L0006";
    /// Inconsistent section line range.
    pub const INVALID_RANGE: &str = "L0007";

    // ========================================================================
    // WARNINGS (W0001-W0099)
    // ========================================================================

    /// Intent without utterances or patterns.
    pub const NO_UTTERANCES: &str = "W0001";
    /// QnA block without an answer.
    pub const MISSING_ANSWER: &str = "W0002";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics in insertion order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Add an extraction failure for a whole pass.
    pub fn pass_failed(&mut self, pass: &str, message: impl fmt::Display) {
        self.add(
            Diagnostic::error(format!("Error happened when parsing {pass}: {message}"))
                .with_code(codes::PASS_FAILED),
        );
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
