//! The parsed model of one LU file.

use crate::sections::{Diagnostic, Section, SectionKind};

/// Sections, source text and diagnostics of one parsed file.
///
/// Sections are sorted by start line. Diagnostics are in stream order:
/// syntax, then each extraction pass, then range resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LuResource {
    pub sections: Vec<Section>,
    pub content: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl LuResource {
    /// Any ERROR diagnostic makes the file unusable for training.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    /// Top-level sections of one kind, in document order.
    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.kind() == kind)
    }

    pub fn simple_intents(&self) -> impl Iterator<Item = &Section> {
        self.sections_of(SectionKind::SimpleIntent)
    }

    pub fn nested_intents(&self) -> impl Iterator<Item = &Section> {
        self.sections_of(SectionKind::NestedIntent)
    }

    pub fn qna_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections_of(SectionKind::Qna)
    }

    pub fn imports(&self) -> impl Iterator<Item = &Section> {
        self.sections_of(SectionKind::Import)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Section> {
        self.sections_of(SectionKind::Entity)
    }

    pub fn new_entities(&self) -> impl Iterator<Item = &Section> {
        self.sections_of(SectionKind::NewEntity)
    }

    pub fn model_infos(&self) -> impl Iterator<Item = &Section> {
        self.sections_of(SectionKind::ModelInfo)
    }

    /// Render the resource as pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, crate::LuError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
