//! Extraction passes and their dispatch.

use std::fmt;

use crate::parser::Paragraph;
use crate::syntax::SyntaxFile;

use super::context::ExtractionContext;
use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::enablement::SectionEnablement;
use super::error::ExtractError;
use super::extract_entity::{extract_entities, extract_new_entities};
use super::extract_intent::{extract_nested_intents, extract_simple_intents};
use super::extract_leaf::{extract_imports, extract_model_infos, extract_qnas};
use super::types::Section;

/// Sections of one file and the diagnostics of every pass, in pass order.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub sections: Vec<Section>,
    pub diagnostics: Vec<Diagnostic>,
    pub enablement: SectionEnablement,
}

/// Run every pass over the paragraphs of a parsed file.
///
/// A failing pass contributes one error diagnostic and no sections; the
/// remaining passes still run. Nested intents are placed according to the
/// `enableSections` directive read by the model info pass.
pub fn extract_sections(file: &SyntaxFile) -> Extraction {
    let ctx = ExtractionContext::new(file.line_index().clone());
    let paragraphs = file.paragraphs();
    let mut extraction = Extraction::default();
    let mut collector = DiagnosticCollector::new();

    for pass in Pass::ALL {
        let found = match pass.run(&paragraphs, &ctx) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!("[EXTRACT] {} pass failed: {}", pass, err);
                collector.pass_failed(pass.description(), &err);
                continue;
            }
        };
        let found = match pass {
            Pass::NestedIntent => extraction.enablement.apply(found),
            _ => found,
        };
        tracing::trace!("[EXTRACT] {} pass: {} sections", pass, found.len());

        for section in &found {
            collector.extend(section.diagnostics.iter().cloned());
        }
        extraction.sections.extend(found);

        if pass == Pass::ModelInfo {
            extraction.enablement = SectionEnablement::from_sections(&extraction.sections);
        }
    }

    extraction.diagnostics = collector.into_diagnostics();
    extraction
}

/// One extraction pass per section kind.
///
/// Passes are independent: a failing pass loses only its own sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pass {
    ModelInfo,
    NestedIntent,
    SimpleIntent,
    Entity,
    NewEntity,
    Import,
    Qna,
}

impl Pass {
    /// Passes in the order they run. Model info comes first so the
    /// enablement directive is known before nested intents are placed.
    pub const ALL: [Pass; 7] = [
        Pass::ModelInfo,
        Pass::NestedIntent,
        Pass::SimpleIntent,
        Pass::Entity,
        Pass::NewEntity,
        Pass::Import,
        Pass::Qna,
    ];

    /// Name used in pass failure messages.
    pub fn description(&self) -> &'static str {
        match self {
            Pass::ModelInfo => "model information",
            Pass::NestedIntent => "nested intent section",
            Pass::SimpleIntent => "simple intent section",
            Pass::Entity => "entities",
            Pass::NewEntity => "new entities",
            Pass::Import => "import section",
            Pass::Qna => "qna section",
        }
    }

    pub(super) fn run(
        &self,
        paragraphs: &[Paragraph],
        ctx: &ExtractionContext,
    ) -> Result<Vec<Section>, ExtractError> {
        match self {
            Pass::ModelInfo => extract_model_infos(paragraphs, ctx),
            Pass::NestedIntent => extract_nested_intents(paragraphs, ctx),
            Pass::SimpleIntent => extract_simple_intents(paragraphs, ctx),
            Pass::Entity => extract_entities(paragraphs, ctx),
            Pass::NewEntity => extract_new_entities(paragraphs, ctx),
            Pass::Import => extract_imports(paragraphs, ctx),
            Pass::Qna => extract_qnas(paragraphs, ctx),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
