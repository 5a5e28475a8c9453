//! Leaf extractors: model info, import and QnA.

use indexmap::IndexMap;

use crate::parser::errors::ParseContext;
use crate::parser::{AstNode, ImportSection, Paragraph, QnaSection};

use super::context::ExtractionContext;
use super::diagnostics::{Diagnostic, codes};
use super::error::ExtractError;
use super::types::{Import, ModelInfo, Qna, QnaPair, Section, SectionData};

pub(super) fn extract_model_infos(
    paragraphs: &[Paragraph],
    ctx: &ExtractionContext,
) -> Result<Vec<Section>, ExtractError> {
    Ok(paragraphs
        .iter()
        .filter_map(|p| p.model_info_section())
        .map(|info| {
            let data = SectionData::ModelInfo(ModelInfo {
                raw_line: info.text(),
            });
            Section::new(ctx.node_range(info.syntax()), data)
        })
        .collect())
}

pub(super) fn extract_imports(
    paragraphs: &[Paragraph],
    ctx: &ExtractionContext,
) -> Result<Vec<Section>, ExtractError> {
    Ok(paragraphs
        .iter()
        .filter_map(|p| p.import_section())
        .map(|import| extract_import(&import, ctx))
        .collect())
}

fn extract_import(import: &ImportSection, ctx: &ExtractionContext) -> Section {
    let range = ctx.node_range(import.syntax());
    let path = import.path().unwrap_or_default();

    // Lines without the `[..](..)` shape were already reported by the parser
    let mut diagnostics = Vec::new();
    if import.is_well_formed() && path.is_empty() {
        diagnostics.push(
            Diagnostic::error("import path is empty")
                .with_range(range)
                .with_code(codes::EMPTY_IMPORT_PATH),
        );
    }

    let data = SectionData::Import(Import {
        description: import.description().unwrap_or_default(),
        path,
    });
    Section::new(range, data).with_diagnostics(diagnostics)
}

pub(super) fn extract_qnas(
    paragraphs: &[Paragraph],
    ctx: &ExtractionContext,
) -> Result<Vec<Section>, ExtractError> {
    Ok(paragraphs
        .iter()
        .filter_map(|p| p.qna_section())
        .map(|qna| extract_qna(&qna, ctx))
        .collect())
}

fn extract_qna(qna: &QnaSection, ctx: &ExtractionContext) -> Section {
    let range = ctx.node_range(qna.syntax());
    let mut diagnostics: Vec<_> = qna
        .invalid_lines()
        .map(|line| {
            Diagnostic::error(format!(
                "invalid line {}, expected {}: \"{}\"",
                ParseContext::QnaBody.location(),
                ParseContext::QnaBody.expectation(),
                line.text()
            ))
            .with_range(ctx.node_range(line.syntax()))
            .with_code(codes::INVALID_QNA_LINE)
        })
        .collect();

    let mut filters = IndexMap::new();
    for (key, value) in qna.filters().filter_map(|line| line.key_value()) {
        filters.insert(key, value);
    }

    let question = qna.question().unwrap_or_default();
    let answer = qna.answer();
    if answer.is_none() {
        diagnostics.push(
            Diagnostic::warning(format!("no answer found for question: \"{question}\""))
                .with_range(range)
                .with_code(codes::MISSING_ANSWER),
        );
    }

    let pair = QnaPair {
        question,
        alternate_questions: qna.alternate_questions().map(|q| q.text()).collect(),
        filters,
        answer: answer.map(|a| a.text()).unwrap_or_default(),
    };
    Section::new(range, SectionData::Qna(Qna { id: 0, pair })).with_diagnostics(diagnostics)
}
