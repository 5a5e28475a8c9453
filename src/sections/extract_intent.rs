//! Intent extractors (nested and simple intents).

use crate::parser::{AstNode, IntentDefinition, NestedIntentSection, Paragraph, SimpleIntentSection};

use super::context::ExtractionContext;
use super::diagnostics::{Diagnostic, codes};
use super::error::ExtractError;
use super::extract_entity::{build_entity, build_new_entity};
use super::types::{NestedIntent, Section, SectionData, SimpleIntent, is_pattern};

/// Message for an intent header with nothing beneath it
pub fn no_utterances_message(name: &str) -> String {
    format!("no utterances found for intent definition: \"# {name}\"")
}

pub(super) fn extract_nested_intents(
    paragraphs: &[Paragraph],
    ctx: &ExtractionContext,
) -> Result<Vec<Section>, ExtractError> {
    paragraphs
        .iter()
        .filter_map(|p| p.nested_intent_section())
        .map(|nested| extract_nested_intent(&nested, ctx))
        .collect()
}

fn extract_nested_intent(
    nested: &NestedIntentSection,
    ctx: &ExtractionContext,
) -> Result<Section, ExtractError> {
    let header = nested.name_line().ok_or(ExtractError::Malformed {
        construct: "nested intent header",
        line: ctx.start_line(nested.syntax()),
    })?;
    let header_range = ctx.node_range(header.syntax());
    let name = header.name().unwrap_or_default();

    let mut diagnostics = Vec::new();
    if name.is_empty() {
        diagnostics.push(
            Diagnostic::error("intent name is empty")
                .with_range(header_range)
                .with_code(codes::EMPTY_INTENT_NAME),
        );
    }

    let children = nested
        .children()
        .map(|child| extract_simple_intent(&child, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    // Children report through the parent
    for child in &children {
        diagnostics.extend(child.diagnostics.iter().cloned());
    }

    let data = SectionData::NestedIntent(NestedIntent {
        name: name.into(),
        header: header_range,
        children,
    });
    Ok(Section::new(ctx.node_range(nested.syntax()), data).with_diagnostics(diagnostics))
}

pub(super) fn extract_simple_intents(
    paragraphs: &[Paragraph],
    ctx: &ExtractionContext,
) -> Result<Vec<Section>, ExtractError> {
    paragraphs
        .iter()
        .filter_map(|p| p.simple_intent_section())
        .filter(|section| section.intent_definition().is_some())
        .map(|section| extract_simple_intent(&section, ctx))
        .collect()
}

pub(super) fn extract_simple_intent(
    section: &SimpleIntentSection,
    ctx: &ExtractionContext,
) -> Result<Section, ExtractError> {
    let line = ctx.start_line(section.syntax());
    let definition = section.intent_definition().ok_or(ExtractError::Malformed {
        construct: "intent definition",
        line,
    })?;
    let header = definition.name_line().ok_or(ExtractError::Malformed {
        construct: "intent header",
        line,
    })?;
    let header_range = ctx.node_range(header.syntax());
    let name = header.name().unwrap_or_default();

    let mut diagnostics = Vec::new();
    if name.is_empty() {
        diagnostics.push(
            Diagnostic::error("intent name is empty")
                .with_range(header_range)
                .with_code(codes::EMPTY_INTENT_NAME),
        );
    }
    diagnostics.extend(invalid_body_lines(&definition, ctx));

    let mut intent = SimpleIntent::empty(name.as_str());
    for utterance in definition.utterances() {
        let text = utterance.text();
        if text.is_empty() {
            continue;
        }
        if is_pattern(&text) {
            intent.patterns.push(text);
        } else {
            intent.utterances.push(text);
        }
    }
    if !intent.has_examples() {
        diagnostics.push(
            Diagnostic::warning(no_utterances_message(&name))
                .with_range(header_range)
                .with_code(codes::NO_UTTERANCES),
        );
    }

    for entity in section.entity_sections() {
        let (entity, entity_diagnostics) = build_entity(&entity, ctx)?;
        intent.entities.push(entity);
        diagnostics.extend(entity_diagnostics);
    }
    for entity in section.new_entity_sections() {
        let (entity, entity_diagnostics) = build_new_entity(&entity, ctx)?;
        intent.new_entities.push(entity);
        diagnostics.extend(entity_diagnostics);
    }

    let data = SectionData::SimpleIntent(intent);
    Ok(Section::new(ctx.node_range(section.syntax()), data).with_diagnostics(diagnostics))
}

fn invalid_body_lines<'a>(
    definition: &'a IntentDefinition,
    ctx: &'a ExtractionContext,
) -> impl Iterator<Item = Diagnostic> + 'a {
    definition.invalid_lines().map(move |line| {
        Diagnostic::error(format!(
            "invalid intent body line, did you miss '-' at line begin: \"{}\"",
            line.text()
        ))
        .with_range(ctx.node_range(line.syntax()))
        .with_code(codes::INVALID_INTENT_BODY_LINE)
    })
}
