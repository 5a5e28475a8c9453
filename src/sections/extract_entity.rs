//! Entity extractors for `$` and `@` definitions.

use smol_str::SmolStr;

use crate::parser::{AstNode, EntitySection, ListItem, NewEntitySection, Paragraph, SimpleIntentSection};

use super::context::ExtractionContext;
use super::diagnostics::{Diagnostic, codes};
use super::error::ExtractError;
use super::types::{Entity, NewEntity, Section, SectionData};

const ROLES_KEYWORD: &str = "hasRoles";
const FEATURES_KEYWORDS: [&str; 2] = ["usesFeatures", "usesFeature"];

/// Paragraphs of entity definitions without an intent header
fn entity_paragraphs(paragraphs: &[Paragraph]) -> impl Iterator<Item = SimpleIntentSection> + '_ {
    paragraphs
        .iter()
        .filter_map(|p| p.simple_intent_section())
        .filter(|section| section.intent_definition().is_none())
}

pub(super) fn extract_entities(
    paragraphs: &[Paragraph],
    ctx: &ExtractionContext,
) -> Result<Vec<Section>, ExtractError> {
    let mut sections = Vec::new();
    for paragraph in entity_paragraphs(paragraphs) {
        for node in paragraph.entity_sections() {
            let (entity, diagnostics) = build_entity(&node, ctx)?;
            sections.push(
                Section::new(ctx.node_range(node.syntax()), SectionData::Entity(entity))
                    .with_diagnostics(diagnostics),
            );
        }
    }
    Ok(sections)
}

pub(super) fn extract_new_entities(
    paragraphs: &[Paragraph],
    ctx: &ExtractionContext,
) -> Result<Vec<Section>, ExtractError> {
    let mut sections = Vec::new();
    for paragraph in entity_paragraphs(paragraphs) {
        for node in paragraph.new_entity_sections() {
            let (entity, diagnostics) = build_new_entity(&node, ctx)?;
            sections.push(
                Section::new(ctx.node_range(node.syntax()), SectionData::NewEntity(entity))
                    .with_diagnostics(diagnostics),
            );
        }
    }
    Ok(sections)
}

/// Build a `$name : type` entity.
///
/// A definition with no name fails; a missing `:` is reported on the entity.
pub(super) fn build_entity(
    node: &EntitySection,
    ctx: &ExtractionContext,
) -> Result<(Entity, Vec<Diagnostic>), ExtractError> {
    let line = ctx.start_line(node.syntax());
    let definition = node.line().ok_or(ExtractError::Malformed {
        construct: "entity definition",
        line,
    })?;
    let name = definition
        .name()
        .filter(|name| !name.is_empty())
        .ok_or(ExtractError::MissingEntityName { line })?;

    let mut diagnostics = Vec::new();
    if !definition.has_colon() {
        diagnostics.push(
            Diagnostic::error(format!(
                "missing ':' between entity name and type in \"{}\"",
                definition.text()
            ))
            .with_range(ctx.node_range(definition.syntax()))
            .with_code(codes::MISSING_ENTITY_TYPE),
        );
    }

    let clauses = Clauses::parse(&definition.entity_type().unwrap_or_default());
    let entity = Entity {
        name: name.into(),
        entity_type: clauses.head,
        raw_definition_line: definition.text(),
        roles: clauses.roles,
        items: item_texts(node.items()),
    };
    Ok((entity, diagnostics))
}

/// Build an `@ type name` entity.
pub(super) fn build_new_entity(
    node: &NewEntitySection,
    ctx: &ExtractionContext,
) -> Result<(NewEntity, Vec<Diagnostic>), ExtractError> {
    let line = ctx.start_line(node.syntax());
    let definition = node.line().ok_or(ExtractError::Malformed {
        construct: "new entity definition",
        line,
    })?;
    let entity_type = definition
        .entity_type()
        .ok_or(ExtractError::MissingEntityType { line })?;
    let name = definition
        .name()
        .filter(|name| !name.is_empty())
        .ok_or(ExtractError::MissingEntityName { line })?;

    let clauses = Clauses::parse(&definition.trailing_text());
    let entity = NewEntity {
        name: name.into(),
        entity_type,
        raw_definition_line: definition.text(),
        roles: clauses.roles,
        features: clauses.features,
        items: item_texts(node.items()),
    };
    Ok((entity, Vec::new()))
}

fn item_texts(items: impl Iterator<Item = ListItem>) -> Vec<String> {
    items
        .map(|item| item.text())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Definition text split into its leading words and keyword clauses
#[derive(Debug, Default, PartialEq)]
struct Clauses {
    head: String,
    roles: Vec<SmolStr>,
    features: Vec<SmolStr>,
}

impl Clauses {
    fn parse(text: &str) -> Self {
        #[derive(Clone, Copy)]
        enum Target {
            Head,
            Roles,
            Features,
        }

        let mut clauses = Clauses::default();
        let mut head = Vec::new();
        let mut target = Target::Head;
        for word in text.split_whitespace() {
            if word == ROLES_KEYWORD {
                target = Target::Roles;
                continue;
            }
            if FEATURES_KEYWORDS.contains(&word) {
                target = Target::Features;
                continue;
            }
            let list = match target {
                Target::Head => {
                    head.push(word);
                    continue;
                }
                Target::Roles => &mut clauses.roles,
                Target::Features => &mut clauses.features,
            };
            list.extend(
                word.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(SmolStr::from),
            );
        }
        clauses.head = head.join(" ");
        clauses
    }
}
