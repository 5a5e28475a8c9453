//! Nested intent enablement tests.

use lu::SectionKind;
use lu::sections::is_section_enabled;
use rstest::rstest;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::section_assertions::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_model_info_only_is_not_enabled() {
    let resource = resource_from(MODEL_INFO_ONLY);
    assert_eq!(
        kinds(&resource.sections),
        vec![SectionKind::ModelInfo, SectionKind::ModelInfo]
    );
    assert!(!is_section_enabled(&resource.sections));
    assert!(resource.diagnostics.is_empty());
}

#[rstest]
#[case("> !# @enableSections = true\n", true)]
#[case("> !# @enableSections = false\n", false)]
#[case("> !# @enableSections.enableSections = true\n", true)]
#[case("> !# @enableSections.enableSections = false\n", false)]
#[case("> !# @app.name = Demo\n> !# @enableSections = true\n", true)]
fn test_directive_is_read_from_model_info(#[case] source: &str, #[case] expected: bool) {
    let resource = resource_from(source);
    assert_eq!(is_section_enabled(&resource.sections), expected);
}

#[test]
fn test_disabled_nested_intent_is_flattened() {
    let resource = resource_from(NESTED);
    let names: Vec<_> = resource.sections.iter().filter_map(|s| s.name()).collect();
    assert_eq!(names, vec!["Parent", "A", "B"]);
    assert_eq!(resource.nested_intents().count(), 0);

    let parent = resource.sections[0].as_simple_intent().unwrap();
    assert!(!parent.has_examples());

    let warnings = messages(&resource, lu::Severity::Warning);
    assert_eq!(
        warnings,
        vec!["no utterances found for intent definition: \"# Parent\""]
    );
    assert!(!resource.has_errors());
}

#[test]
fn test_disabled_children_keep_document_lines() {
    let resource = resource_from(NESTED);
    let spans: Vec<_> = resource
        .sections
        .iter()
        .map(|s| (s.start_line, s.stop_line))
        .collect();
    assert_eq!(spans, vec![(1, 1), (2, 3), (4, 6)]);
    assert_eq!(resource.sections[1].body, "- a");
    assert_eq!(resource.sections[2].body, "- b\n");
}

#[test]
fn test_enabled_nested_intent_is_kept() {
    let resource = resource_from(NESTED_ENABLED);
    assert!(is_section_enabled(&resource.sections));
    assert_eq!(
        kinds(&resource.sections),
        vec![SectionKind::ModelInfo, SectionKind::NestedIntent]
    );
    assert!(resource.diagnostics.is_empty());

    let section = &resource.sections[1];
    let nested = section.as_nested_intent().unwrap();
    assert_eq!(nested.name, "Parent");
    let children: Vec<_> = nested.children.iter().filter_map(|c| c.name()).collect();
    assert_eq!(children, vec!["A", "B"]);
    assert!(resource.simple_intents().all(|s| s.name() != Some("Parent")));
}

#[test]
fn test_qualified_directive_keeps_nested_intent() {
    let resource = resource_from(NESTED_ENABLED_QUALIFIED);
    assert_eq!(
        kinds(&resource.sections),
        vec![SectionKind::ModelInfo, SectionKind::NestedIntent]
    );
    assert!(resource.diagnostics.is_empty());
    let nested = resource.sections[1].as_nested_intent().unwrap();
    let children: Vec<_> = nested.children.iter().filter_map(|c| c.name()).collect();
    assert_eq!(children, vec!["A", "B"]);
}

#[test]
fn test_enabled_children_resolve_within_parent() {
    let resource = resource_from(NESTED_ENABLED);
    let section = &resource.sections[1];
    assert_eq!((section.start_line, section.stop_line), (2, 7));
    assert_eq!(section.body, "## A\n- a\n## B\n- b\n");

    let nested = section.as_nested_intent().unwrap();
    let spans: Vec<_> = nested
        .children
        .iter()
        .map(|c| (c.start_line, c.stop_line))
        .collect();
    assert_eq!(spans, vec![(3, 4), (5, 7)]);
    assert_non_overlapping(&nested.children);
    assert_eq!(nested.children[0].body, "- a");
}

#[test]
fn test_nested_child_diagnostics_once_in_stream() {
    let source = "> !# @enableSections = true\n# Parent\n## A\n## B\n- b\n";
    let resource = resource_from(source);
    assert_eq!(
        messages(&resource, lu::Severity::Warning),
        vec!["no utterances found for intent definition: \"# A\""]
    );
}
