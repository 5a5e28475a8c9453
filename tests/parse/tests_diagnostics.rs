//! Diagnostic stream tests.

use lu::{SectionKind, Severity};
use rstest::rstest;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::section_assertions::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_malformed_entity_fails_only_entity_pass() {
    let resource = resource_from(MALFORMED_ENTITY);
    assert_eq!(
        kinds(&resource.sections),
        vec![SectionKind::SimpleIntent, SectionKind::Qna]
    );
    let errors = messages(&resource, Severity::Error);
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(errors[0].contains("entities"));
    assert!(resource.has_errors());
}

#[rstest]
#[case::nested_intent(
    MALFORMED_NESTED_CHILD,
    "nested intent section",
    vec![SectionKind::SimpleIntent]
)]
#[case::simple_intent(
    MALFORMED_INLINE_ENTITY,
    "simple intent section",
    vec![SectionKind::Entity, SectionKind::Qna]
)]
fn test_failing_intent_pass_drops_only_its_sections(
    #[case] source: &str,
    #[case] pass: &str,
    #[case] expected: Vec<SectionKind>,
) {
    let resource = resource_from(source);
    assert_eq!(kinds(&resource.sections), expected);
    let errors = messages(&resource, Severity::Error);
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(
        errors[0].starts_with(&format!("Error happened when parsing {pass}: ")),
        "{}",
        errors[0]
    );
    assert!(errors[0].contains("missing entity name"));
}

#[test]
fn test_failing_nested_pass_keeps_later_intents() {
    let resource = resource_from(MALFORMED_NESTED_CHILD);
    let names: Vec<_> = resource.sections.iter().filter_map(|s| s.name()).collect();
    assert_eq!(names, vec!["Q"]);
}

#[test]
fn test_warnings_only_is_usable() {
    let resource = resource_from("# Empty\n\n# Greet\n- hi\n");
    assert!(!resource.has_errors());
    assert_eq!(
        messages(&resource, Severity::Warning),
        vec!["no utterances found for intent definition: \"# Empty\""]
    );
}

#[rstest]
#[case::stray_text("hello there\n")]
#[case::stray_list_item("- orphan\n")]
#[case::malformed_import("[broken\n")]
#[case::unterminated_answer("# ? q\n```\nnever closed\n")]
#[case::invalid_intent_line("# Greet\n- hi\nnot an utterance\n")]
fn test_malformed_content_is_an_error_not_a_failure(#[case] source: &str) {
    let resource = lu::parse(source).unwrap();
    assert!(resource.has_errors());
    assert!(resource.errors().all(|d| d.range.is_some()));
}

#[test]
fn test_unterminated_answer_points_at_opening_fence() {
    let resource = resource_from("# ? q\n```\nnever closed\n");
    let unterminated: Vec<_> = resource
        .errors()
        .filter(|d| d.code.as_deref() == Some("E0201"))
        .collect();
    assert_eq!(unterminated.len(), 1);
    assert!(
        unterminated[0]
            .message
            .ends_with("(answer block opened here: line 2)"),
        "{}",
        unterminated[0].message
    );
}

#[test]
fn test_syntax_errors_precede_pass_diagnostics() {
    let resource = resource_from("stray\n\n# Empty\n");
    assert_eq!(resource.diagnostics.len(), 2);
    assert_eq!(resource.diagnostics[0].severity, Severity::Error);
    assert_eq!(resource.diagnostics[1].severity, Severity::Warning);
}

#[test]
fn test_pass_diagnostics_follow_pass_order() {
    // Simple intents run before QnA even when the QnA comes first
    let resource = resource_from("# ? q\n- alt\n\n# Empty\n");
    assert_eq!(
        messages(&resource, Severity::Warning),
        vec![
            "no utterances found for intent definition: \"# Empty\"",
            "no answer found for question: \"q\"",
        ]
    );
}

#[test]
fn test_section_diagnostics_appear_in_stream() {
    let resource = resource_from("# Greet\n- hi\noops\n");
    let section = &resource.sections[0];
    assert_eq!(section.diagnostics.len(), 1);
    assert!(resource.diagnostics.contains(&section.diagnostics[0]));
}
