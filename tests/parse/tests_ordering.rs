//! Section ordering, spans and QnA id tests.

use lu::SectionKind;
use rstest::rstest;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::section_assertions::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_empty_input_yields_empty_resource() {
    let resource = resource_from("");
    assert!(resource.sections.is_empty());
    assert!(resource.content.is_empty());
    assert!(resource.diagnostics.is_empty());
}

#[test]
fn test_full_file_sections() {
    let resource = resource_from(FULL_FILE);
    assert_no_errors(&resource);
    assert_eq!(
        kinds(&resource.sections),
        vec![
            SectionKind::ModelInfo,
            SectionKind::Import,
            SectionKind::SimpleIntent,
            SectionKind::Entity,
            SectionKind::NewEntity,
            SectionKind::Qna,
        ]
    );
    assert_sorted(&resource.sections);
    assert_non_overlapping(&resource.sections);
}

#[test]
fn test_full_file_spans() {
    let resource = resource_from(FULL_FILE);
    let spans: Vec<_> = resource
        .sections
        .iter()
        .map(|s| (s.start_line, s.stop_line))
        .collect();
    assert_eq!(spans, vec![(1, 1), (4, 4), (6, 9), (10, 12), (14, 14), (16, 23)]);
}

#[test]
fn test_full_file_payloads() {
    let resource = resource_from(FULL_FILE);

    let intent = resource
        .simple_intents()
        .find_map(|s| s.as_simple_intent())
        .unwrap();
    assert_eq!(intent.name, "BookFlight");
    assert_eq!(intent.utterances, vec!["fly to {city=Paris}"]);
    assert_eq!(intent.patterns, vec!["book a flight to {city}"]);

    let qna = resource.qna_sections().find_map(|s| s.as_qna()).unwrap();
    assert_eq!(qna.pair.question, "where is the office");
    assert_eq!(qna.pair.alternate_questions, vec!["office location"]);
    assert_eq!(qna.pair.filters.get("region").map(String::as_str), Some("emea"));
    assert_eq!(qna.pair.answer, "Second floor.");

    let info = resource
        .model_infos()
        .find_map(|s| s.as_model_info())
        .unwrap();
    assert_eq!(info.key(), Some("app.name"));
    assert_eq!(info.value(), Some("Travel"));

    assert_eq!(resource.entities().next().and_then(|s| s.name()), Some("city"));
    assert_eq!(resource.new_entities().next().and_then(|s| s.name()), Some("address"));
    assert_eq!(resource.imports().count(), 1);
}

#[test]
fn test_sections_sorted_regardless_of_pass_order() {
    // QnA runs last but appears first in the document
    let source = "# ? first\n```\na\n```\n\n# Greet\n- hi\n\n> !# @app.name = Demo\n";
    let resource = resource_from(source);
    assert_eq!(
        kinds(&resource.sections),
        vec![SectionKind::Qna, SectionKind::SimpleIntent, SectionKind::ModelInfo]
    );
    assert_sorted(&resource.sections);
    assert_non_overlapping(&resource.sections);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn test_qna_ids_are_contiguous(#[case] count: usize) {
    let resource = resource_from(&qna_blocks(count));
    let expected: Vec<u32> = (0..count as u32).collect();
    assert_eq!(qna_ids(&resource.sections), expected);
}

#[test]
fn test_qna_ids_follow_document_order_across_kinds() {
    let source = "# ? a\n```\n1\n```\n\n# Greet\n- hi\n\n# ? b\n```\n2\n```\n";
    let resource = resource_from(source);
    assert_eq!(qna_ids(&resource.sections), vec![0, 1]);
    let questions: Vec<_> = resource
        .qna_sections()
        .filter_map(|s| s.as_qna())
        .map(|q| q.pair.question.as_str())
        .collect();
    assert_eq!(questions, vec!["a", "b"]);
}

#[test]
fn test_parse_is_deterministic() {
    let first = resource_from(FULL_FILE);
    let second = resource_from(FULL_FILE);
    assert_eq!(first, second);

    let first = resource_from(MALFORMED_ENTITY);
    let second = resource_from(MALFORMED_ENTITY);
    assert_eq!(first, second);
}
