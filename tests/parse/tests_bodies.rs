//! Section body tests.

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_simple_intent_body_excludes_header() {
    let resource = resource_from(SIMPLE_INTENT);
    let section = &resource.sections[0];
    assert_eq!((section.start_line, section.stop_line), (1, 3));
    assert_eq!(section.body, "- hi\n- hello");
}

#[test]
fn test_qna_body_includes_header() {
    let resource = resource_from(SINGLE_QNA);
    let section = &resource.sections[0];
    assert!(section.body.starts_with("# ? q\n"));
    assert_eq!(section.body, "# ? q\n```\na\n```\n");
}

#[test]
fn test_block_body_runs_to_next_section() {
    let source = "# A\n- a\n\n# B\n- b\n";
    let resource = resource_from(source);
    assert_eq!(resource.sections[0].body, "- a\n");
    assert_eq!(resource.sections[0].stop_line, 3);
    assert_eq!(resource.sections[1].start_line, 4);
}

#[test]
fn test_single_line_sections_keep_their_span() {
    let resource = resource_from("[shared](./shared.lu)\n\n\n# A\n- a\n");
    let import = &resource.sections[0];
    assert_eq!((import.start_line, import.stop_line), (1, 1));
    assert_eq!(import.body, "[shared](./shared.lu)");
}

#[test]
fn test_crlf_bodies_keep_terminator() {
    let resource = resource_from("# Greet\r\n- hi\r\n- hello");
    assert_eq!(resource.sections[0].body, "- hi\r\n- hello");
}

#[test]
fn test_header_only_intent_has_empty_body() {
    let resource = resource_from("# Empty");
    assert_eq!(resource.sections.len(), 1);
    assert!(resource.sections[0].body.is_empty());
}
