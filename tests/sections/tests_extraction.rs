//! Extraction API tests on a `SyntaxFile`.

use lu::sections::{BodyRangeResolver, Pass, SectionData, extract_sections};
use lu::syntax::SyntaxFile;
use rstest::rstest;

use crate::helpers::source_fixtures::*;

#[test]
fn test_pass_descriptions() {
    let names: Vec<_> = Pass::ALL.iter().map(|p| p.description()).collect();
    assert_eq!(
        names,
        vec![
            "model information",
            "nested intent section",
            "simple intent section",
            "entities",
            "new entities",
            "import section",
            "qna section",
        ]
    );
}

#[test]
fn test_extraction_before_resolution_keeps_pass_order() {
    let file = SyntaxFile::new(FULL_FILE);
    let extraction = extract_sections(&file);
    let first = extraction.sections.first().map(|s| s.kind());
    assert_eq!(first, Some(lu::SectionKind::ModelInfo));
    let last = extraction.sections.last().map(|s| s.kind());
    assert_eq!(last, Some(lu::SectionKind::Qna));
}

#[test]
fn test_resolver_sorts_extracted_sections() {
    let source = "# ? q\n```\na\n```\n\n> !# @app.name = Demo\n";
    let file = SyntaxFile::new(source);
    let mut sections = extract_sections(&file).sections;
    let diagnostics = BodyRangeResolver::new(source).resolve(&mut sections);

    assert!(diagnostics.is_empty());
    assert!(matches!(sections[0].data, SectionData::Qna(_)));
    assert_eq!((sections[0].start_line, sections[0].stop_line), (1, 5));
    assert!(matches!(sections[1].data, SectionData::ModelInfo(_)));
}

#[test]
fn test_full_file_entities() {
    let extraction = extract_sections(&SyntaxFile::new(FULL_FILE));
    let entity = extraction
        .sections
        .iter()
        .find_map(|s| match &s.data {
            SectionData::Entity(e) => Some(e),
            _ => None,
        })
        .unwrap();
    assert_eq!(entity.items, vec!["paris", "london"]);

    let new_entity = extraction
        .sections
        .iter()
        .find_map(|s| match &s.data {
            SectionData::NewEntity(e) => Some(e),
            _ => None,
        })
        .unwrap();
    assert_eq!(new_entity.entity_type, "ml");
    assert_eq!(new_entity.roles, vec!["from", "to"]);
}

#[rstest]
#[case("$city : list", "list")]
#[case("$city:list", "list")]
#[case("$city : list =", "list =")]
fn test_entity_type_text(#[case] source: &str, #[case] expected: &str) {
    let extraction = extract_sections(&SyntaxFile::new(source));
    let SectionData::Entity(entity) = &extraction.sections[0].data else {
        panic!("expected an entity section");
    };
    assert_eq!(entity.name, "city");
    assert_eq!(entity.entity_type, expected);
}
