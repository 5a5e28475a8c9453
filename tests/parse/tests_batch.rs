//! Batch parsing and JSON export tests.

use lu::{LuParser, parse_batch};

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_batch_results_in_input_order() {
    let files: Vec<(String, String)> = (0..16)
        .map(|i| (format!("file{i}.lu"), qna_blocks(i)))
        .collect();
    let results = parse_batch(&files);

    assert_eq!(results.len(), files.len());
    for (i, (name, result)) in results.iter().enumerate() {
        assert_eq!(*name, &files[i].0);
        let resource = result.as_ref().unwrap();
        assert_eq!(resource.qna_sections().count(), i);
    }
}

#[test]
fn test_batch_matches_sequential_parse() {
    let files = [
        ("full.lu", FULL_FILE),
        ("nested.lu", NESTED),
        ("malformed.lu", MALFORMED_ENTITY),
        ("empty.lu", ""),
    ];
    let parser = LuParser::new();
    for ((_, text), (_, result)) in files.iter().zip(parse_batch(&files)) {
        assert_eq!(result.unwrap(), parser.parse(text).unwrap());
    }
}

#[test]
fn test_batch_does_not_share_qna_ids() {
    let files = [("a.lu", SINGLE_QNA), ("b.lu", SINGLE_QNA)];
    for (_, result) in parse_batch(&files) {
        let resource = result.unwrap();
        let qna = resource.qna_sections().find_map(|s| s.as_qna()).unwrap();
        assert_eq!(qna.id, 0);
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_to_json_renders_sections_and_diagnostics() {
    let resource = resource_from("# Empty\n\n# ? q\n```\na\n```\n");
    let json = resource.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["sections"][0]["data"]["kind"], "SimpleIntent");
    assert_eq!(value["sections"][1]["data"]["kind"], "Qna");
    assert_eq!(value["sections"][1]["data"]["id"], 0);
    assert_eq!(value["diagnostics"][0]["severity"], "Warning");
    assert_eq!(value["content"], "# Empty\n\n# ? q\n```\na\n```\n");
}
