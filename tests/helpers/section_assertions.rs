//! Assertions over resolved section lists.

use lu::{Section, SectionKind};

pub fn kinds(sections: &[Section]) -> Vec<SectionKind> {
    sections.iter().map(Section::kind).collect()
}

/// Sections are sorted by start line and each span is well formed.
pub fn assert_sorted(sections: &[Section]) {
    for pair in sections.windows(2) {
        assert!(
            pair[0].start_line <= pair[1].start_line,
            "sections out of order: {} then {}",
            pair[0].start_line,
            pair[1].start_line
        );
    }
    for section in sections {
        assert!(section.stop_line >= section.start_line);
    }
}

/// No two siblings share a line.
pub fn assert_non_overlapping(sections: &[Section]) {
    for pair in sections.windows(2) {
        assert!(
            pair[0].stop_line < pair[1].start_line,
            "{} section at lines {}-{} overlaps {} section at line {}",
            pair[0].kind().display(),
            pair[0].start_line,
            pair[0].stop_line,
            pair[1].kind().display(),
            pair[1].start_line
        );
    }
}

/// Ids of every QnA section in order.
pub fn qna_ids(sections: &[Section]) -> Vec<u32> {
    sections
        .iter()
        .filter_map(Section::as_qna)
        .map(|qna| qna.id)
        .collect()
}
