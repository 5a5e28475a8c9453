//! Body range resolution.
//!
//! Block sections (intents and QnA) run until the line before the next
//! section; single-span sections keep the span the syntax tree gave them.
//! Bodies are cut from the source text so they stay byte-exact apart from
//! the line terminator, which is normalized to the document's own.

use thiserror::Error;

use crate::base::SourceRange;

use super::diagnostics::{Diagnostic, codes};
use super::types::{Section, SectionData, SectionKind};

/// An inconsistent section line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeFault {
    #[error("start line {start} is before the first line")]
    StartBeforeFirstLine { start: u32 },

    #[error("stop line {stop} is before start line {start}")]
    Inverted { start: u32, stop: u32 },

    #[error("stop line {stop} is past the last line ({line_count})")]
    PastEnd { stop: u32, line_count: u32 },
}

/// Validate a 1-based inclusive span against a document of `line_count` lines.
pub fn check_span(start: u32, stop: u32, line_count: u32) -> Result<(), RangeFault> {
    if start < 1 {
        return Err(RangeFault::StartBeforeFirstLine { start });
    }
    if stop < start {
        return Err(RangeFault::Inverted { start, stop });
    }
    if stop > line_count {
        return Err(RangeFault::PastEnd { stop, line_count });
    }
    Ok(())
}

/// Computes final line spans and literal bodies for extracted sections.
pub struct BodyRangeResolver<'a> {
    lines: Vec<&'a str>,
    terminator: &'static str,
}

impl<'a> BodyRangeResolver<'a> {
    pub fn new(content: &'a str) -> Self {
        let lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let terminator = if content.contains("\r\n") { "\r\n" } else { "\n" };
        Self { lines, terminator }
    }

    pub fn line_count(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }

    /// Sort sections by start line and fill in spans, bodies and QnA ids.
    ///
    /// Returns the range diagnostics, which are also attached to the
    /// sections they concern.
    pub fn resolve(&self, sections: &mut [Section]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut qna_id = 0;
        self.resolve_level(sections, self.line_count(), &mut qna_id, &mut diagnostics);
        diagnostics
    }

    /// Resolve one level of siblings against the first `line_count` lines.
    fn resolve_level(
        &self,
        sections: &mut [Section],
        line_count: u32,
        qna_id: &mut u32,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        sections.sort_by_key(|section| section.range.start_line);
        let next_starts: Vec<Option<u32>> = sections
            .iter()
            .skip(1)
            .map(|section| Some(section.range.start_line))
            .chain(std::iter::once(None))
            .collect();

        for (section, next_start) in sections.iter_mut().zip(next_starts) {
            let kind = section.kind();
            let start = section.range.start_line;
            let stop = if kind.is_block() {
                next_start.map_or(line_count, |next| next.saturating_sub(1))
            } else {
                section.range.stop_line
            };

            if let SectionData::Qna(qna) = &mut section.data {
                qna.id = *qna_id;
                *qna_id += 1;
            }

            match check_span(start, stop, line_count) {
                Ok(()) => {
                    let body_start = match kind {
                        SectionKind::SimpleIntent | SectionKind::NestedIntent => start + 1,
                        _ => start,
                    };
                    section.start_line = start;
                    section.stop_line = stop;
                    section.body = self.join(body_start, stop);
                }
                Err(fault) => {
                    let diagnostic = Diagnostic::error(format!(
                        "invalid range for {} section: {}",
                        kind.display(),
                        fault
                    ))
                    .with_range(SourceRange::lines(start, stop))
                    .with_code(codes::INVALID_RANGE);
                    section.diagnostics.push(diagnostic.clone());
                    diagnostics.push(diagnostic);
                    section.start_line = start;
                    section.stop_line = start;
                    section.body.clear();
                }
            }

            let parent_stop = section.stop_line;
            if let SectionData::NestedIntent(nested) = &mut section.data {
                self.resolve_level(&mut nested.children, parent_stop, qna_id, diagnostics);
            }
        }
    }

    /// Join 1-based lines `from..=to`; empty when `from > to`
    fn join(&self, from: u32, to: u32) -> String {
        if from > to || from < 1 {
            return String::new();
        }
        let end = (to as usize).min(self.lines.len());
        let begin = (from as usize - 1).min(end);
        self.lines[begin..end].join(self.terminator)
    }
}
