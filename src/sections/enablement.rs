//! The `enableSections` directive and nested intent flattening.

use std::sync::LazyLock;

use regex::Regex;

use super::diagnostics::{Diagnostic, codes};
use super::extract_intent::no_utterances_message;
use super::types::{Section, SectionData, SimpleIntent};

static ENABLE_SECTIONS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"@(enableSections).(.*)=").ok());

/// Whether nested intents are kept as sections for a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SectionEnablement {
    enabled: bool,
}

impl SectionEnablement {
    /// Read the directive from already extracted model info sections.
    pub fn from_sections(sections: &[Section]) -> Self {
        Self {
            enabled: is_section_enabled(sections),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Keep nested intents when enabled, flatten them otherwise.
    pub fn apply(&self, sections: Vec<Section>) -> Vec<Section> {
        if self.enabled {
            sections
        } else {
            flatten_nested_intents(sections)
        }
    }
}

/// True iff some model info line reads `@enableSections<any>= true`.
pub fn is_section_enabled(sections: &[Section]) -> bool {
    sections
        .iter()
        .filter_map(|section| section.as_model_info())
        .any(|info| directive_enables(&info.raw_line))
}

fn directive_enables(line: &str) -> bool {
    let Some(pattern) = ENABLE_SECTIONS.as_ref() else {
        return false;
    };
    pattern
        .find(line)
        .is_some_and(|found| line[found.end()..].trim() == "true")
}

/// Replace each nested intent with an empty intent named after it,
/// followed by its children. Other sections pass through unchanged.
pub fn flatten_nested_intents(sections: Vec<Section>) -> Vec<Section> {
    let mut flattened = Vec::with_capacity(sections.len());
    for section in sections {
        let SectionData::NestedIntent(nested) = section.data else {
            flattened.push(section);
            continue;
        };

        // Own diagnostics come first, then everything bubbled up from children
        let bubbled: usize = nested.children.iter().map(|c| c.diagnostics.len()).sum();
        let own = section.diagnostics.len().saturating_sub(bubbled);
        let mut diagnostics: Vec<_> = section.diagnostics.into_iter().take(own).collect();
        diagnostics.push(
            Diagnostic::warning(no_utterances_message(&nested.name))
                .with_range(nested.header)
                .with_code(codes::NO_UTTERANCES),
        );

        let header = Section::new(
            nested.header,
            SectionData::SimpleIntent(SimpleIntent::empty(nested.name.clone())),
        )
        .with_diagnostics(diagnostics);
        flattened.push(header);
        flattened.extend(nested.children);
    }
    flattened
}
