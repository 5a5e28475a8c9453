//! Section types produced by extraction.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::SourceRange;

use super::diagnostics::Diagnostic;

/// The seven kinds of classified section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SectionKind {
    ModelInfo,
    Import,
    Entity,
    NewEntity,
    SimpleIntent,
    NestedIntent,
    Qna,
}

impl SectionKind {
    /// Block kinds extend to the line before the next section.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            SectionKind::SimpleIntent | SectionKind::NestedIntent | SectionKind::Qna
        )
    }

    /// Get a human-readable name for this section kind.
    pub fn display(&self) -> &'static str {
        match self {
            SectionKind::ModelInfo => "model info",
            SectionKind::Import => "import",
            SectionKind::Entity => "entity",
            SectionKind::NewEntity => "new entity",
            SectionKind::SimpleIntent => "simple intent",
            SectionKind::NestedIntent => "nested intent",
            SectionKind::Qna => "qna",
        }
    }
}

/// A classified construct with its resolved span, body and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section {
    /// Span of the construct in the syntax tree.
    pub range: SourceRange,
    /// First line of the resolved span (1-based).
    pub start_line: u32,
    /// Last line of the resolved span (1-based, inclusive).
    pub stop_line: u32,
    /// Literal source text of the body.
    pub body: String,
    /// Diagnostics produced while building this section.
    pub diagnostics: Vec<Diagnostic>,
    /// Kind-specific payload.
    pub data: SectionData,
}

impl Section {
    /// Create a section whose resolved span equals its syntax span.
    pub fn new(range: SourceRange, data: SectionData) -> Self {
        Self {
            range,
            start_line: range.start_line,
            stop_line: range.stop_line,
            body: String::new(),
            diagnostics: Vec::new(),
            data,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn kind(&self) -> SectionKind {
        self.data.kind()
    }

    /// Name of the section, for kinds that have one.
    pub fn name(&self) -> Option<&str> {
        match &self.data {
            SectionData::Entity(e) => Some(&e.name),
            SectionData::NewEntity(e) => Some(&e.name),
            SectionData::SimpleIntent(i) => Some(&i.name),
            SectionData::NestedIntent(i) => Some(&i.name),
            SectionData::ModelInfo(_) | SectionData::Import(_) | SectionData::Qna(_) => None,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    pub fn as_simple_intent(&self) -> Option<&SimpleIntent> {
        match &self.data {
            SectionData::SimpleIntent(intent) => Some(intent),
            _ => None,
        }
    }

    pub fn as_nested_intent(&self) -> Option<&NestedIntent> {
        match &self.data {
            SectionData::NestedIntent(intent) => Some(intent),
            _ => None,
        }
    }

    pub fn as_qna(&self) -> Option<&Qna> {
        match &self.data {
            SectionData::Qna(qna) => Some(qna),
            _ => None,
        }
    }

    pub fn as_model_info(&self) -> Option<&ModelInfo> {
        match &self.data {
            SectionData::ModelInfo(info) => Some(info),
            _ => None,
        }
    }
}

/// Kind-specific section payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum SectionData {
    ModelInfo(ModelInfo),
    Import(Import),
    Entity(Entity),
    NewEntity(NewEntity),
    SimpleIntent(SimpleIntent),
    NestedIntent(NestedIntent),
    Qna(Qna),
}

impl SectionData {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionData::ModelInfo(_) => SectionKind::ModelInfo,
            SectionData::Import(_) => SectionKind::Import,
            SectionData::Entity(_) => SectionKind::Entity,
            SectionData::NewEntity(_) => SectionKind::NewEntity,
            SectionData::SimpleIntent(_) => SectionKind::SimpleIntent,
            SectionData::NestedIntent(_) => SectionKind::NestedIntent,
            SectionData::Qna(_) => SectionKind::Qna,
        }
    }
}

/// A `> !# @key = value` directive line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelInfo {
    pub raw_line: String,
}

impl ModelInfo {
    /// Directive key, e.g. `app.name` for `> !# @app.name = Demo`
    pub fn key(&self) -> Option<&str> {
        let (_, rest) = self.raw_line.split_once('@')?;
        let key = rest.split_once('=').map_or(rest, |(key, _)| key).trim();
        (!key.is_empty()).then_some(key)
    }

    /// Directive value, the trimmed text after the first `=`
    pub fn value(&self) -> Option<&str> {
        let (_, rest) = self.raw_line.split_once('@')?;
        rest.split_once('=').map(|(_, value)| value.trim())
    }
}

/// `[description](path)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Import {
    pub description: String,
    pub path: String,
}

/// `$name : type` with optional list items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entity {
    pub name: SmolStr,
    pub entity_type: String,
    pub raw_definition_line: String,
    pub roles: Vec<SmolStr>,
    pub items: Vec<String>,
}

/// `@ type name [hasRoles ...] [usesFeatures ...]` with optional list items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewEntity {
    pub name: SmolStr,
    pub entity_type: String,
    pub raw_definition_line: String,
    pub roles: Vec<SmolStr>,
    pub features: Vec<SmolStr>,
    pub items: Vec<String>,
}

/// An intent with its example lines and inline entity definitions.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimpleIntent {
    pub name: SmolStr,
    pub utterances: Vec<String>,
    pub patterns: Vec<String>,
    pub entities: Vec<Entity>,
    pub new_entities: Vec<NewEntity>,
}

impl SimpleIntent {
    /// An intent with a name and nothing else
    pub fn empty(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_examples(&self) -> bool {
        !self.utterances.is_empty() || !self.patterns.is_empty()
    }
}

/// An intent containing child intents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NestedIntent {
    pub name: SmolStr,
    /// Span of the `#` header line
    pub header: SourceRange,
    /// SimpleIntent sections, in document order
    pub children: Vec<Section>,
}

/// A numbered question/answer block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Qna {
    /// 0-based position among QnA sections, assigned during body resolution
    pub id: u32,
    pub pair: QnaPair,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QnaPair {
    pub question: String,
    pub alternate_questions: Vec<String>,
    pub filters: IndexMap<String, String>,
    pub answer: String,
}

/// Whether an intent example line is a pattern rather than a plain utterance.
///
/// Patterns reference an entity without a labelled value (`{name}`) or hold
/// an optional-text bracket (`[...]`). Labelled utterances like
/// `{city=Paris}` stay utterances.
pub fn is_pattern(text: &str) -> bool {
    let has_optional = text
        .find('[')
        .is_some_and(|open| text[open..].contains(']'));
    if has_optional {
        return true;
    }

    let mut rest = text;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        if !rest[open + 1..open + close].contains('=') {
            return true;
        }
        rest = &rest[open + close + 1..];
    }
    false
}
