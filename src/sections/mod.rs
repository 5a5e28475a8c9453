//! Section extraction, from typed paragraphs to resolved sections.
//!
//! Extraction works directly with the typed AST wrapper types from
//! `crate::parser` (e.g., `SimpleIntentSection`, `QnaSection`), producing
//! `Section` values without any intermediate representation.
//!
//! ## Pipeline
//!
//! ```text
//! SyntaxFile (paragraphs + line index)
//!     │
//!     ▼
//! Pass::ALL, model info first     ← one extractor per kind, failures isolated
//!     │
//!     ▼
//! SectionEnablement               ← keep or flatten nested intents
//!     │
//!     ▼
//! BodyRangeResolver               ← final spans, bodies, QnA ids
//! ```
//!
//! # Module structure
//!
//! - [`types`] - Section, SectionKind and the per-kind payloads
//! - [`diagnostics`] - Diagnostic, Severity, codes and the collector
//! - [`extract`] - Pass ordering and the extraction entry point
//! - [`extract_intent`] - Nested and simple intent extractors
//! - [`extract_entity`] - `$` and `@` entity extractors
//! - [`extract_leaf`] - Model info, import and QnA extractors
//! - [`enablement`] - The `enableSections` directive
//! - [`body`] - Body range resolution

mod body;
mod context;
mod diagnostics;
mod enablement;
mod error;
mod extract;
mod extract_entity;
mod extract_intent;
mod extract_leaf;
mod types;


pub use body::{BodyRangeResolver, RangeFault, check_span};
pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use enablement::{SectionEnablement, flatten_nested_intents, is_section_enabled};
pub use error::ExtractError;
pub use extract::{Extraction, Pass, extract_sections};
pub use types::{
    Entity, Import, ModelInfo, NestedIntent, NewEntity, Qna, QnaPair, Section, SectionData,
    SectionKind, SimpleIntent, is_pattern,
};
