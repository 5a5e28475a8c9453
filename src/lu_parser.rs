//! Parse orchestration: syntax tree, extraction passes, body resolution.

use rayon::prelude::*;

use crate::error::{LuError, MAX_INPUT_LEN};
use crate::resource::LuResource;
use crate::sections::{BodyRangeResolver, extract_sections};
use crate::syntax::SyntaxFile;

/// Stages of a single parse, in the order they are reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Init,
    /// Tokens and syntax tree built
    Lexed,
    /// Extraction passes run
    Classified,
    /// Nested intents kept or flattened
    Resolved,
    /// Final spans and bodies computed
    BodyResolved,
    Done,
}

/// Reusable entry point for parsing LU text.
///
/// Holds no state between calls; every parse builds its own model.
#[derive(Clone, Copy, Debug, Default)]
pub struct LuParser;

impl LuParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one file.
    ///
    /// Malformed content is reported through diagnostics; only input the
    /// syntax tree cannot address is an error.
    pub fn parse(&self, text: &str) -> Result<LuResource, LuError> {
        if text.len() > MAX_INPUT_LEN {
            return Err(LuError::InputTooLarge { len: text.len() });
        }
        let mut phase = Phase::Init;

        let file = SyntaxFile::new(text);
        let mut diagnostics = file.syntax_diagnostics();
        advance(&mut phase, Phase::Lexed);

        if file.lu_file().is_none() {
            tracing::debug!("[PARSE] root is not an LU file, {} diagnostics", diagnostics.len());
            return Ok(LuResource {
                sections: Vec::new(),
                content: text.to_string(),
                diagnostics,
            });
        }

        let extraction = extract_sections(&file);
        advance(&mut phase, Phase::Classified);

        let mut sections = extraction.sections;
        diagnostics.extend(extraction.diagnostics);
        tracing::trace!(
            "[PARSE] enableSections={}",
            extraction.enablement.is_enabled()
        );
        advance(&mut phase, Phase::Resolved);

        let range_diagnostics = BodyRangeResolver::new(text).resolve(&mut sections);
        diagnostics.extend(range_diagnostics);
        advance(&mut phase, Phase::BodyResolved);

        let resource = LuResource {
            sections,
            content: text.to_string(),
            diagnostics,
        };
        advance(&mut phase, Phase::Done);
        tracing::debug!(
            "[PARSE] {} sections, {} errors, {} warnings",
            resource.sections.len(),
            resource.errors().count(),
            resource.warnings().count()
        );
        Ok(resource)
    }
}

fn advance(phase: &mut Phase, next: Phase) {
    debug_assert!(next > *phase);
    tracing::trace!("[PARSE] {:?} -> {:?}", phase, next);
    *phase = next;
}

/// Parse one file with a default parser.
pub fn parse(text: &str) -> Result<LuResource, LuError> {
    LuParser::new().parse(text)
}

/// Parse independent files in parallel.
///
/// Results come back in input order, each paired with its file name.
/// Nothing is merged across files.
pub fn parse_batch<N, T>(files: &[(N, T)]) -> Vec<(&N, Result<LuResource, LuError>)>
where
    N: Sync,
    T: AsRef<str> + Sync,
{
    let parser = LuParser::new();
    files
        .par_iter()
        .map(|(name, text)| (name, parser.parse(text.as_ref())))
        .collect()
}
