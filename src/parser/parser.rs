//! Line-oriented paragraph parser for LU files
//!
//! Builds a rowan GreenNode tree from tokens. Every physical line is
//! classified once by its leading tokens, then paragraphs are assembled
//! from consecutive lines. The tree is lossless: every token of the input
//! appears exactly once, and lines that fit nowhere are wrapped in `ERROR`
//! nodes instead of being dropped.

use super::errors::{ErrorCode, ParseContext, SyntaxError};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse LU source text into a CST
pub fn parse_lu(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let lines = split_lines(&tokens);
    let mut parser = Parser::new(&tokens, lines, TextSize::of(input));
    parser.parse_file();
    parser.finish()
}

/// What a physical line looks like, judged by its leading tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    Blank,
    Comment,
    ModelInfo,
    QnaHeader,
    ChildHeader,
    IntentHeader,
    ListItem,
    FilterHeader,
    Entity,
    NewEntity,
    Import,
    Fence,
    Text,
}

impl LineClass {
    fn is_trivia(self) -> bool {
        matches!(self, Self::Blank | Self::Comment)
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Blank => "blank line",
            Self::Comment => "comment",
            Self::ModelInfo => "model info line",
            Self::QnaHeader => "question header",
            Self::ChildHeader | Self::IntentHeader => "intent header",
            Self::ListItem => "list item",
            Self::FilterHeader => "filter header",
            Self::Entity | Self::NewEntity => "entity definition",
            Self::Import => "import line",
            Self::Fence => "answer fence",
            Self::Text => "text line",
        }
    }
}

/// Token span of one physical line, newline included
#[derive(Debug, Clone, Copy)]
struct Line {
    start: usize,
    end: usize,
    class: LineClass,
}

fn split_lines(tokens: &[Token<'_>]) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (idx, token) in tokens.iter().enumerate() {
        if token.kind == SyntaxKind::NEWLINE {
            lines.push(Line {
                start,
                end: idx + 1,
                class: classify(&tokens[start..idx + 1]),
            });
            start = idx + 1;
        }
    }
    if start < tokens.len() {
        lines.push(Line {
            start,
            end: tokens.len(),
            class: classify(&tokens[start..]),
        });
    }
    lines
}

fn classify(line: &[Token<'_>]) -> LineClass {
    let mut significant = line.iter().filter(|t| !t.kind.is_trivia());
    let Some(first) = significant.next() else {
        return LineClass::Blank;
    };
    let second = significant.next();
    let third = significant.next();

    match first.kind {
        SyntaxKind::GT => {
            let is_directive = matches!(second.map(|t| t.kind), Some(SyntaxKind::BANG))
                && matches!(third.map(|t| t.kind), Some(SyntaxKind::HASH))
                && matches!(significant.next().map(|t| t.kind), Some(SyntaxKind::AT));
            if is_directive {
                LineClass::ModelInfo
            } else {
                LineClass::Comment
            }
        }
        SyntaxKind::HASH | SyntaxKind::HASH_HASH
            if matches!(second.map(|t| t.kind), Some(SyntaxKind::QUESTION)) =>
        {
            LineClass::QnaHeader
        }
        SyntaxKind::HASH => LineClass::IntentHeader,
        SyntaxKind::HASH_HASH => LineClass::ChildHeader,
        SyntaxKind::STAR
            if matches!(second.map(|t| t.kind), Some(SyntaxKind::STAR))
                && third.is_some_and(|t| {
                    t.kind == SyntaxKind::WORD && t.text.eq_ignore_ascii_case("filters")
                }) =>
        {
            LineClass::FilterHeader
        }
        SyntaxKind::DASH | SyntaxKind::STAR | SyntaxKind::PLUS => LineClass::ListItem,
        SyntaxKind::DOLLAR => LineClass::Entity,
        SyntaxKind::AT => LineClass::NewEntity,
        SyntaxKind::L_BRACKET => LineClass::Import,
        SyntaxKind::FENCE => LineClass::Fence,
        _ => LineClass::Text,
    }
}

/// Index one past the last non-trivia token
fn content_end(toks: &[Token<'_>]) -> usize {
    toks.iter()
        .rposition(|t| !t.kind.is_trivia())
        .map_or(0, |idx| idx + 1)
}

/// First non-trivia index in `from..end`, or `end`
fn next_significant(toks: &[Token<'_>], from: usize, end: usize) -> usize {
    (from..end)
        .find(|&idx| !toks[idx].kind.is_trivia())
        .unwrap_or(end)
}

/// End of a run of adjacent non-trivia tokens, stopping at `=` and `,`
fn run_end(toks: &[Token<'_>], from: usize, end: usize) -> usize {
    let mut idx = from;
    while idx < end
        && !toks[idx].kind.is_trivia()
        && !matches!(toks[idx].kind, SyntaxKind::EQ | SyntaxKind::COMMA)
    {
        idx += 1;
    }
    idx
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    lines: Vec<Line>,
    line: usize,
    text_len: TextSize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], lines: Vec<Line>, text_len: TextSize) -> Self {
        Self {
            tokens,
            lines,
            line: 0,
            text_len,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Line inspection
    // =========================================================================

    fn current_class(&self) -> Option<LineClass> {
        self.lines.get(self.line).map(|l| l.class)
    }

    fn at(&self, class: LineClass) -> bool {
        self.current_class() == Some(class)
    }

    fn line_tokens(&self) -> &'a [Token<'a>] {
        let line = self.lines[self.line];
        &self.tokens[line.start..line.end]
    }

    /// Class of the first non-blank, non-comment line at or after `from`
    fn next_significant_class(&self, from: usize) -> Option<LineClass> {
        self.lines[from.min(self.lines.len())..]
            .iter()
            .map(|l| l.class)
            .find(|c| !c.is_trivia())
    }

    /// Range of the current line without its line break
    fn line_range(&self) -> TextRange {
        let toks = self.line_tokens();
        let end = toks
            .iter()
            .rposition(|t| t.kind != SyntaxKind::NEWLINE)
            .map_or(0, |idx| idx + 1);
        match (toks.first(), end) {
            (Some(first), end) if end > 0 => {
                let last = &toks[end - 1];
                TextRange::new(first.offset, last.offset + TextSize::of(last.text))
            }
            (Some(first), _) => TextRange::empty(first.offset),
            (None, _) => TextRange::empty(self.text_len),
        }
    }

    // =========================================================================
    // Token and line consumption
    // =========================================================================

    fn emit_tokens(&mut self, toks: &[Token<'_>]) {
        for token in toks {
            if token.kind == SyntaxKind::ERROR {
                self.errors.push(
                    SyntaxError::new(
                        ErrorCode::E0101,
                        TextRange::at(token.offset, TextSize::of(token.text)),
                    )
                    .with_message(format!("invalid character {:?}", token.text)),
                );
            }
            self.builder.token(token.kind.into(), token.text);
        }
    }

    /// Emit tokens, wrapping everything between the first and last
    /// non-trivia token in a `kind` node. No node is built for an all-trivia
    /// slice.
    fn emit_trimmed_node(&mut self, toks: &[Token<'_>], kind: SyntaxKind) {
        let Some(first) = toks.iter().position(|t| !t.kind.is_trivia()) else {
            self.emit_tokens(toks);
            return;
        };
        let last = toks.iter().rposition(|t| !t.kind.is_trivia()).unwrap_or(first);
        self.emit_tokens(&toks[..first]);
        self.start_node(kind);
        self.emit_tokens(&toks[first..=last]);
        self.finish_node();
        self.emit_tokens(&toks[last + 1..]);
    }

    fn bump_line(&mut self) {
        let toks = self.line_tokens();
        self.emit_tokens(toks);
        self.line += 1;
    }

    fn bump_line_as(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump_line();
        self.finish_node();
    }

    /// Consume blank and comment lines, but only when the next significant
    /// line is accepted by `accept`. Returns whether such a line follows.
    fn skip_trivia_lines_if(&mut self, accept: impl Fn(LineClass) -> bool) -> bool {
        match self.next_significant_class(self.line) {
            Some(class) if accept(class) => {
                while let Some(class) = self.current_class() {
                    match class {
                        LineClass::Blank => self.bump_line(),
                        LineClass::Comment => self.bump_line_as(SyntaxKind::COMMENT_LINE),
                        _ => break,
                    }
                }
                true
            }
            _ => false,
        }
    }

    /// Emit a header-like line: the first `prefix` significant tokens stay
    /// bare, the rest of the content is wrapped in `tail_kind`.
    /// Returns whether a non-empty tail was found.
    fn split_line(&mut self, kind: SyntaxKind, prefix: usize, tail_kind: SyntaxKind) -> bool {
        let toks = self.line_tokens();
        let end = content_end(toks);

        let mut prefix_end = 0;
        let mut seen = 0;
        while prefix_end < toks.len() && seen < prefix {
            if !toks[prefix_end].kind.is_trivia() {
                seen += 1;
            }
            prefix_end += 1;
        }
        let tail_start = next_significant(toks, prefix_end, end);
        let has_tail = tail_start < end;

        self.start_node(kind);
        self.emit_tokens(&toks[..tail_start]);
        if has_tail {
            self.start_node(tail_kind);
            self.emit_tokens(&toks[tail_start..end]);
            self.finish_node();
        }
        self.emit_tokens(&toks[end.max(tail_start)..]);
        self.finish_node();
        self.line += 1;
        has_tail
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    /// Wrap a line that fits nowhere in an ERROR node
    fn stray_line(&mut self, context: ParseContext) {
        let class = self.current_class().unwrap_or(LineClass::Text);
        let mut err =
            SyntaxError::unexpected(class.describe(), context, ErrorCode::E0202, self.line_range());
        if class == LineClass::ListItem {
            err = err.with_hint("utterances need an intent header such as '# IntentName' above them");
        }
        self.error(err);
        self.bump_line_as(SyntaxKind::ERROR);
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn paragraph(&mut self, body: fn(&mut Self)) {
        self.start_node(SyntaxKind::PARAGRAPH);
        body(self);
        self.finish_node();
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// LuFile = (Paragraph | trivia line)*
    fn parse_file(&mut self) {
        self.start_node(SyntaxKind::LU_FILE);

        while let Some(class) = self.current_class() {
            match class {
                LineClass::Blank => self.bump_line(),
                LineClass::Comment => self.bump_line_as(SyntaxKind::COMMENT_LINE),
                LineClass::ModelInfo => self.paragraph(Self::parse_model_info),
                LineClass::Import => self.paragraph(Self::parse_import),
                LineClass::QnaHeader => self.paragraph(Self::parse_qna),
                LineClass::IntentHeader if self.is_nested_intent() => {
                    self.paragraph(Self::parse_nested_intent)
                }
                LineClass::IntentHeader | LineClass::ChildHeader => {
                    self.paragraph(Self::parse_simple_intent)
                }
                LineClass::Entity | LineClass::NewEntity => {
                    self.paragraph(Self::parse_entity_paragraph)
                }
                LineClass::ListItem | LineClass::FilterHeader | LineClass::Fence | LineClass::Text => {
                    self.stray_line(ParseContext::TopLevel)
                }
            }
        }

        self.finish_node();
    }

    /// A `#` header directly followed by a `##` header opens a nested intent
    fn is_nested_intent(&self) -> bool {
        self.at(LineClass::IntentHeader)
            && self.next_significant_class(self.line + 1) == Some(LineClass::ChildHeader)
    }

    /// ModelInfo = '>' '!' '#' '@' key '=' value
    fn parse_model_info(&mut self) {
        self.bump_line_as(SyntaxKind::MODEL_INFO_SECTION);
    }

    /// Import = '[' description ']' '(' path ')'
    fn parse_import(&mut self) {
        let toks = self.line_tokens();
        let end = content_end(toks);
        let range = self.line_range();
        let open = next_significant(toks, 0, end);
        let close = (open + 1..end).find(|&idx| {
            toks[idx].kind == SyntaxKind::R_BRACKET
                && toks.get(idx + 1).map(|t| t.kind) == Some(SyntaxKind::L_PAREN)
        });

        self.start_node(SyntaxKind::IMPORT_SECTION);
        match close {
            None => {
                self.error(
                    SyntaxError::new(ErrorCode::E0501, range)
                        .with_message(format!(
                            "invalid import line {}, expected {}",
                            ParseContext::Import.location(),
                            ParseContext::Import.expectation()
                        ))
                        .with_hint("write imports as '[description](path)'"),
                );
                self.emit_tokens(toks);
            }
            Some(close) => {
                self.emit_tokens(&toks[..=open]);
                if close > open + 1 {
                    self.start_node(SyntaxKind::IMPORT_DESCRIPTION);
                    self.emit_tokens(&toks[open + 1..close]);
                    self.finish_node();
                }
                self.emit_tokens(&toks[close..close + 2]);

                let path_start = close + 2;
                let paren = (path_start..end)
                    .rev()
                    .find(|&idx| toks[idx].kind == SyntaxKind::R_PAREN);
                let path_end = paren.unwrap_or(end);
                if paren.is_none() {
                    self.error(
                        SyntaxError::new(ErrorCode::E0502, range)
                            .with_hint("add ')' after the import path"),
                    );
                }
                if path_end > path_start {
                    self.start_node(SyntaxKind::IMPORT_PATH);
                    self.emit_tokens(&toks[path_start..path_end]);
                    self.finish_node();
                }
                self.emit_tokens(&toks[path_end..]);
            }
        }
        self.finish_node();
        self.line += 1;
    }

    /// NestedIntent = '#' name ChildIntent+
    fn parse_nested_intent(&mut self) {
        self.start_node(SyntaxKind::NESTED_INTENT_SECTION);
        self.split_line(SyntaxKind::NESTED_INTENT_NAME_LINE, 1, SyntaxKind::INTENT_NAME);

        let is_child = |class: LineClass| class == LineClass::ChildHeader;
        self.skip_trivia_lines_if(is_child);
        self.start_node(SyntaxKind::NESTED_INTENT_BODY);
        while self.skip_trivia_lines_if(is_child) {
            self.parse_simple_intent();
        }
        self.finish_node();

        self.finish_node();
    }

    /// SimpleIntent = IntentDefinition EntityDefinition*
    /// IntentDefinition = ('#' | '##') name IntentBody?
    fn parse_simple_intent(&mut self) {
        self.start_node(SyntaxKind::SIMPLE_INTENT_SECTION);

        self.start_node(SyntaxKind::INTENT_DEFINITION);
        self.split_line(SyntaxKind::INTENT_NAME_LINE, 1, SyntaxKind::INTENT_NAME);
        if self.at_intent_body_line() {
            self.start_node(SyntaxKind::INTENT_BODY);
            while self.at_intent_body_line() {
                if self.at(LineClass::ListItem) {
                    self.bump_line_as(SyntaxKind::UTTERANCE_LINE);
                } else {
                    self.bump_line_as(SyntaxKind::INVALID_LINE);
                }
            }
            self.finish_node();
        }
        self.finish_node();

        self.parse_entity_definitions();
        self.finish_node();
    }

    /// Utterances continue across blank lines; unmarked text only when adjacent
    fn at_intent_body_line(&mut self) -> bool {
        self.at(LineClass::Text) || self.skip_trivia_lines_if(|c| c == LineClass::ListItem)
    }

    /// A paragraph of entity definitions with no intent header
    fn parse_entity_paragraph(&mut self) {
        self.start_node(SyntaxKind::SIMPLE_INTENT_SECTION);
        self.parse_entity_definitions();
        self.finish_node();
    }

    /// Definitions must be adjacent; a blank line starts a new paragraph
    fn parse_entity_definitions(&mut self) {
        while matches!(
            self.current_class(),
            Some(LineClass::Entity | LineClass::NewEntity)
        ) {
            if self.at(LineClass::Entity) {
                self.start_node(SyntaxKind::ENTITY_SECTION);
                self.parse_entity_line();
            } else {
                self.start_node(SyntaxKind::NEW_ENTITY_SECTION);
                self.parse_new_entity_line();
            }
            self.parse_entity_body();
            self.finish_node();
        }
    }

    /// EntityLine = '$' name (':' type)?
    fn parse_entity_line(&mut self) {
        let toks = self.line_tokens();
        let end = content_end(toks);
        let dollar = next_significant(toks, 0, end);
        let colon = (dollar + 1..end).find(|&idx| toks[idx].kind == SyntaxKind::COLON);

        self.start_node(SyntaxKind::ENTITY_LINE);
        self.emit_tokens(&toks[..(dollar + 1).min(toks.len())]);
        let name_end = colon.unwrap_or(end).max(dollar + 1);
        self.emit_trimmed_node(&toks[(dollar + 1).min(name_end)..name_end], SyntaxKind::ENTITY_NAME);
        let rest = match colon {
            Some(colon) => {
                self.emit_tokens(&toks[colon..=colon]);
                self.emit_trimmed_node(&toks[colon + 1..end], SyntaxKind::ENTITY_TYPE);
                end
            }
            None => name_end,
        };
        self.emit_tokens(&toks[rest.max(name_end).min(toks.len())..]);
        self.finish_node();
        self.line += 1;
    }

    /// NewEntityLine = '@' type name rest
    fn parse_new_entity_line(&mut self) {
        let toks = self.line_tokens();
        let end = content_end(toks);
        let at = next_significant(toks, 0, end);
        let type_start = next_significant(toks, (at + 1).min(end), end);
        let type_end = run_end(toks, type_start, end);
        let name_start = next_significant(toks, type_end, end);
        let name_end = run_end(toks, name_start, end);

        self.start_node(SyntaxKind::NEW_ENTITY_LINE);
        self.emit_tokens(&toks[..type_start]);
        if type_end > type_start {
            self.start_node(SyntaxKind::NEW_ENTITY_TYPE);
            self.emit_tokens(&toks[type_start..type_end]);
            self.finish_node();
        }
        self.emit_tokens(&toks[type_end..name_start]);
        if name_end > name_start {
            self.start_node(SyntaxKind::NEW_ENTITY_NAME);
            self.emit_tokens(&toks[name_start..name_end]);
            self.finish_node();
        }
        self.emit_tokens(&toks[name_end..]);
        self.finish_node();
        self.line += 1;
    }

    /// EntityBody = ListItem*
    fn parse_entity_body(&mut self) {
        let is_item = |class: LineClass| class == LineClass::ListItem;
        if !self.skip_trivia_lines_if(is_item) {
            return;
        }
        self.start_node(SyntaxKind::ENTITY_BODY);
        while self.skip_trivia_lines_if(is_item) {
            self.bump_line_as(SyntaxKind::LIST_ITEM);
        }
        self.finish_node();
    }

    /// Qna = '#' '?' question AltQuestion* Filters? Answer?
    fn parse_qna(&mut self) {
        self.start_node(SyntaxKind::QNA_SECTION);

        let range = self.line_range();
        if !self.split_line(SyntaxKind::QNA_QUESTION_LINE, 2, SyntaxKind::QNA_QUESTION) {
            self.error(
                SyntaxError::new(ErrorCode::E0601, range).with_message("missing question after '# ?'"),
            );
        }

        let is_body = |class: LineClass| {
            matches!(
                class,
                LineClass::ListItem | LineClass::FilterHeader | LineClass::Fence
            )
        };
        while self.at(LineClass::Text) || self.skip_trivia_lines_if(is_body) {
            match self.current_class() {
                Some(LineClass::ListItem) => self.bump_line_as(SyntaxKind::QNA_ALT_QUESTION),
                Some(LineClass::FilterHeader) => self.parse_qna_filters(),
                Some(LineClass::Fence) => {
                    self.parse_answer();
                    break;
                }
                _ => self.bump_line_as(SyntaxKind::INVALID_LINE),
            }
        }

        self.finish_node();
    }

    /// Filters = '**Filters:**' FilterLine*
    fn parse_qna_filters(&mut self) {
        self.start_node(SyntaxKind::QNA_FILTER_SECTION);
        self.bump_line();
        while self.skip_trivia_lines_if(|c| c == LineClass::ListItem) {
            let has_eq = self.line_tokens().iter().any(|t| t.kind == SyntaxKind::EQ);
            if !has_eq {
                let range = self.line_range();
                self.error(SyntaxError::unexpected(
                    "line without '='",
                    ParseContext::QnaFilters,
                    ErrorCode::E0602,
                    range,
                ));
            }
            self.bump_line_as(SyntaxKind::QNA_FILTER_LINE);
        }
        self.finish_node();
    }

    /// Answer = '```' line* '```'
    fn parse_answer(&mut self) {
        self.start_node(SyntaxKind::QNA_ANSWER);
        let opening = self.line_range();
        self.bump_line_as(SyntaxKind::ANSWER_FENCE);

        let mut closed = false;
        while let Some(class) = self.current_class() {
            if class == LineClass::Fence {
                self.bump_line_as(SyntaxKind::ANSWER_FENCE);
                closed = true;
                break;
            }
            self.bump_line();
        }

        if !closed {
            self.error(
                SyntaxError::new(ErrorCode::E0201, TextRange::empty(self.text_len))
                    .with_message(format!(
                        "unterminated answer block {}",
                        ParseContext::AnswerBlock.location()
                    ))
                    .with_hint("close the answer with '```'")
                    .with_related("answer block opened here", opening),
            );
        }
        self.finish_node();
    }
}
