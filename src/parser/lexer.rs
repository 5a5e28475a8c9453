//! Logos-based lexer for LU files
//!
//! Fast tokenization using the logos crate. The lexer is lossless: every
//! byte of the input ends up in exactly one token, and input it cannot
//! classify becomes an `ERROR` token instead of failing.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"[ \t\r]+")]
    Whitespace,

    // =========================================================================
    // MARKERS (multi-character first)
    // =========================================================================
    #[token("```")]
    Fence,

    #[token("##")]
    HashHash,

    #[token("#")]
    Hash,

    #[token("`")]
    Backtick,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("?")]
    Question,
    #[token("-")]
    Dash,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("$")]
    Dollar,
    #[token("@")]
    At,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
    #[token("=")]
    Eq,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // =========================================================================
    // TEXT
    // =========================================================================
    #[regex(r"[^ \t\r\n#?\-*+$@>!=:,\[\](){}`]+")]
    Word,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Newline => SyntaxKind::NEWLINE,
            Whitespace => SyntaxKind::WHITESPACE,
            Fence => SyntaxKind::FENCE,
            HashHash => SyntaxKind::HASH_HASH,
            Hash => SyntaxKind::HASH,
            Backtick => SyntaxKind::BACKTICK,
            Question => SyntaxKind::QUESTION,
            Dash => SyntaxKind::DASH,
            Star => SyntaxKind::STAR,
            Plus => SyntaxKind::PLUS,
            Dollar => SyntaxKind::DOLLAR,
            At => SyntaxKind::AT,
            Gt => SyntaxKind::GT,
            Bang => SyntaxKind::BANG,
            Eq => SyntaxKind::EQ,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            Word => SyntaxKind::WORD,
        }
    }
}
