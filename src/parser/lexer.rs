//! Logos-based lexer for type references
//!
//! Fast tokenization using the logos crate.

use logos::Logos;
use text_size::TextSize;

/// Token kinds of the reference grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    Dot,
    Dollar,
    Comma,
    LAngle,
    RAngle,
    LBracket,
    RBracket,
    Question,
    ExtendsKw,
    SuperKw,
    /// Anything logos could not match
    Error,
}

impl TokenKind {
    /// Check if this token separates the segments of a class reference.
    pub fn is_separator(self) -> bool {
        matches!(self, Self::Dot | Self::Dollar)
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset =
            TextSize::try_from(self.inner.span().start).unwrap_or(TextSize::new(u32::MAX));

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum LogosToken {
    // Keywords win over identifiers of the same length
    #[token("extends")]
    ExtendsKw,

    #[token("super")]
    SuperKw,

    // `$` is the nested-type separator, so it is excluded from identifiers
    #[regex(r"[\p{XID_Start}_][\p{XID_Continue}]*")]
    Ident,

    #[token(".")]
    Dot,

    #[token("$")]
    Dollar,

    #[token(",")]
    Comma,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("?")]
    Question,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::ExtendsKw => TokenKind::ExtendsKw,
            LogosToken::SuperKw => TokenKind::SuperKw,
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::Dot => TokenKind::Dot,
            LogosToken::Dollar => TokenKind::Dollar,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::LAngle => TokenKind::LAngle,
            LogosToken::RAngle => TokenKind::RAngle,
            LogosToken::LBracket => TokenKind::LBracket,
            LogosToken::RBracket => TokenKind::RBracket,
            LogosToken::Question => TokenKind::Question,
        }
    }
}
