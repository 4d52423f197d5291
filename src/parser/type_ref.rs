//! Recursive descent parser for compound type references
//!
//! ```text
//! reference      := wildcard | arrayType
//! wildcard       := "?" [ ("extends" | "super") arrayType ]
//! arrayType      := classType { "[" "]" }
//! classType      := IDENT { ("." | "$") IDENT } [ typeArgs ] { ("." | "$") IDENT [ typeArgs ] }
//! typeArgs       := "<" reference { "," reference } ">"
//! ```
//!
//! The dotted run before the first type-argument list becomes one
//! [`ReferenceDescriptor`] leaf. Every segment after it is an inner-type level
//! that hangs off the rendered form of its enclosing level.
//!
//! Parentheses are not part of this grammar and are rejected as invalid
//! characters. Nesting is capped at [`MAX_NESTING_DEPTH`] so that recursion
//! over a parsed reference stays bounded.

use std::fmt;

use text_size::TextSize;

use super::descriptor::ReferenceDescriptor;
use super::lexer::{Lexer, Token, TokenKind};
use crate::base::constants::MAX_NESTING_DEPTH;
use crate::base::{ImportError, ImportResult, MalformedKind, Name};

/// Bound keyword of a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    Extends,
    Super,
}

impl BoundKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Extends => crate::base::constants::EXTENDS,
            Self::Super => crate::base::constants::SUPER,
        }
    }
}

/// Structured type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// `?`, `? extends T` or `? super T`
    Wildcard(Option<(BoundKind, Box<TypeRef>)>),
    /// Element type followed by `dims` pairs of `[]`
    Array { element: Box<TypeRef>, dims: usize },
    /// A class reference with a type-argument list
    Generic { head: Box<TypeRef>, args: Vec<TypeRef> },
    /// An inner-type level following a generic enclosing level
    Nested { outer: Box<TypeRef>, name: Name },
    /// A plain (possibly qualified) type name
    Leaf(ReferenceDescriptor),
}

impl TypeRef {
    /// Parse a raw reference string.
    pub fn parse(input: &str) -> ImportResult<Self> {
        if input.trim().is_empty() {
            return Err(ImportError::malformed(
                input,
                TextSize::new(0),
                MalformedKind::Empty,
            ));
        }
        let tokens: Vec<_> = Lexer::new(input).collect();
        let mut parser = Parser::new(input, &tokens);
        let reference = parser.parse_reference()?;
        parser.finish()?;
        Ok(reference)
    }

    /// The leaf descriptor naming the outermost class, if any.
    pub fn leaf(&self) -> Option<&ReferenceDescriptor> {
        match self {
            Self::Leaf(descriptor) => Some(descriptor),
            Self::Generic { head, .. } => head.leaf(),
            Self::Nested { outer, .. } => outer.leaf(),
            Self::Array { element, .. } => element.leaf(),
            Self::Wildcard(bound) => bound.as_ref().and_then(|(_, ty)| ty.leaf()),
        }
    }

    /// Visit every leaf descriptor in source order.
    pub fn for_each_leaf(&self, f: &mut impl FnMut(&ReferenceDescriptor)) {
        match self {
            Self::Leaf(descriptor) => f(descriptor),
            Self::Generic { head, args } => {
                head.for_each_leaf(f);
                for arg in args {
                    arg.for_each_leaf(f);
                }
            }
            Self::Nested { outer, .. } => outer.for_each_leaf(f),
            Self::Array { element, .. } => element.for_each_leaf(f),
            Self::Wildcard(Some((_, bound))) => bound.for_each_leaf(f),
            Self::Wildcard(None) => {}
        }
    }
}

/// Renders the fully qualified form, normalized (`$` becomes `.`, no spaces
/// between type arguments).
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard(None) => f.write_str("?"),
            Self::Wildcard(Some((kind, bound))) => write!(f, "? {} {bound}", kind.as_str()),
            Self::Array { element, dims } => {
                write!(f, "{element}")?;
                for _ in 0..*dims {
                    f.write_str("[]")?;
                }
                Ok(())
            }
            Self::Generic { head, args } => {
                write!(f, "{head}<")?;
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            Self::Nested { outer, name } => write!(f, "{outer}.{name}"),
            Self::Leaf(descriptor) => write!(f, "{descriptor}"),
        }
    }
}

/// The parser state
struct Parser<'a> {
    input: &'a str,
    tokens: &'a [Token<'a>],
    pos: usize,
    /// Open references plus inner-type levels on the current path
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, tokens: &'a [Token<'a>]) -> Self {
        Self {
            input,
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn finish(&self) -> ImportResult<()> {
        match self.current() {
            None => Ok(()),
            Some(token) => Err(self.error_at(token.offset, unexpected(token.kind))),
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    fn nth(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    fn offset(&self) -> TextSize {
        self.current()
            .map(|t| t.offset)
            .unwrap_or_else(|| TextSize::of(self.input))
    }

    fn error_at(&self, offset: TextSize, reason: MalformedKind) -> ImportError {
        ImportError::malformed(self.input, offset, reason)
    }

    /// Error for the current position, classifying the offending token.
    /// Go one nesting level deeper, failing past [`MAX_NESTING_DEPTH`].
    fn enter(&mut self) -> ImportResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_at(self.offset(), MalformedKind::NestingTooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    fn error_here(&self, expected_something: MalformedKind) -> ImportError {
        let reason = match self.current_kind() {
            None => expected_something,
            Some(kind) if kind.is_separator() || kind == TokenKind::Comma => expected_something,
            Some(kind) => unexpected(kind),
        };
        self.error_at(self.offset(), reason)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<&Token<'a>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_ident(&mut self) -> ImportResult<&'a str> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind == TokenKind::Ident => {
                self.pos += 1;
                Ok(token.text)
            }
            _ => Err(self.error_here(MalformedKind::MissingIdentifier)),
        }
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_reference(&mut self) -> ImportResult<TypeRef> {
        self.enter()?;
        let reference = if self.at(TokenKind::Question) {
            self.parse_wildcard()
        } else {
            self.parse_array_type()
        }?;
        self.depth -= 1;
        Ok(reference)
    }

    fn parse_wildcard(&mut self) -> ImportResult<TypeRef> {
        self.bump();
        let kind = match self.current_kind() {
            Some(TokenKind::ExtendsKw) => BoundKind::Extends,
            Some(TokenKind::SuperKw) => BoundKind::Super,
            // Bare `?` ends at the end of input, an argument separator or a closing `>`
            None | Some(TokenKind::Comma) | Some(TokenKind::RAngle) => {
                return Ok(TypeRef::Wildcard(None));
            }
            Some(_) => {
                return Err(self.error_at(self.offset(), MalformedKind::InvalidWildcardBound));
            }
        };
        self.bump();
        let bound = self.parse_array_type()?;
        Ok(TypeRef::Wildcard(Some((kind, Box::new(bound)))))
    }

    fn parse_array_type(&mut self) -> ImportResult<TypeRef> {
        let element = self.parse_class_type()?;
        let mut dims = 0;
        while self.at(TokenKind::LBracket) {
            let open = self.offset();
            self.bump();
            if !self.eat(TokenKind::RBracket) {
                return Err(self.error_at(open, MalformedKind::UnbalancedSquareBrackets));
            }
            dims += 1;
        }
        if dims == 0 {
            return Ok(element);
        }
        Ok(TypeRef::Array {
            element: Box::new(element),
            dims,
        })
    }

    fn parse_class_type(&mut self) -> ImportResult<TypeRef> {
        let start = self.offset();
        let mut enclosing = Vec::new();
        let mut nested = Vec::new();
        let mut simple = self.expect_ident()?;
        while let Some(kind) = self.current_kind().filter(|k| k.is_separator()) {
            self.bump();
            enclosing.push(simple);
            nested.push(kind == TokenKind::Dollar);
            simple = self.expect_ident()?;
        }

        let descriptor = ReferenceDescriptor::from_segments(&enclosing, simple, &nested);
        if !self.at(TokenKind::LAngle) {
            return Ok(TypeRef::Leaf(descriptor));
        }
        if descriptor.is_base_type() {
            return Err(self.error_at(start, MalformedKind::ArgumentsOnBaseType));
        }

        let args = self.parse_type_args()?;
        let mut ty = TypeRef::Generic {
            head: Box::new(TypeRef::Leaf(descriptor)),
            args,
        };

        // Each inner level wraps the tree once more
        let outer_depth = self.depth;
        while self.current_kind().is_some_and(|k| k.is_separator()) {
            self.enter()?;
            self.bump();
            let name = self.expect_ident()?;
            ty = TypeRef::Nested {
                outer: Box::new(ty),
                name: Name::new(name),
            };
            if self.at(TokenKind::LAngle) {
                let args = self.parse_type_args()?;
                ty = TypeRef::Generic {
                    head: Box::new(ty),
                    args,
                };
            }
        }
        self.depth = outer_depth;
        Ok(ty)
    }

    fn parse_type_args(&mut self) -> ImportResult<Vec<TypeRef>> {
        let open = self.offset();
        self.bump();
        let mut args = Vec::new();
        loop {
            if self.current().is_none() {
                return Err(self.error_at(open, MalformedKind::UnbalancedAngleBrackets));
            }
            if self.at(TokenKind::RAngle) || self.at(TokenKind::Comma) {
                // `<>` or `<A,,B>`
                return Err(self.error_at(self.offset(), MalformedKind::MissingIdentifier));
            }
            args.push(self.parse_reference()?);

            match self.current_kind() {
                Some(TokenKind::Comma) if self.nth(1).is_some() => {
                    self.bump();
                }
                Some(TokenKind::RAngle) => {
                    self.bump();
                    return Ok(args);
                }
                None | Some(TokenKind::Comma) => {
                    return Err(self.error_at(open, MalformedKind::UnbalancedAngleBrackets));
                }
                Some(kind) => return Err(self.error_at(self.offset(), unexpected(kind))),
            }
        }
    }
}

/// Classify a token that appeared where it cannot.
fn unexpected(kind: TokenKind) -> MalformedKind {
    match kind {
        TokenKind::LAngle | TokenKind::RAngle => MalformedKind::UnbalancedAngleBrackets,
        TokenKind::LBracket | TokenKind::RBracket => MalformedKind::UnbalancedSquareBrackets,
        TokenKind::Error => MalformedKind::InvalidCharacter,
        _ => MalformedKind::UnexpectedToken,
    }
}
