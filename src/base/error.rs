//! Error types for reference parsing, scope composition and import bookkeeping.

use text_size::TextSize;
use thiserror::Error;

/// Why a reference string could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedKind {
    /// The reference is empty or only whitespace.
    Empty,
    /// A `<` without a matching `>`, or a stray `>`.
    UnbalancedAngleBrackets,
    /// A `[` without a matching `]`, or a stray `]`.
    UnbalancedSquareBrackets,
    /// A character that cannot appear in a type reference.
    InvalidCharacter,
    /// A token that is legal on its own but not at this position.
    UnexpectedToken,
    /// A separator or bracket that is not followed by an identifier or type.
    MissingIdentifier,
    /// Type arguments attached to a primitive type or `void`.
    ArgumentsOnBaseType,
    /// A `?` followed by something other than `extends` or `super`.
    InvalidWildcardBound,
    /// Type arguments or inner-type levels nested deeper than
    /// [`MAX_NESTING_DEPTH`](crate::base::constants::MAX_NESTING_DEPTH).
    NestingTooDeep,
}

impl MalformedKind {
    /// Get a human readable description.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty reference",
            Self::UnbalancedAngleBrackets => "unbalanced '<' / '>'",
            Self::UnbalancedSquareBrackets => "unbalanced '[' / ']'",
            Self::InvalidCharacter => "invalid character",
            Self::UnexpectedToken => "unexpected token",
            Self::MissingIdentifier => "missing identifier",
            Self::ArgumentsOnBaseType => "type arguments on a primitive type",
            Self::InvalidWildcardBound => "wildcard bound must be 'extends' or 'super'",
            Self::NestingTooDeep => "type nesting too deep",
        }
    }
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the import engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The reference string does not follow the reference grammar.
    #[error("Malformed reference '{reference}' at offset {}: {reason}", u32::from(*.offset))]
    MalformedReference {
        reference: String,
        offset: TextSize,
        reason: MalformedKind,
    },

    /// A scope chain that does not end in a compilation-unit scope.
    #[error("Invalid scope composition: {0}")]
    InvalidScopeComposition(String),

    /// A forced import, reservation, static import or declaration line that
    /// cannot be recorded.
    #[error("Invalid import '{declaration}': {reason}")]
    InvalidImport {
        declaration: String,
        reason: &'static str,
    },
}

impl ImportError {
    /// Create a malformed reference error.
    pub fn malformed(reference: impl Into<String>, offset: TextSize, reason: MalformedKind) -> Self {
        Self::MalformedReference {
            reference: reference.into(),
            offset,
            reason,
        }
    }

    /// Create an invalid scope composition error.
    pub fn invalid_scope(message: impl Into<String>) -> Self {
        Self::InvalidScopeComposition(message.into())
    }

    /// Create an invalid import error.
    pub fn invalid_import(declaration: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidImport {
            declaration: declaration.into(),
            reason,
        }
    }

    /// The failure reason if this is a malformed reference.
    pub fn malformed_kind(&self) -> Option<MalformedKind> {
        match self {
            Self::MalformedReference { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type ImportResult<T> = Result<T, ImportError>;
