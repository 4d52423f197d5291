//! Parsed form of a single, non-compound type reference.
//!
//! A descriptor never contains type arguments, array dimensions or wildcards;
//! those are peeled off by [`TypeRef`](super::TypeRef) before a leaf name
//! reaches [`ReferenceDescriptor::parse`].
//!
//! # Package vs. qualifier
//!
//! Binary-style names (`a.b.C$Inner`) tell us exactly where the package ends:
//! everything before the outermost type. Source-style names (`a.b.C.Inner`)
//! do not, so every segment but the last is reported as both package and
//! qualifier. That conflation is inherited behavior; callers that know a type
//! is nested should pass the binary form.

use std::fmt;

use text_size::TextSize;

use crate::base::constants::{DOT, NESTED_TYPE_SEPARATOR, is_base_type};
use crate::base::{ImportError, ImportResult, MalformedKind, Name};

/// Structured form of one type name.
///
/// Equality is textual: two descriptors built from different spellings of the
/// same type are different descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceDescriptor {
    qualified_name: Name,
    package_name: Option<Name>,
    qualifier: Option<Name>,
    simple_name: Name,
    is_base_type: bool,
}

impl ReferenceDescriptor {
    /// Parse a single type token such as `java.util.Map$Entry` or `int`.
    pub fn parse(token: &str) -> ImportResult<Self> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(ImportError::malformed(
                token,
                TextSize::new(0),
                MalformedKind::Empty,
            ));
        }
        if is_base_type(trimmed) {
            return Ok(Self::base_type(trimmed));
        }

        let lead = token.len() - token.trim_start().len();
        let mut segments = Vec::new();
        let mut nested = Vec::new();
        let mut start = 0;
        for (idx, ch) in trimmed.char_indices() {
            if ch == DOT || ch == NESTED_TYPE_SEPARATOR {
                segments.push(check_segment(token, &trimmed[start..idx], lead + start)?);
                nested.push(ch == NESTED_TYPE_SEPARATOR);
                start = idx + ch.len_utf8();
            }
        }
        let simple = check_segment(token, &trimmed[start..], lead + start)?;

        Ok(Self::from_segments(&segments, simple, &nested))
    }

    /// Descriptor for a primitive type keyword or `void`.
    pub fn base_type(keyword: &str) -> Self {
        Self {
            qualified_name: Name::new(keyword),
            package_name: None,
            qualifier: None,
            simple_name: Name::new(keyword),
            is_base_type: true,
        }
    }

    /// Build a descriptor from already validated segments.
    ///
    /// `enclosing` holds every segment before `simple`; `nested[i]` is true
    /// when the separator following `enclosing[i]` was the nested-type one.
    pub(crate) fn from_segments(enclosing: &[&str], simple: &str, nested: &[bool]) -> Self {
        debug_assert_eq!(enclosing.len(), nested.len());

        if enclosing.is_empty() {
            if is_base_type(simple) {
                return Self::base_type(simple);
            }
            return Self {
                qualified_name: Name::new(simple),
                package_name: None,
                qualifier: None,
                simple_name: Name::new(simple),
                is_base_type: false,
            };
        }

        let qualifier = Name::from(enclosing.join("."));
        let package_name = match nested.iter().position(|is_nested| *is_nested) {
            // The outermost type sits just before the first `$`.
            Some(0) => None,
            Some(first) => Some(Name::from(enclosing[..first].join("."))),
            None => Some(qualifier.clone()),
        };

        Self {
            qualified_name: Name::from(format!("{qualifier}.{simple}")),
            package_name,
            qualifier: Some(qualifier),
            simple_name: Name::new(simple),
            is_base_type: false,
        }
    }

    /// Canonical dotted name (`$` separators are rewritten to `.`).
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Package, when it can be derived.
    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    /// Everything before the simple name: a package or an enclosing type chain.
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// The last segment.
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn is_base_type(&self) -> bool {
        self.is_base_type
    }

    /// True if the name carries a package or enclosing type.
    pub fn is_qualified(&self) -> bool {
        self.qualifier.is_some()
    }

    /// Check if this type is declared directly in `package` (not nested in a type there).
    pub fn is_top_level_in(&self, package: &str) -> bool {
        self.qualifier.as_deref() == Some(package)
    }
}

impl fmt::Display for ReferenceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

/// Check that `segment` is a legal identifier, reporting errors against `token`.
fn check_segment<'a>(token: &str, segment: &'a str, offset: usize) -> ImportResult<&'a str> {
    let at = TextSize::new(offset as u32);
    if segment.is_empty() {
        return Err(ImportError::malformed(token, at, MalformedKind::MissingIdentifier));
    }
    if !is_identifier(segment) {
        return Err(ImportError::malformed(token, at, MalformedKind::InvalidCharacter));
    }
    Ok(segment)
}

/// Check if `text` is a single identifier (`$` excluded, it is a separator here).
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || unicode_ident::is_xid_start(first)) && chars.all(unicode_ident::is_xid_continue)
}
