//! Language constants shared by the parser and the resolver.

/// Keywords denoting primitive types and `void`.
///
/// These never participate in import resolution.
pub const BASE_TYPES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// Package whose top-level types are visible everywhere without an import.
pub const IMPLICIT_PACKAGE: &str = "java.lang";

/// Separator between package and type segments in source-style names.
pub const DOT: char = '.';

/// Separator between an enclosing type and a nested type in binary-style names.
pub const NESTED_TYPE_SEPARATOR: char = '$';

/// The unbounded wildcard.
pub const WILDCARD: &str = "?";

/// Upper bound keyword for wildcards.
pub const EXTENDS: &str = "extends";

/// Lower bound keyword for wildcards.
pub const SUPER: &str = "super";

/// Deepest nesting of type arguments, wildcard bounds and inner-type levels
/// a reference may have.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Suffix of an on-demand import (`import java.util.*;`).
pub const ON_DEMAND_SUFFIX: &str = ".*";

/// Check if `token` is a primitive type keyword or `void`.
pub fn is_base_type(token: &str) -> bool {
    BASE_TYPES.contains(&token)
}
