//! Reference parser for type references appearing in generated code
//!
//! ## Architecture
//!
//! ```text
//! Raw reference ("java.util.Map<K,V[]>")
//!     ↓
//! Lexer (logos) → Tokens with TokenKind and offsets
//!     ↓
//! Parser → TypeRef tree (Wildcard / Array / Generic / Nested / Leaf)
//!     ↓
//! ReferenceDescriptor per leaf (package / qualifier / simple name)
//! ```
//!
//! Everything here is pure: no scope or registry state is consulted.

mod descriptor;
mod lexer;
mod type_ref;

pub use descriptor::{ReferenceDescriptor, is_identifier};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use type_ref::{BoundKind, TypeRef};

#[cfg(test)]
mod tests;
