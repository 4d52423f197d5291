//! # java-import-resolver
//!
//! Qualified-name resolution and import management for Java source generators.
//!
//! Callers feed type references (generic, array, wildcard or nested) through
//! [`resolve`] while generating a compilation unit. Each call returns the
//! shortest unambiguous spelling and records any import it relied on. Once
//! the unit is generated, [`emit`] turns the recorded imports into a grouped,
//! sorted import block.
//!
//! ```
//! use jimports::{CompilationUnitScope, ImportLayout, ImportRegistry, ScopeChain, emit, resolve};
//!
//! let chain = ScopeChain::new(CompilationUnitScope::new("com.example"));
//! let mut registry = ImportRegistry::new();
//!
//! let text = resolve("java.util.Map<java.lang.String, java.util.List<a.B>>", &chain, &mut registry)?;
//! assert_eq!(text, "Map<String,List<B>>");
//! assert_eq!(
//!     emit(&registry, &ImportLayout::default()),
//!     vec!["import java.util.List;", "import java.util.Map;", "", "import a.B;"],
//! );
//! # Ok::<(), jimports::ImportError>(())
//! ```
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! emit      → Import block layout and declaration lines
//!   ↓
//! semantic  → Scope chain, import registry, reference resolver
//!   ↓
//! parser    → Logos lexer, recursive-descent TypeRef parser, descriptors
//!   ↓
//! base      → Errors, Name, constants
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → semantic → emit)
// ============================================================================

/// Foundation types: errors, names, language constants
pub mod base;

/// Parser: Logos lexer, recursive-descent reference parser, descriptors
pub mod parser;

/// Semantic layer: scopes, registry, resolver
pub mod semantic;

/// Import block emission
pub mod emit;

// Re-export the working set
pub use base::{ImportError, ImportResult, MalformedKind, Name};
pub use emit::{GroupOrder, ImportBlock, ImportLayout, ImportLine, emit};
pub use parser::{ReferenceDescriptor, TypeRef};
pub use semantic::{
    ClaimOutcome, CompilationUnitScope, EnclosingTypeScope, ImportDeclaration, ImportRegistry,
    ReferenceResolver, Rendering, ScopeChain, ScopeNode, resolve,
};
