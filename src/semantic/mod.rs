//! # Semantic layer
//!
//! Scope chains, the import registry, and the resolver that shortens
//! references against them. State is confined to [`ImportRegistry`]; scopes
//! are read-only views built by the caller.

pub mod declaration;
pub mod registry;
pub mod resolver;
pub mod scope;

pub use declaration::ImportDeclaration;
pub use registry::{Binding, BindingKind, ClaimOutcome, ImportRegistry};
pub use resolver::{ReferenceResolver, Rendering, resolve};
pub use scope::{CompilationUnitScope, EnclosingTypeScope, ScopeChain, ScopeNode};

/// Dotted name of a type or static member, `$` already rewritten to `.`
pub type QualifiedName = crate::base::Name;
/// Last segment of a qualified name
pub type SimpleName = crate::base::Name;
