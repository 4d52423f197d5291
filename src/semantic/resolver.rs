//! Reference resolution: choosing the shortest unambiguous spelling.
//!
//! The resolver walks a parsed [`TypeRef`] structurally. Wildcards, arrays,
//! type-argument lists and inner-type levels are rebuilt around their
//! resolved parts; only leaf names consult the scope chain and may write to
//! the [`ImportRegistry`].
//!
//! # Leaf resolution order
//!
//! 1. Primitive types and unqualified names (type variables) render as given.
//! 2. Scope layers, innermost first: a binding for the simple name decides.
//!    Same type → simple name; different type → fully qualified (shadowed).
//! 3. Registry: same type → simple name; different type → fully qualified.
//! 4. Implicitly visible (own package, `java.lang`) → simple name, recorded as
//!    an implicit claim.
//! 5. Otherwise the simple name is free → import it.
//!
//! Leaves are visited in source order, so the outer type of `Map<a.Map, b.X>`
//! claims `Map` before its arguments do.

use tracing::trace;

use super::registry::{BindingKind, ClaimOutcome, ImportRegistry};
use super::scope::ScopeChain;
use crate::base::ImportResult;
use crate::parser::{ReferenceDescriptor, TypeRef};

/// How a single leaf name was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rendering {
    /// Primitive type or `void`
    BaseType,
    /// No qualifier to drop (e.g. a type variable)
    Unqualified,
    /// Bound to the same type by a scope layer
    VisibleInScope,
    /// Already bound to the same type in the registry
    AlreadyImported,
    /// Own package or implicitly imported package
    Implicit,
    /// The simple name was free and is now imported
    NewImport,
    /// The simple name means something else here
    FullyQualified,
}

impl Rendering {
    /// True if the leaf renders as its simple name.
    pub fn is_short(self) -> bool {
        self != Self::FullyQualified
    }
}

/// Resolves references against one scope chain, writing into one registry.
pub struct ReferenceResolver<'a> {
    chain: &'a ScopeChain,
    registry: &'a mut ImportRegistry,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(chain: &'a ScopeChain, registry: &'a mut ImportRegistry) -> Self {
        Self { chain, registry }
    }

    pub fn chain(&self) -> &ScopeChain {
        self.chain
    }

    pub fn registry(&self) -> &ImportRegistry {
        self.registry
    }

    /// Parse and resolve a raw reference, returning its rendered text.
    pub fn resolve(&mut self, raw: &str) -> ImportResult<String> {
        let reference = TypeRef::parse(raw)?;
        let rendered = self.resolve_type(&reference);
        trace!("[RESOLVE] '{}' -> '{}'", raw, rendered);
        Ok(rendered)
    }

    /// Resolve an already parsed reference.
    pub fn resolve_type(&mut self, reference: &TypeRef) -> String {
        let mut out = String::new();
        self.render(reference, &mut out);
        out
    }

    fn render(&mut self, reference: &TypeRef, out: &mut String) {
        match reference {
            TypeRef::Wildcard(None) => out.push('?'),
            TypeRef::Wildcard(Some((kind, bound))) => {
                out.push_str("? ");
                out.push_str(kind.as_str());
                out.push(' ');
                self.render(bound, out);
            }
            TypeRef::Array { element, dims } => {
                self.render(element, out);
                for _ in 0..*dims {
                    out.push_str("[]");
                }
            }
            TypeRef::Generic { head, args } => {
                self.render(head, out);
                out.push('<');
                for (idx, arg) in args.iter().enumerate() {
                    if idx > 0 {
                        out.push(',');
                    }
                    self.render(arg, out);
                }
                out.push('>');
            }
            // Inner levels hang off whatever their enclosing level rendered as
            TypeRef::Nested { outer, name } => {
                self.render(outer, out);
                out.push('.');
                out.push_str(name);
            }
            TypeRef::Leaf(descriptor) => {
                let rendering = self.resolve_descriptor(descriptor);
                if rendering.is_short() {
                    out.push_str(descriptor.simple_name());
                } else {
                    out.push_str(descriptor.qualified_name());
                }
            }
        }
    }

    /// Decide how one leaf renders, registering an import when needed.
    pub fn resolve_descriptor(&mut self, descriptor: &ReferenceDescriptor) -> Rendering {
        let rendering = self.decide(descriptor);
        trace!(
            "[RESOLVE] leaf {} -> {:?}",
            descriptor.qualified_name(),
            rendering
        );
        rendering
    }

    fn decide(&mut self, descriptor: &ReferenceDescriptor) -> Rendering {
        if descriptor.is_base_type() {
            return Rendering::BaseType;
        }
        if !descriptor.is_qualified() {
            return Rendering::Unqualified;
        }

        let simple = descriptor.simple_name();
        let qualified = descriptor.qualified_name();

        if let Some(bound) = self.chain.lookup(simple) {
            return if bound == qualified {
                Rendering::VisibleInScope
            } else {
                Rendering::FullyQualified
            };
        }

        if let Some(bound) = self.registry.lookup(simple) {
            return if bound == qualified {
                Rendering::AlreadyImported
            } else {
                Rendering::FullyQualified
            };
        }

        let (kind, rendering) = if self.chain.is_implicitly_visible(descriptor) {
            (BindingKind::Implicit, Rendering::Implicit)
        } else {
            (BindingKind::Import, Rendering::NewImport)
        };
        match self.registry.claim(descriptor, kind) {
            ClaimOutcome::Conflict { .. } => Rendering::FullyQualified,
            ClaimOutcome::Added | ClaimOutcome::AlreadyPresent => rendering,
        }
    }
}

/// Resolve `raw` against `chain`, recording new imports in `registry`.
pub fn resolve(raw: &str, chain: &ScopeChain, registry: &mut ImportRegistry) -> ImportResult<String> {
    ReferenceResolver::new(chain, registry).resolve(raw)
}
