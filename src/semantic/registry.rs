//! The import registry: root of every scope chain.
//!
//! Holds the simple-name bindings chosen during one generation pass plus the
//! static member imports. A simple name keeps the first qualified name it was
//! bound to for the rest of the pass; later claims for a different type are
//! reported as [`ClaimOutcome::Conflict`] and leave the binding untouched.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use super::declaration::ImportDeclaration;
use super::{QualifiedName, SimpleName};
use crate::base::{ImportError, ImportResult, Name};
use crate::parser::ReferenceDescriptor;

/// Why a simple name is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// Needs an import declaration.
    Import,
    /// Visible without import (own package, `java.lang`); recorded so that
    /// later references cannot take the name.
    Implicit,
    /// Held for a type the unit declares itself.
    Reserved,
}

/// A simple name's binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    qualified_name: QualifiedName,
    kind: BindingKind,
}

impl Binding {
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn kind(&self) -> BindingKind {
        self.kind
    }

    /// True if this binding produces an import line.
    pub fn is_import(&self) -> bool {
        self.kind == BindingKind::Import
    }
}

/// Result of claiming a simple name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The name was free and is now bound.
    Added,
    /// The name was already bound to the same qualified name.
    AlreadyPresent,
    /// The name is bound to a different qualified name.
    Conflict { existing: QualifiedName },
}

impl ClaimOutcome {
    /// True if the registry binds the name to the claimed type afterwards.
    pub fn is_bound(&self) -> bool {
        !matches!(self, Self::Conflict { .. })
    }
}

/// Simple-name bindings and static imports of one compilation unit.
#[derive(Debug, Default, Clone)]
pub struct ImportRegistry {
    bindings: IndexMap<SimpleName, Binding>,
    /// Static member references, in first-use order
    static_imports: IndexSet<QualifiedName>,
}

impl ImportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding of `simple_name`, if any.
    pub fn binding(&self, simple_name: &str) -> Option<&Binding> {
        self.bindings.get(simple_name)
    }

    /// Qualified name bound to `simple_name`, if any.
    pub fn lookup(&self, simple_name: &str) -> Option<&str> {
        self.binding(simple_name).map(Binding::qualified_name)
    }

    /// Claim `descriptor`'s simple name for it. First use wins.
    pub(crate) fn claim(
        &mut self,
        descriptor: &ReferenceDescriptor,
        kind: BindingKind,
    ) -> ClaimOutcome {
        let simple = descriptor.simple_name();
        let qualified = descriptor.qualified_name();
        if let Some(existing) = self.bindings.get_mut(simple) {
            if existing.qualified_name.as_str() != qualified {
                return ClaimOutcome::Conflict {
                    existing: existing.qualified_name.clone(),
                };
            }
            // A forced import turns an implicit claim into a declared one
            if kind == BindingKind::Import && existing.kind == BindingKind::Implicit {
                existing.kind = BindingKind::Import;
            }
            return ClaimOutcome::AlreadyPresent;
        }

        debug!("[REGISTRY] bind {} -> {} ({:?})", simple, qualified, kind);
        self.bindings.insert(
            Name::new(simple),
            Binding {
                qualified_name: Name::new(qualified),
                kind,
            },
        );
        ClaimOutcome::Added
    }

    /// Force an import of `qualified_name`, bypassing scope checks.
    pub fn add_import(&mut self, qualified_name: &str) -> ImportResult<ClaimOutcome> {
        let descriptor = ReferenceDescriptor::parse(qualified_name)?;
        if descriptor.is_base_type() {
            return Err(ImportError::invalid_import(
                qualified_name,
                "primitive types cannot be imported",
            ));
        }
        if !descriptor.is_qualified() {
            return Err(ImportError::invalid_import(
                qualified_name,
                "imported name must be qualified",
            ));
        }
        Ok(self.claim(&descriptor, BindingKind::Import))
    }

    /// Hold the simple name of `qualified_name` without importing it.
    ///
    /// Used for the types the unit declares, so no other type can take their name.
    pub fn reserve(&mut self, qualified_name: &str) -> ImportResult<ClaimOutcome> {
        let descriptor = ReferenceDescriptor::parse(qualified_name)?;
        if descriptor.is_base_type() {
            return Err(ImportError::invalid_import(
                qualified_name,
                "primitive types cannot be reserved",
            ));
        }
        Ok(self.claim(&descriptor, BindingKind::Reserved))
    }

    /// Add a static member import such as `org.junit.Assert.assertEquals`.
    ///
    /// Returns `true` if the member was not registered before.
    pub fn add_static_import(&mut self, member_reference: &str) -> ImportResult<bool> {
        let descriptor = ReferenceDescriptor::parse(member_reference)?;
        if !descriptor.is_qualified() {
            return Err(ImportError::invalid_import(
                member_reference,
                "static imports need the declaring type",
            ));
        }
        let added = self
            .static_imports
            .insert(Name::new(descriptor.qualified_name()));
        if added {
            debug!("[REGISTRY] static import {}", descriptor.qualified_name());
        }
        Ok(added)
    }

    /// Pre-populate from existing declaration lines.
    ///
    /// On-demand imports and names already taken by another type are skipped
    /// with a warning. Returns the number of declarations recorded. If any
    /// line is invalid the registry is left unchanged.
    pub fn seed_from_declarations<'a>(
        &mut self,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> ImportResult<usize> {
        let declarations = lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .map(ImportDeclaration::parse)
            .collect::<ImportResult<Vec<_>>>()?;

        let mut staged = self.clone();
        let mut seeded = 0;
        for declaration in &declarations {
            if staged.seed_declaration(declaration)? {
                seeded += 1;
            }
        }
        *self = staged;
        Ok(seeded)
    }

    /// Record one parsed declaration; `false` if it was skipped or already present.
    fn seed_declaration(&mut self, declaration: &ImportDeclaration) -> ImportResult<bool> {
        if declaration.is_on_demand() {
            warn!("[REGISTRY] skipping on-demand import '{}'", declaration);
            return Ok(false);
        }
        if declaration.is_static() {
            return self.add_static_import(declaration.name());
        }
        match self.add_import(declaration.name())? {
            ClaimOutcome::Added => Ok(true),
            ClaimOutcome::AlreadyPresent => Ok(false),
            ClaimOutcome::Conflict { existing } => {
                warn!(
                    "[REGISTRY] skipping '{}': simple name already bound to {}",
                    declaration, existing
                );
                Ok(false)
            }
        }
    }

    /// Qualified names needing an import declaration, in first-use order.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.bindings
            .values()
            .filter(|binding| binding.is_import())
            .map(Binding::qualified_name)
    }

    /// Static member imports, in first-use order.
    pub fn static_imports(&self) -> impl Iterator<Item = &str> {
        self.static_imports.iter().map(Name::as_str)
    }

    /// All bindings as (simple name, binding), in first-use order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings
            .iter()
            .map(|(simple, binding)| (simple.as_str(), binding))
    }

    /// Number of regular imports.
    pub fn import_count(&self) -> usize {
        self.imports().count()
    }

    /// True if nothing would be emitted.
    pub fn is_empty(&self) -> bool {
        self.static_imports.is_empty() && self.imports().next().is_none()
    }
}
