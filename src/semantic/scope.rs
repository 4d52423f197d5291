//! Visibility scopes consulted while shortening references.
//!
//! A [`ScopeChain`] is an ordered list of read-only [`ScopeNode`] layers,
//! innermost first, that always ends in a [`CompilationUnitScope`]. Layers
//! never mutate each other; nesting a generated type adds one
//! [`EnclosingTypeScope`] in front of the existing layers via
//! [`ScopeChain::enclose`]. The chain bottoms out at the
//! [`ImportRegistry`](super::ImportRegistry), which the resolver consults
//! after every layer has been asked.

mod compilation_unit;
mod enclosing_type;

use std::fmt;
use std::sync::Arc;

use crate::base::{ImportError, ImportResult};
use crate::parser::ReferenceDescriptor;

pub use compilation_unit::CompilationUnitScope;
pub use enclosing_type::EnclosingTypeScope;

/// One layer of visibility.
pub trait ScopeNode: fmt::Debug + Send + Sync {
    /// Qualified name that `simple_name` denotes in this layer without an import.
    fn lookup(&self, simple_name: &str) -> Option<&str>;

    /// Whether `reference` is reachable by its simple name because of where it
    /// is declared (same package, implicitly imported package).
    fn is_implicitly_visible(&self, _reference: &ReferenceDescriptor) -> bool {
        false
    }

    /// Package of the compilation unit. Only the terminal layer has one.
    fn target_package(&self) -> Option<&str> {
        None
    }
}

/// Ordered visibility layers, innermost first.
#[derive(Clone, Debug)]
pub struct ScopeChain {
    layers: Vec<Arc<dyn ScopeNode>>,
}

impl ScopeChain {
    /// Chain consisting of the compilation-unit scope only.
    pub fn new(unit: CompilationUnitScope) -> Self {
        Self {
            layers: vec![Arc::new(unit)],
        }
    }

    /// Build a chain from arbitrary layers (innermost first).
    ///
    /// The last layer must be the only one that reports a target package.
    pub fn from_layers(layers: Vec<Arc<dyn ScopeNode>>) -> ImportResult<Self> {
        let Some((terminal, inner)) = layers.split_last() else {
            return Err(ImportError::invalid_scope("scope chain has no layers"));
        };
        if terminal.target_package().is_none() {
            return Err(ImportError::invalid_scope(format!(
                "scope chain must end in a compilation-unit scope, found {terminal:?}"
            )));
        }
        if let Some(extra) = inner.iter().find(|layer| layer.target_package().is_some()) {
            return Err(ImportError::invalid_scope(format!(
                "compilation-unit scope {extra:?} is not the outermost layer"
            )));
        }
        Ok(Self { layers })
    }

    /// New chain with `scope` as the innermost layer. `self` is left untouched.
    pub fn enclose(&self, scope: impl ScopeNode + 'static) -> Self {
        self.enclose_arc(Arc::new(scope))
    }

    /// Like [`enclose`](Self::enclose) for an already shared layer.
    pub fn enclose_arc(&self, scope: Arc<dyn ScopeNode>) -> Self {
        let mut layers = Vec::with_capacity(self.layers.len() + 1);
        layers.push(scope);
        layers.extend(self.layers.iter().cloned());
        Self { layers }
    }

    /// Package of the compilation unit being generated.
    pub fn target_package(&self) -> &str {
        self.layers
            .last()
            .and_then(|layer| layer.target_package())
            .unwrap_or_default()
    }

    /// First binding of `simple_name`, asking the innermost layer first.
    pub fn lookup(&self, simple_name: &str) -> Option<&str> {
        self.layers.iter().find_map(|layer| layer.lookup(simple_name))
    }

    /// Whether any layer makes `reference` visible without an import.
    pub fn is_implicitly_visible(&self, reference: &ReferenceDescriptor) -> bool {
        self.layers
            .iter()
            .any(|layer| layer.is_implicitly_visible(reference))
    }

    /// Layers, innermost first.
    pub fn layers(&self) -> &[Arc<dyn ScopeNode>] {
        &self.layers
    }

    /// Number of layers (1 for a bare compilation unit).
    pub fn depth(&self) -> usize {
        self.layers.len()
    }
}
