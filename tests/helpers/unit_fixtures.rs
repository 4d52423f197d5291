//! A minimal stand-in for a source generator producing one compilation unit.

use jimports::{
    CompilationUnitScope, EnclosingTypeScope, ImportLayout, ImportRegistry, ScopeChain, emit,
    resolve,
};

/// One compilation unit being generated: its scope chain and import registry.
pub struct UnitFixture {
    pub chain: ScopeChain,
    pub registry: ImportRegistry,
}

impl UnitFixture {
    /// Unit in `package` declaring the top-level type `primary`.
    pub fn new(package: &str, primary: &str) -> Self {
        let mut unit = CompilationUnitScope::new(package);
        unit.declare_type(primary)
            .unwrap_or_else(|e| panic!("bad type name '{primary}': {e}"));
        let mut registry = ImportRegistry::new();
        registry
            .reserve(&format!("{package}.{primary}"))
            .unwrap_or_else(|e| panic!("cannot reserve '{primary}': {e}"));
        Self {
            chain: ScopeChain::new(unit),
            registry,
        }
    }

    /// Resolve at the compilation-unit level.
    pub fn resolve(&mut self, raw: &str) -> String {
        resolve(raw, &self.chain, &mut self.registry)
            .unwrap_or_else(|e| panic!("failed to resolve '{raw}': {e}"))
    }

    /// Resolve inside `scope`, layered on top of the unit chain.
    pub fn resolve_in(&mut self, scope: &EnclosingTypeScope, raw: &str) -> String {
        let chain = self.chain.enclose(scope.clone());
        resolve(raw, &chain, &mut self.registry)
            .unwrap_or_else(|e| panic!("failed to resolve '{raw}': {e}"))
    }

    pub fn imports(&self) -> Vec<String> {
        self.registry.imports().map(str::to_string).collect()
    }

    pub fn emit(&self) -> Vec<String> {
        emit(&self.registry, &ImportLayout::default())
    }
}

/// Enclosing scope for `qualified_name` with the given member types.
pub fn type_scope(qualified_name: &str, members: &[&str]) -> EnclosingTypeScope {
    let mut scope = EnclosingTypeScope::new(qualified_name)
        .unwrap_or_else(|e| panic!("bad enclosing type '{qualified_name}': {e}"));
    for member in members {
        scope
            .add_member_type(member)
            .unwrap_or_else(|e| panic!("bad member '{member}': {e}"));
    }
    scope
}
