use rustc_hash::FxHashMap;

use super::ScopeNode;
use crate::base::constants::IMPLICIT_PACKAGE;
use crate::base::{ImportError, ImportResult, Name};
use crate::parser::{ReferenceDescriptor, is_identifier};
use crate::semantic::{QualifiedName, SimpleName};

/// Terminal scope: the package being generated into, its implicitly imported
/// packages, and the top-level types the unit itself declares.
#[derive(Debug, Clone)]
pub struct CompilationUnitScope {
    package: Name,
    implicit_packages: Vec<Name>,
    /// Types declared by this unit
    declared_types: FxHashMap<SimpleName, QualifiedName>,
}

impl CompilationUnitScope {
    /// Scope for a unit in `package` (empty for the default package).
    pub fn new(package: impl Into<Name>) -> Self {
        Self {
            package: package.into(),
            implicit_packages: vec![Name::new_static(IMPLICIT_PACKAGE)],
            declared_types: FxHashMap::default(),
        }
    }

    /// Record a top-level type declared by the unit.
    pub fn declare_type(&mut self, simple_name: &str) -> ImportResult<()> {
        if !is_identifier(simple_name) {
            return Err(ImportError::invalid_import(
                simple_name,
                "declared type name is not an identifier",
            ));
        }
        let qualified = if self.package.is_empty() {
            Name::new(simple_name)
        } else {
            Name::from(format!("{}.{simple_name}", self.package))
        };
        self.declared_types.insert(Name::new(simple_name), qualified);
        Ok(())
    }

    /// Treat every top-level type of `package` as visible without import.
    pub fn add_implicit_package(&mut self, package: impl Into<Name>) {
        let package = package.into();
        if !self.implicit_packages.contains(&package) {
            self.implicit_packages.push(package);
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn implicit_packages(&self) -> &[Name] {
        &self.implicit_packages
    }

    /// Iterate the declared types as (simple name, qualified name).
    pub fn declared_types(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declared_types
            .iter()
            .map(|(simple, qualified)| (simple.as_str(), qualified.as_str()))
    }
}

impl ScopeNode for CompilationUnitScope {
    fn lookup(&self, simple_name: &str) -> Option<&str> {
        self.declared_types.get(simple_name).map(Name::as_str)
    }

    fn is_implicitly_visible(&self, reference: &ReferenceDescriptor) -> bool {
        if reference.is_top_level_in(&self.package) {
            return true;
        }
        self.implicit_packages
            .iter()
            .any(|package| reference.is_top_level_in(package))
    }

    fn target_package(&self) -> Option<&str> {
        Some(&self.package)
    }
}
