use rustc_hash::FxHashMap;

use super::ScopeNode;
use crate::base::{ImportError, ImportResult, Name};
use crate::parser::{ReferenceDescriptor, is_identifier};
use crate::semantic::{QualifiedName, SimpleName};

/// Scope contributed by a generated type that encloses the code being resolved.
///
/// Visible here without import:
/// - the type's own simple name
/// - its type parameters
/// - member types it declares
/// - nested types inherited from its supertypes (supplied by the caller)
///
/// Declarations take precedence over inherited names.
#[derive(Debug, Clone)]
pub struct EnclosingTypeScope {
    type_name: ReferenceDescriptor,
    declared: FxHashMap<SimpleName, QualifiedName>,
    /// Reached through the supertype chain
    inherited: FxHashMap<SimpleName, QualifiedName>,
}

impl EnclosingTypeScope {
    /// Scope for the type named `qualified_name` (dotted or binary form).
    pub fn new(qualified_name: &str) -> ImportResult<Self> {
        let type_name = ReferenceDescriptor::parse(qualified_name)?;
        if type_name.is_base_type() {
            return Err(ImportError::invalid_import(
                qualified_name,
                "primitive types cannot enclose other types",
            ));
        }
        let mut declared = FxHashMap::default();
        declared.insert(
            Name::new(type_name.simple_name()),
            Name::new(type_name.qualified_name()),
        );
        Ok(Self {
            type_name,
            declared,
            inherited: FxHashMap::default(),
        })
    }

    /// Record a member type declared inside this type.
    pub fn add_member_type(&mut self, simple_name: &str) -> ImportResult<()> {
        check_identifier(simple_name)?;
        let qualified = format!("{}.{simple_name}", self.type_name.qualified_name());
        self.declared
            .insert(Name::new(simple_name), Name::from(qualified));
        Ok(())
    }

    /// Record a type parameter; it binds to itself.
    pub fn add_type_parameter(&mut self, name: &str) -> ImportResult<()> {
        check_identifier(name)?;
        self.declared.insert(Name::new(name), Name::new(name));
        Ok(())
    }

    /// Record a nested type accessible through a supertype, e.g. `java.util.Map$Entry`.
    pub fn add_inherited_type(&mut self, qualified_name: &str) -> ImportResult<()> {
        let inherited = ReferenceDescriptor::parse(qualified_name)?;
        if !inherited.is_qualified() {
            return Err(ImportError::invalid_import(
                qualified_name,
                "inherited member types need their enclosing type",
            ));
        }
        self.inherited
            .entry(Name::new(inherited.simple_name()))
            .or_insert_with(|| Name::new(inherited.qualified_name()));
        Ok(())
    }

    /// Descriptor of the enclosing type itself.
    pub fn type_name(&self) -> &ReferenceDescriptor {
        &self.type_name
    }
}

impl ScopeNode for EnclosingTypeScope {
    fn lookup(&self, simple_name: &str) -> Option<&str> {
        self.declared
            .get(simple_name)
            .or_else(|| self.inherited.get(simple_name))
            .map(Name::as_str)
    }
}

fn check_identifier(name: &str) -> ImportResult<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(ImportError::invalid_import(name, "not an identifier"))
    }
}
