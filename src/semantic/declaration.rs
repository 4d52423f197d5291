//! Single import declaration lines (`import a.B;`, `import static a.B.c;`).

use std::fmt;

use crate::base::constants::ON_DEMAND_SUFFIX;
use crate::base::{ImportError, ImportResult, Name};
use crate::parser::ReferenceDescriptor;

const IMPORT_KW: &str = "import";
const STATIC_KW: &str = "static";

/// One import declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportDeclaration {
    /// Imported type or member, without the `.*` of on-demand imports
    name: Name,
    is_static: bool,
    is_on_demand: bool,
}

impl ImportDeclaration {
    /// Single-type import.
    pub fn single(qualified_name: impl Into<Name>) -> Self {
        Self {
            name: qualified_name.into(),
            is_static: false,
            is_on_demand: false,
        }
    }

    /// Single static member import.
    pub fn member(member_reference: impl Into<Name>) -> Self {
        Self {
            name: member_reference.into(),
            is_static: true,
            is_on_demand: false,
        }
    }

    /// Parse a declaration line such as `import static java.util.Objects.equals;`.
    pub fn parse(line: &str) -> ImportResult<Self> {
        let text = line.trim();
        let invalid = |reason| ImportError::invalid_import(text, reason);

        let rest = text
            .strip_prefix(IMPORT_KW)
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .ok_or_else(|| invalid("expected 'import'"))?;
        let rest = rest
            .trim_start()
            .strip_suffix(';')
            .ok_or_else(|| invalid("missing ';'"))?
            .trim_end();

        let (is_static, rest) = match rest.strip_prefix(STATIC_KW) {
            Some(after) if after.starts_with(char::is_whitespace) => (true, after.trim_start()),
            _ => (false, rest),
        };
        let (is_on_demand, name) = match rest.strip_suffix(ON_DEMAND_SUFFIX) {
            Some(prefix) => (true, prefix),
            None => (false, rest),
        };

        let descriptor = ReferenceDescriptor::parse(name)
            .map_err(|_| invalid("imported name is not a qualified name"))?;
        if !is_on_demand && !descriptor.is_qualified() {
            return Err(invalid("imported name must be qualified"));
        }

        Ok(Self {
            name: Name::new(descriptor.qualified_name()),
            is_static,
            is_on_demand,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_on_demand(&self) -> bool {
        self.is_on_demand
    }
}

impl fmt::Display for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(IMPORT_KW)?;
        f.write_str(" ")?;
        if self.is_static {
            f.write_str(STATIC_KW)?;
            f.write_str(" ")?;
        }
        f.write_str(&self.name)?;
        if self.is_on_demand {
            f.write_str(ON_DEMAND_SUFFIX)?;
        }
        f.write_str(";")
    }
}
