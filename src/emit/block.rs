//! Materializing the registry as ordered, grouped import declarations.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use super::layout::ImportLayout;
use crate::semantic::{ImportDeclaration, ImportRegistry};

/// One line of an import block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportLine {
    Declaration(ImportDeclaration),
    /// Separator between the static block and groups, or between groups
    Blank,
}

impl fmt::Display for ImportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration(declaration) => write!(f, "{declaration}"),
            Self::Blank => Ok(()),
        }
    }
}

/// The import section of a compilation unit.
///
/// Static imports come first, then a blank line, then regular imports
/// partitioned into groups. Each group is sorted by qualified name; groups are
/// ordered by [`ImportLayout::group_order`] and separated by one blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBlock {
    lines: Vec<ImportLine>,
}

impl ImportBlock {
    /// Build the block for the current state of `registry`.
    pub fn build(registry: &ImportRegistry, layout: &ImportLayout) -> Self {
        let mut statics: Vec<&str> = registry.static_imports().collect();
        if layout.sort_static_imports {
            statics.sort_unstable();
        }

        // Group keys in first-seen order, so the map index is the first-seen rank
        let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for name in registry.imports() {
            groups.entry(layout.group_key(name)).or_default().push(name);
        }
        let mut ordered: Vec<(usize, &str, Vec<&str>)> = groups
            .into_iter()
            .enumerate()
            .map(|(rank, (key, members))| (rank, key, members))
            .collect();
        ordered.sort_by(|a, b| layout.group_order.compare((a.1, a.0), (b.1, b.0)));

        debug!(
            "[EMIT] {} static imports, {} groups",
            statics.len(),
            ordered.len()
        );

        let mut lines = Vec::new();
        for member in &statics {
            lines.push(ImportLine::Declaration(ImportDeclaration::member(*member)));
        }
        if !statics.is_empty() && !ordered.is_empty() {
            lines.push(ImportLine::Blank);
        }
        for (idx, (_, _, mut members)) in ordered.into_iter().enumerate() {
            if idx > 0 {
                lines.push(ImportLine::Blank);
            }
            members.sort_unstable();
            lines.extend(
                members
                    .into_iter()
                    .map(|name| ImportLine::Declaration(ImportDeclaration::single(name))),
            );
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[ImportLine] {
        &self.lines
    }

    /// Declarations only, skipping separators.
    pub fn declarations(&self) -> impl Iterator<Item = &ImportDeclaration> {
        self.lines.iter().filter_map(|line| match line {
            ImportLine::Declaration(declaration) => Some(declaration),
            ImportLine::Blank => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines as strings; separators are empty strings.
    pub fn to_lines(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}

/// Lines joined by `\n`, without a trailing newline.
impl fmt::Display for ImportBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Emit the import declaration lines for `registry`.
pub fn emit(registry: &ImportRegistry, layout: &ImportLayout) -> Vec<String> {
    ImportBlock::build(registry, layout).to_lines()
}
