//! Configuration of the emitted import block.

use std::cmp::Ordering;

/// How import groups are ordered relative to each other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GroupOrder {
    /// Groups sorted by their key.
    Lexicographic,
    /// Groups in the order their first member was registered.
    FirstSeen,
    /// Groups under the listed prefixes first, in listed order; the rest
    /// sorted by key. A prefix pins its own key and every key below it.
    Pinned(Vec<String>),
}

impl GroupOrder {
    /// Compare two groups given their keys and first-seen positions.
    pub(crate) fn compare(&self, a: (&str, usize), b: (&str, usize)) -> Ordering {
        match self {
            Self::Lexicographic => a.0.cmp(b.0),
            Self::FirstSeen => a.1.cmp(&b.1),
            Self::Pinned(pinned) => {
                let rank = |key: &str| {
                    pinned
                        .iter()
                        .position(|p| pins(p, key))
                        .unwrap_or(pinned.len())
                };
                rank(a.0).cmp(&rank(b.0)).then_with(|| a.0.cmp(b.0))
            }
        }
    }
}

/// True if group `key` is the pinned prefix `pin` or lies beneath it.
fn pins(pin: &str, key: &str) -> bool {
    key.strip_prefix(pin)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

impl Default for GroupOrder {
    fn default() -> Self {
        Self::Pinned(vec!["java".to_string(), "javax".to_string()])
    }
}

/// Layout of the import block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImportLayout {
    /// Leading package segments that form a group key (at least 1).
    pub group_depth: usize,
    pub group_order: GroupOrder,
    /// Sort static imports by name instead of keeping registration order.
    pub sort_static_imports: bool,
}

impl ImportLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group_depth(mut self, depth: usize) -> Self {
        self.group_depth = depth.max(1);
        self
    }

    pub fn with_group_order(mut self, order: GroupOrder) -> Self {
        self.group_order = order;
        self
    }

    pub fn with_sorted_static_imports(mut self, sort: bool) -> Self {
        self.sort_static_imports = sort;
        self
    }

    /// Group key of `qualified_name`: its first `group_depth` package segments.
    pub fn group_key<'a>(&self, qualified_name: &'a str) -> &'a str {
        let package = qualified_name
            .rsplit_once('.')
            .map_or("", |(package, _)| package);
        match package.match_indices('.').nth(self.group_depth.max(1) - 1) {
            Some((idx, _)) => &package[..idx],
            None => package,
        }
    }
}

impl Default for ImportLayout {
    fn default() -> Self {
        Self {
            group_depth: 1,
            group_order: GroupOrder::default(),
            sort_static_imports: true,
        }
    }
}
