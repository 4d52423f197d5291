//! Reference resolution tests
//!
//! Full generation passes against the public API:
//! - Shortening of generic, array, wildcard and nested references
//! - First-use-wins conflict handling across call sites
//! - Enclosing-type scopes stacked per nesting level

pub mod tests_generation_pass;
pub mod tests_properties;
