//! Import declaration emitter.
//!
//! Turns the final [`ImportRegistry`](crate::semantic::ImportRegistry) state
//! into the import section of a compilation unit. Only bindings that need an
//! import produce lines: primitive types, implicitly visible types, reserved
//! names and fully qualified occurrences never do.

mod block;
mod layout;

pub use block::{ImportBlock, ImportLine, emit};
pub use layout::{GroupOrder, ImportLayout};
