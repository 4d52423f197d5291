//! Foundation types for the import engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`ImportError`], [`ImportResult`] - Error taxonomy
//! - [`Name`] - Cheap-to-clone identifier and qualified-name strings
//! - [`TextSize`] - Byte offsets into raw reference strings
//! - Language constants (primitive keywords, implicit package, separators)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod error;

pub use error::{ImportError, ImportResult, MalformedKind};

/// Identifier or dotted name. Short names stay inline, so cloning is cheap.
pub type Name = smol_str::SmolStr;

// Re-export text-size types for convenience
pub use text_size::TextSize;
