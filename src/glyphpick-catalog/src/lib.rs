//! Glyphpick Catalog - mnemonic-to-glyph symbol tables and their merge.
//!
//! This crate owns the static symbol data and the rules for combining it
//! into one catalog:
//!
//! - Sub-tables merge in a caller-given order with last-write-wins semantics
//!   per key, including duplicate literals inside a single table.
//! - Distinct keys mapping to the same glyph all survive the merge; nothing
//!   is deduplicated by value.
//! - Iteration order is first-seen-key order across the merge, so rendered
//!   listings are reproducible.
//!
//! The catalog is built once at startup and read-only afterwards. It is
//! passed explicitly into the selection pipeline rather than held as global
//! state, so tests can substitute their own tables.
//!
//! # Example
//!
//! ```
//! use glyphpick_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.get(r"\alpha"), Some("α"));
//! assert_eq!(catalog.get(r"\nope"), None);
//! ```

mod catalog;
mod tables;

pub use catalog::{Catalog, SymbolTable};
pub use tables::{ACCENTED_LETTERS, MATH_SYMBOLS};
