//! Catalog construction from ordered sub-tables.

use indexmap::IndexMap;

use crate::tables::{ACCENTED_LETTERS, MATH_SYMBOLS};

/// A named, ordered sub-table of symbol definitions.
///
/// Tables are authored as static data; the name only shows up in trace
/// output.
#[derive(Debug, Clone, Copy)]
pub struct SymbolTable {
    /// Table name for diagnostics.
    pub name: &'static str,
    /// Key/value pairs in authored order.
    pub entries: &'static [(&'static str, &'static str)],
}

impl SymbolTable {
    /// Number of authored pairs, counting duplicate literals.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries. Empty tables are valid and merge
    /// to nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The merged mnemonic-to-glyph mapping for one session.
///
/// Built once, read-only afterwards. Iteration yields entries in first-seen
/// key order across the merge.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<String, String>,
}

impl Catalog {
    /// Merge `tables` in slice order into one catalog.
    ///
    /// When a key repeats, the later write wins; the key keeps the position
    /// of its first appearance. This applies across tables and to duplicate
    /// literals inside a single table, and is never an error.
    pub fn from_tables(tables: &[SymbolTable]) -> Self {
        let mut entries = IndexMap::new();
        for table in tables {
            for (key, value) in table.entries {
                entries.insert((*key).to_string(), (*value).to_string());
            }
            tracing::debug!(
                table = table.name,
                authored = table.len(),
                merged = entries.len(),
                "merged symbol table"
            );
        }
        Self { entries }
    }

    /// The catalog shipped with the tool: general math macros, then
    /// accented-letter macros.
    pub fn builtin() -> Self {
        Self::from_tables(&[MATH_SYMBOLS, ACCENTED_LETTERS])
    }

    /// Look up the glyph for `key`.
    ///
    /// `None` means the key is absent; a present key with an empty value
    /// would still return `Some("")`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
