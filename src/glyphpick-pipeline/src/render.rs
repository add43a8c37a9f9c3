//! Display-line rendering and selection parsing.
//!
//! The wire format between the catalog and the picker is one line per
//! entry, `"{key} → {value}"`, in catalog iteration order. Parsing splits
//! on the first separator glyph and keeps only the key; the value portion
//! is cosmetic.

use glyphpick_catalog::Catalog;

/// Separator glyph between key and value in a display line.
pub const SEPARATOR: char = '→';

/// Render every catalog entry as a display line, joined with newlines.
pub fn render_lines(catalog: &Catalog) -> String {
    let lines: Vec<String> = catalog
        .iter()
        .map(|(key, value)| format!("{key} {SEPARATOR} {value}"))
        .collect();
    lines.join("\n")
}

/// Extract the mnemonic key from a selector-returned line.
///
/// Returns `None` when the separator glyph is absent, which covers both
/// free-typed picker input and garbage lines. Surrounding whitespace on the
/// line and on the key is trimmed.
pub fn parse_selection(line: &str) -> Option<&str> {
    let (key, _value) = line.trim().split_once(SEPARATOR)?;
    Some(key.trim())
}
