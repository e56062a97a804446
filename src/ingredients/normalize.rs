//! Ingredient text normalization

/// Normalize raw ingredient text.
///
/// Trims, lowercases, and collapses every run of internal whitespace to a
/// single space. A byte order mark counts as whitespace. Normalizing an
/// already-normalized string returns it unchanged.
pub fn normalize_ingredient(raw: &str) -> String {
    raw.split(is_separator)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Split a line of user input into candidate ingredients.
///
/// Commas separate ingredients; empty pieces are kept out.
pub fn split_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_ingredient)
        .filter(|s| !s.is_empty())
        .collect()
}
