//! Text normalization for matching
//!
//! Two variants, and the distinction matters: the per-agent scorer also
//! removes punctuation before comparing, while the global resolver only
//! folds diacritics because it matches exact normalized strings against
//! a literal table.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Full normalization for the knowledge-base scorer: NFD decompose, drop
/// combining marks, turn every other non-alphanumeric character into a
/// space, collapse whitespace, lowercase, trim.
pub fn normalize(value: &str) -> String {
    let cleaned: String = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(|c| {
            let mapped = if c.is_alphanumeric() { c } else { ' ' };
            mapped.to_lowercase()
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Diacritics-only fold for the quick-response table: NFD decompose,
/// drop combining marks, lowercase, trim. Punctuation survives.
pub fn fold_diacritics(value: &str) -> String {
    let folded: String = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    folded.trim().to_string()
}
