//! Accent- and case-insensitive matching and ordering of display names.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// What: Fold text for comparison: strip diacritics, then lowercase.
///
/// Inputs:
/// - `s`: Text to fold
///
/// Output:
/// - Folded string, e.g. `"Åland Islands"` becomes `"aland islands"`.
///
/// Details:
/// - Decomposes to NFD and drops combining marks, so precomposed and
///   decomposed inputs fold to the same value.
#[must_use]
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// What: Substring test that ignores case and diacritics on both sides.
///
/// Inputs:
/// - `haystack`: Text searched
/// - `needle`: Text searched for; empty matches everything
///
/// Output:
/// - `true` when the folded haystack contains the folded needle.
#[must_use]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    fold(haystack).contains(&fold(needle))
}

/// What: Order two display names the way a reader expects.
///
/// Inputs:
/// - `a`, `b`: Names to compare
///
/// Output:
/// - Ordering by folded form, then by the raw strings so the order is total.
///
/// Details:
/// - Puts "Åland Islands" next to "Albania" rather than after "Zimbabwe".
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}
