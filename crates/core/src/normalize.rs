//! Case/diacritic-insensitive text folding for search.
//!
//! Search matches product names typed in any of the supported locales, so
//! folding has to erase case, combining accents, and the Turkish dotless-ı
//! (which generic decomposition does not cover).

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a string for substring comparison.
///
/// Lowercases, NFD-decomposes, strips combining marks, and maps 'ı' to 'i'.
/// Pure and total: any input produces a folded string, and folding an
/// already-folded string returns it unchanged.
///
/// ## Examples
///
/// ```
/// use dukkan_core::fold_for_search;
///
/// assert_eq!(fold_for_search("İstanbul"), "istanbul");
/// assert_eq!(fold_for_search("café"), "cafe");
/// assert_eq!(fold_for_search("Kalem"), "kalem");
/// ```
#[must_use]
pub fn fold_for_search(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == 'ı' { 'i' } else { c })
        .collect()
}
