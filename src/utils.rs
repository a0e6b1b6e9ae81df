//! Text normalization and tokenization.
//!
//! Both the query and the field values go through `normalize` before any
//! comparison, so the scorer only ever compares lower-cased (and, with the
//! `unicode-normalization` feature, accent-free) text.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: strip diacritics, then lowercase.
///
/// - "Aplicación" → "aplicacion"
/// - "Pérez" → "perez"
///
/// Whitespace and punctuation are preserved; `tokenize` is what strips them.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only. Accented and unaccented spellings stay distinct.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Word characters: letters, digits and underscore (Unicode-aware).
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into search tokens.
///
/// Normalizes, drops every character that is neither a word character nor
/// whitespace, then splits on whitespace runs. Empty tokens never appear.
///
/// ```
/// use unerg_search::tokenize;
/// assert_eq!(tokenize("  Redes, neuronales!  "), vec!["redes", "neuronales"]);
/// assert!(tokenize("¿?").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = normalize(text)
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Does `needle` occur in `haystack` with no word character on either side?
///
/// Both arguments are expected to be normalized already. An empty needle
/// never matches.
pub fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}
