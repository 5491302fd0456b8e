//! Utility functions for string processing.

use std::borrow::Cow;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Characters of description shown in a result row before it's cut.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Use cases shown in a result row before the rest collapse into `+N`.
pub const USE_CASE_PREVIEW_COUNT: usize = 3;

/// Normalize a string for matching: lowercase, strip diacritics, and collapse whitespace.
///
/// Queries and field values go through the same function, so matching is
/// case-insensitive and accent-insensitive:
/// - "Form W-2" → "form w-2"
/// - "  Self-Employment   Tax " → "self-employment tax"
/// - "café" → "cafe"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace (which also trims)
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks (Unicode category Mn) in the blocks catalog text actually uses.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Cut a description for a result row: at most `max_chars` characters, then `...`.
pub fn truncate_description(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// The use cases a row shows, and how many are hidden behind `+N`.
pub fn use_case_preview(use_cases: &[String], max_shown: usize) -> (&[String], usize) {
    let shown = use_cases.len().min(max_shown);
    (&use_cases[..shown], use_cases.len() - shown)
}
