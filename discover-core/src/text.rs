//! Case folding helpers shared by name resolution and search.

/// Lower-case `text` for case-insensitive comparisons.
///
/// # Examples
/// ```
/// use discover_core::text::fold;
///
/// assert_eq!(fold("New DELHI"), "new delhi");
/// ```
#[must_use]
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Report whether `haystack` contains an already folded `needle`, ignoring
/// case.
///
/// An empty needle is contained in every haystack.
///
/// # Examples
/// ```
/// use discover_core::text::{contains_folded, fold};
///
/// assert!(contains_folded("Red Fort", &fold("FORT")));
/// assert!(!contains_folded("Red Fort", "palace"));
/// ```
#[must_use]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold(haystack).contains(folded_needle)
}

/// Report whether `text` equals an already folded `needle`, ignoring case.
#[must_use]
pub fn equals_folded(text: &str, folded_needle: &str) -> bool {
    fold(text) == folded_needle
}
