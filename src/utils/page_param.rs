//! Parsing of the `{page}` path segment of sub-sitemap URLs.

use std::num::NonZeroUsize;

/// Parses a sub-sitemap page identifier such as `3` or `3.xml`.
///
/// A single trailing `.xml` is stripped, then the remainder must be a
/// positive decimal integer made only of ASCII digits. Anything else
/// (zero, signs, whitespace, other suffixes) yields `None`.
pub fn parse_page_number(segment: &str) -> Option<NonZeroUsize> {
    let digits = segment.strip_suffix(".xml").unwrap_or(segment);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<NonZeroUsize>().ok()
}
