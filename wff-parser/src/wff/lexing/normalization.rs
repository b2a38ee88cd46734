//! Escape normalization

use std::borrow::Cow;

const MARKER: &str = "\\";
const DOUBLED_MARKER: &str = "\\\\";

/// Collapses every doubled escape marker to a single one.
///
/// Matching is left to right and non-overlapping, so three markers become two.
/// Returns the input untouched when there is nothing to collapse.
pub fn normalize_escapes(input: &str) -> Cow<'_, str> {
    if input.contains(DOUBLED_MARKER) {
        Cow::Owned(input.replace(DOUBLED_MARKER, MARKER))
    } else {
        Cow::Borrowed(input)
    }
}
