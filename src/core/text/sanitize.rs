//! Text sanitization applied once before segmentation.
//!
//! Collapses whitespace runs to single spaces and strips characters
//! outside word characters, whitespace, and basic sentence
//! punctuation. Idempotent by construction.

use once_cell::sync::Lazy;
use regex::Regex;

// Compiled once at startup. Keeps word chars, whitespace, and .,!?-
static STRIP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\s.,!?-]").unwrap_or_else(|e| panic!("invalid sanitize pattern: {e}"))
});

/// Clean extracted document text for chunking.
///
/// Anything outside `[\w \s . , ! ? -]` is removed, then whitespace
/// runs (including newlines from extraction) become single spaces.
/// Stripping happens first so the gap it leaves is collapsed too,
/// which is what makes the function idempotent.
pub fn sanitize(text: &str) -> String {
    let stripped = STRIP_PATTERN.replace_all(text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
