//! Breaking lyric text into lines and words.
//!
//! Ordering is preserved everywhere: the aligner zips these sequences against
//! audio timestamps, so top-to-bottom and left-to-right order is load-bearing.

use std::sync::LazyLock;

use regex::Regex;

/// Every line boundary recognised in raw lyric text (CRLF first so it counts once).
#[allow(clippy::expect_used)]
static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")
        .expect("valid regex: RE_LINE_BREAK")
});

/// Split raw lyric text into its non-empty lines.
///
/// Only zero-length lines are dropped; a line holding nothing but spaces is kept.
pub fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    RE_LINE_BREAK.split(raw).filter(|line| !line.is_empty())
}

/// Split normalized text into whitespace-delimited tokens.
pub fn split_words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
