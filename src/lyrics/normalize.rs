//! Lyric text normalization.
//!
//! Folds raw lyrics into the alignment character set: lowercase ASCII letters,
//! apostrophe, space, newline and the parenthesis backing-vocal markers.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::normalize::{APOSTROPHE, APOSTROPHE_VARIANTS, CLOSE_PAREN, OPEN_PAREN};

/// Any character outside the alignment character set.
#[allow(clippy::expect_used)]
static RE_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z'\n ()]").expect("valid regex: RE_DISALLOWED")
});

/// A newline followed by further newlines and/or spaces.
#[allow(clippy::expect_used)]
static RE_NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[\n ]+").expect("valid regex: RE_NEWLINE_RUN")
});

/// Two or more spaces.
#[allow(clippy::expect_used)]
static RE_SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" {2,}").expect("valid regex: RE_SPACE_RUN")
});

/// Normalize raw lyric text for alignment.
///
/// Total over all inputs: empty or fully-punctuated text yields an empty string.
/// Running it on its own output is a no-op.
pub fn normalize(raw: &str) -> String {
    let text = raw.to_lowercase().replace(APOSTROPHE_VARIANTS, &APOSTROPHE.to_string());
    let text = RE_DISALLOWED.replace_all(&text, " ");
    let text = RE_NEWLINE_RUN.replace_all(&text, "\n");
    let text = RE_SPACE_RUN.replace_all(&text, " ");
    text.trim_matches(|c| c == ' ' || c == '\n').to_string()
}

/// Remove backing-vocal parentheses, keeping the text they enclose.
pub fn strip_parens(text: &str) -> String {
    text.replace([OPEN_PAREN, CLOSE_PAREN], "")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    /// Inputs that stress every normalization step.
    const AWKWARD: &[&str] = &[
        "",
        "   ",
        "\n\n\n",
        "Hello,  World!\n\n(oohh)",
        "Don’t stop ‘til you get enough",
        "  leading and trailing  \n",
        "a \n b\n \n c",
        "tab\tseparated\r\nwindows line",
        "ÉCOLE naïve café",
        "İstanbul",
        "君の名は kimi no na wa",
        "(backing (nested) vocals)",
        "123 456 -- !!! ???",
        "line one\n   \n\n   line two   \n",
        "ß STRASSE",
        "mixed\u{2028}separators\u{85}here",
    ];

    #[test]
    fn normalizes_reference_scenario() {
        assert_eq!(normalize("Hello,  World!\n\n(oohh)"), "hello world\n(oohh)");
    }

    #[test]
    fn folds_typographic_apostrophes() {
        assert_eq!(normalize("Don’t ‘cause"), "don't 'cause");
    }

    #[test]
    fn keeps_parentheses() {
        assert_eq!(normalize("(Ooh, Baby!)"), "(ooh baby)");
    }

    #[test]
    fn collapses_blank_lines_and_indentation() {
        assert_eq!(normalize("one\n\n  \n   two"), "one\ntwo");
    }

    #[test]
    fn space_before_newline_survives_as_single_space() {
        assert_eq!(normalize("one  \ntwo"), "one \ntwo");
    }

    #[test]
    fn degenerate_input_becomes_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! ... ???"), "");
        assert_eq!(normalize("\n \n"), "");
    }

    #[test]
    fn non_latin_text_is_dropped() {
        assert_eq!(normalize("君の名は kimi"), "kimi");
    }

    #[test]
    fn is_idempotent() {
        for raw in AWKWARD {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn output_stays_in_character_set() {
        for raw in AWKWARD {
            let out = normalize(raw);
            assert!(
                out.chars().all(|c| c.is_ascii_lowercase() || "' \n()".contains(c)),
                "unexpected character in {out:?}"
            );
            assert!(!out.starts_with([' ', '\n']) && !out.ends_with([' ', '\n']));
            assert!(!out.contains("  ") && !out.contains("\n\n") && !out.contains("\n "));
        }
    }

    #[test]
    fn strip_parens_keeps_enclosed_text() {
        assert_eq!(strip_parens("(ooh) baby (yeah)"), "ooh baby yeah");
        assert_eq!(strip_parens("no markers"), "no markers");
    }
}
