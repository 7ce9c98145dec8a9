//! Romanized Japanese mora segmentation.
//!
//! Japanese singing is mora-timed, so a romanized word is cut before every mora
//! onset. The boundary rule is the well-known karaoke auto-split heuristic, kept
//! alternative for alternative. A boundary falls between `prev` and `next` when
//! any of these holds (letters compared case-insensitively):
//!
//! 1. `next` is `h` and `prev` is not `s`/`c` (`sh`, `ch` stay whole)
//! 2. `next` is `y` and `prev` is not a palatalizing consonant (`ky`, `ry`, ...)
//! 3. `next` is `s` and `prev` is not `t` (`ts` stays whole)
//! 4. `next` is one of `k t n f m r w p b d g z c j`
//! 5. `next` is a vowel and `prev` is a vowel or not alphanumeric
//!
//! Alternatives 1-3 and 5 need a preceding character. Alternative 4 may fire at
//! the start of a word, which only produces an empty leading fragment, so the word
//! start is never a cut.

use super::{cut_at, SyllableSegmenter};
use crate::constants::mora::{H_DIGRAPH_LEADS, ONSET_CONSONANTS, PALATAL_ONSETS, VOWELS};
use crate::types::Language;

/// Whether a mora boundary falls between `prev` and `next`.
pub fn is_mora_boundary(prev: char, next: char) -> bool {
    let prev = prev.to_ascii_lowercase();
    let next = next.to_ascii_lowercase();
    let is_vowel = |c: char| VOWELS.contains(c);

    match next {
        'h' => !H_DIGRAPH_LEADS.contains(prev),
        'y' => !PALATAL_ONSETS.contains(prev),
        's' => prev != 't',
        c if ONSET_CONSONANTS.contains(c) => true,
        c if is_vowel(c) => is_vowel(prev) || !prev.is_alphanumeric(),
        _ => false,
    }
}

/// Mora segmenter for romanized Japanese.
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseSegmenter;

impl SyllableSegmenter for JapaneseSegmenter {
    fn language(&self) -> Language {
        Language::Japanese
    }

    fn split<'w>(&self, word: &'w str) -> Vec<&'w str> {
        let cuts = word
            .char_indices()
            .zip(word.chars().skip(1))
            .filter(|&((_, prev), next)| is_mora_boundary(prev, next))
            .map(|((offset, prev), _)| offset + prev.len_utf8());

        let pieces = cut_at(word, cuts).unwrap_or_else(|| vec![word]);
        tracing::trace!("ja {word:?} -> {pieces:?}");
        pieces
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn split(word: &str) -> Vec<&str> {
        JapaneseSegmenter.split(word)
    }

    #[test]
    fn palatal_onset_stays_whole() {
        assert_eq!(split("kyou"), ["kyo", "u"]);
        assert_eq!(split("ryuusei"), ["ryu", "u", "se", "i"]);
    }

    #[test]
    fn sh_ch_ts_digraphs_stay_whole() {
        assert_eq!(split("shinjiteru"), ["shi", "n", "ji", "te", "ru"]);
        assert_eq!(split("chiisana"), ["chi", "i", "sa", "na"]);
        assert_eq!(split("tsukiakari"), ["tsu", "ki", "a", "ka", "ri"]);
    }

    #[test]
    fn vowel_runs_split_per_mora() {
        assert_eq!(split("ai"), ["a", "i"]);
        assert_eq!(split("aoi"), ["a", "o", "i"]);
    }

    #[test]
    fn doubled_consonant_is_its_own_unit() {
        assert_eq!(split("nippon"), ["ni", "p", "po", "n"]);
        assert_eq!(split("kitto"), ["ki", "t", "to"]);
    }

    #[test]
    fn y_after_vowel_opens_a_mora() {
        assert_eq!(split("fuyu"), ["fu", "yu"]);
        assert_eq!(split("sayonara"), ["sa", "yo", "na", "ra"]);
    }

    #[test]
    fn h_after_consonant_or_vowel_opens_a_mora() {
        assert_eq!(split("hohoemi"), ["ho", "ho", "e", "mi"]);
        assert_eq!(split("hhh"), ["h", "h", "h"]);
    }

    #[test]
    fn backing_vocal_paren_splits_from_vowel() {
        assert_eq!(split("(oohh)"), ["(", "o", "o", "h", "h)"]);
        assert_eq!(split("(ai)"), ["(", "a", "i)"]);
    }

    #[test]
    fn apostrophe_before_vowel_is_a_boundary() {
        assert_eq!(split("n'a"), ["n'", "a"]);
    }

    #[test]
    fn rule_is_case_insensitive() {
        assert_eq!(split("KYOU"), ["KYO", "U"]);
        assert!(is_mora_boundary('A', 'K'));
        assert!(!is_mora_boundary('S', 'H'));
    }

    #[test]
    fn boundary_alternatives() {
        // 1: h
        assert!(is_mora_boundary('o', 'h'));
        assert!(!is_mora_boundary('s', 'h'));
        assert!(!is_mora_boundary('c', 'h'));
        // 2: y
        assert!(is_mora_boundary('a', 'y'));
        assert!(!is_mora_boundary('k', 'y'));
        assert!(!is_mora_boundary('h', 'y'));
        // 3: s
        assert!(is_mora_boundary('a', 's'));
        assert!(!is_mora_boundary('t', 's'));
        // 4: onset consonants fire unconditionally
        for c in ONSET_CONSONANTS.chars() {
            assert!(is_mora_boundary('n', c));
        }
        // 5: vowels
        assert!(is_mora_boundary('a', 'i'));
        assert!(is_mora_boundary('(', 'a'));
        assert!(!is_mora_boundary('k', 'a'));
        // anything else never starts a unit
        assert!(!is_mora_boundary('a', 'l'));
        assert!(!is_mora_boundary('a', ')'));
    }
}
