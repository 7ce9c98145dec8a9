//! English syllable segmentation.
//!
//! Print hyphenation patterns aim at line-breaking, not at how a word is sung, so
//! a small table of lyric vocabulary overrides them. Everything else goes through
//! the en-US Liang patterns; a word with no hyphenation point is one syllable.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use hyphenation::{Hyphenator, Language as PatternLanguage, Load, Standard};

use super::{cut_at, SyllableSegmenter};
use crate::error::{Error, Result};
use crate::types::Language;

/// Sung syllable breakdowns for words the hyphenator gets wrong.
const CUSTOM_SYLLABLES: &[(&str, &[&str])] = &[
    // Singing and music
    ("singing", &["sing", "ing"]),
    ("melody", &["mel", "o", "dy"]),
    ("karaoke", &["kar", "a", "o", "ke"]),
    ("rhythm", &["rhythm"]),
    ("tonight", &["to", "night"]),
    // Days and time
    ("everyday", &["ev", "ery", "day"]),
    ("someday", &["some", "day"]),
    ("sunday", &["sun", "day"]),
    ("monday", &["mon", "day"]),
    ("tuesday", &["tues", "day"]),
    ("wednesday", &["wednes", "day"]),
    ("thursday", &["thurs", "day"]),
    ("friday", &["fri", "day"]),
    ("saturday", &["sat", "ur", "day"]),
    // Contractions and informal speech
    ("gonna", &["gon", "na"]),
    ("wanna", &["wan", "na"]),
    ("gotta", &["got", "ta"]),
    ("kinda", &["kin", "da"]),
    ("sorta", &["sor", "ta"]),
    ("outta", &["out", "ta"]),
    ("coulda", &["could", "a"]),
    ("shoulda", &["should", "a"]),
    ("woulda", &["would", "a"]),
    // Feelings
    ("loving", &["lov", "ing"]),
    ("feeling", &["feel", "ing"]),
    ("dreaming", &["dream", "ing"]),
    ("hoping", &["hop", "ing"]),
    // Everyday lyric words
    ("baby", &["ba", "by"]),
    ("maybe", &["may", "be"]),
    ("crazy", &["cra", "zy"]),
    ("lady", &["la", "dy"]),
    ("lately", &["late", "ly"]),
    ("lonely", &["lone", "ly"]),
    ("only", &["on", "ly"]),
    ("really", &["re", "al", "ly"]),
    ("yeah", &["yeah"]),
    ("whoa", &["whoa"]),
    ("woah", &["woah"]),
];

static CUSTOM_INDEX: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| CUSTOM_SYLLABLES.iter().copied().collect());

/// Shortest syllable allowed at the start and end of a word.
const HYPHENATION_MINIMA: (usize, usize) = (2, 2);

/// Embedded en-US patterns, parsed once per process.
static EN_US: LazyLock<std::result::Result<Standard, String>> = LazyLock::new(|| {
    let mut patterns = Standard::from_embedded(PatternLanguage::EnglishUS).map_err(|e| {
        tracing::warn!("Failed to load en-US hyphenation patterns: {e}");
        e.to_string()
    })?;
    patterns.minima = HYPHENATION_MINIMA;
    Ok(patterns)
});

/// Look up the sung breakdown of a word, if the override table has one.
///
/// Matching is exact and case-sensitive; callers pass normalized (lowercase) words.
pub fn custom_syllables(word: &str) -> Option<&'static [&'static str]> {
    CUSTOM_INDEX.get(word).copied()
}

/// Dictionary-first English segmenter.
#[derive(Clone, Copy)]
pub struct EnglishSegmenter {
    patterns: &'static Standard,
}

impl fmt::Debug for EnglishSegmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnglishSegmenter")
            .field("overrides", &CUSTOM_SYLLABLES.len())
            .field("patterns", &"en-US")
            .finish()
    }
}

impl EnglishSegmenter {
    /// Create a segmenter backed by the shared en-US patterns.
    pub fn new() -> Result<Self> {
        let patterns = EN_US.as_ref().map_err(|e| Error::Hyphenation(e.clone()))?;
        Ok(Self { patterns })
    }
}

impl SyllableSegmenter for EnglishSegmenter {
    fn language(&self) -> Language {
        Language::English
    }

    fn split<'w>(&self, word: &'w str) -> Vec<&'w str> {
        if let Some(units) = custom_syllables(word) {
            let ends = units.iter().scan(0, |end, unit| {
                *end += unit.len();
                Some(*end)
            });
            if let Some(pieces) = cut_at(word, ends) {
                return pieces;
            }
        }

        let hyphenated = self.patterns.hyphenate(word);
        let pieces = cut_at(word, hyphenated.breaks.iter().copied()).unwrap_or_else(|| vec![word]);
        tracing::trace!("en {word:?} -> {pieces:?}");
        pieces
    }
}
