//! The Lyrics → Line → Word → syllable hierarchy.
//!
//! Each level owns its raw text and builds its children from it on first access.
//! Derived fields are computed at most once per instance and then borrowed; two
//! instances never share a cache.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::normalize::{normalize, strip_parens};
use super::snapshot::{LineSnapshot, LyricsSnapshot, WordSnapshot};
use super::tokenize::{split_lines, split_words};
use crate::constants::normalize::{CLOSE_PAREN, OPEN_PAREN};
use crate::error::{Error, Result};
use crate::syllables::{segmenter_for, SyllableSegmenter};
use crate::types::Language;

/// Raw text plus its lazily derived forms.
#[derive(Debug, Clone, Default)]
pub struct Text {
    raw: String,
    normalized: OnceLock<String>,
    transcript: OnceLock<Vec<String>>,
    transcript_for_alignment: OnceLock<Vec<String>>,
}

impl Text {
    /// Wrap raw text; nothing is derived until asked for.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into(), ..Self::default() }
    }

    /// The original text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The raw text passed through [`normalize`].
    pub fn normalized(&self) -> &str {
        self.normalized.get_or_init(|| normalize(&self.raw))
    }

    /// Whitespace tokens of the normalized text, parentheses included.
    pub fn transcript(&self) -> &[String] {
        self.transcript
            .get_or_init(|| split_words(self.normalized()).map(String::from).collect())
    }

    /// Whitespace tokens of the normalized text with parentheses removed.
    pub fn transcript_for_alignment(&self) -> &[String] {
        self.transcript_for_alignment.get_or_init(|| {
            split_words(&strip_parens(self.normalized())).map(String::from).collect()
        })
    }
}

/// Shared surface of every level in the hierarchy.
pub trait TextUnit {
    /// The cached text backing this unit.
    fn text(&self) -> &Text;

    /// The language this unit is segmented as.
    fn language(&self) -> Language;

    /// The original text of this unit.
    fn raw(&self) -> &str {
        self.text().raw()
    }

    /// See [`Text::normalized`].
    fn normalized(&self) -> &str {
        self.text().normalized()
    }

    /// See [`Text::transcript`].
    fn transcript(&self) -> &[String] {
        self.text().transcript()
    }

    /// See [`Text::transcript_for_alignment`].
    fn transcript_for_alignment(&self) -> &[String] {
        self.text().transcript_for_alignment()
    }
}

/// A full lyric block.
#[derive(Debug, Clone)]
pub struct Lyrics {
    text: Text,
    segmenter: Arc<dyn SyllableSegmenter>,
    lines: OnceLock<Vec<Line>>,
}

impl Lyrics {
    /// Build lyrics for a language.
    ///
    /// Fails only if the language's segmenter cannot be built.
    pub fn new(raw: impl Into<String>, language: Language) -> Result<Self> {
        Ok(Self::with_segmenter(raw, segmenter_for(language)?))
    }

    /// Build lyrics from a language selector, rejecting anything but `ja` or `en`
    /// before any segmentation work starts.
    pub fn parse(raw: impl Into<String>, language: &str) -> Result<Self> {
        Self::new(raw, language.parse()?)
    }

    /// Read a UTF-8 lyrics file.
    pub fn from_path(path: impl AsRef<Path>, language: Language) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        Self::new(raw, language)
    }

    /// Build lyrics around an existing segmenter.
    pub fn with_segmenter(raw: impl Into<String>, segmenter: Arc<dyn SyllableSegmenter>) -> Self {
        Self { text: Text::new(raw), segmenter, lines: OnceLock::new() }
    }

    /// The non-empty lines, top to bottom.
    pub fn lines(&self) -> &[Line] {
        self.lines.get_or_init(|| {
            let lines: Vec<Line> = split_lines(self.text.raw())
                .map(|raw| Line::new(raw, Arc::clone(&self.segmenter)))
                .collect();
            tracing::debug!("Split lyrics into {} lines ({})", lines.len(), self.language());
            lines
        })
    }

    /// Every word of every line, in reading order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.lines().iter().flat_map(Line::words)
    }

    /// Total number of syllable units across the whole block.
    pub fn syllable_count(&self) -> usize {
        self.words().map(|word| word.syllables().len()).sum()
    }

    /// Owned, serializable copy of the whole hierarchy.
    pub fn snapshot(&self) -> LyricsSnapshot {
        LyricsSnapshot {
            language: self.language(),
            lines: self.lines().iter().map(Line::snapshot).collect(),
        }
    }
}

impl TextUnit for Lyrics {
    fn text(&self) -> &Text {
        &self.text
    }

    fn language(&self) -> Language {
        self.segmenter.language()
    }
}

/// One line of lyrics.
#[derive(Debug, Clone)]
pub struct Line {
    text: Text,
    segmenter: Arc<dyn SyllableSegmenter>,
    words: OnceLock<Vec<Word>>,
}

impl Line {
    /// Build a line around an existing segmenter.
    pub fn new(raw: impl Into<String>, segmenter: Arc<dyn SyllableSegmenter>) -> Self {
        Self { text: Text::new(raw), segmenter, words: OnceLock::new() }
    }

    /// The words of this line, left to right.
    pub fn words(&self) -> &[Word] {
        self.words.get_or_init(|| {
            let words: Vec<Word> = self
                .transcript()
                .iter()
                .filter(|token| !token.is_empty())
                .map(|token| Word::new(token.as_str(), Arc::clone(&self.segmenter)))
                .collect();
            if words.is_empty() {
                tracing::warn!("Line {:?} has no alignable words", self.raw());
            }
            words
        })
    }

    /// Whether each word, in order, sits inside a parenthesised backing-vocal passage.
    ///
    /// A passage may span several words. An unclosed `(` runs to the end of the line.
    pub fn backing_vocals(&self) -> Vec<bool> {
        let mut depth = 0usize;
        self.words()
            .iter()
            .map(|word| {
                let mut inside = depth > 0;
                for c in word.normalized().chars() {
                    if c == OPEN_PAREN {
                        depth += 1;
                        inside = true;
                    } else if c == CLOSE_PAREN {
                        depth = depth.saturating_sub(1);
                    }
                }
                inside
            })
            .collect()
    }

    fn snapshot(&self) -> LineSnapshot {
        let backing = self.backing_vocals();
        LineSnapshot {
            raw: self.raw().to_string(),
            transcript_for_alignment: self.transcript_for_alignment().to_vec(),
            words: self
                .words()
                .iter()
                .zip(backing)
                .map(|(word, backing_vocal)| word.snapshot(backing_vocal))
                .collect(),
        }
    }
}

impl TextUnit for Line {
    fn text(&self) -> &Text {
        &self.text
    }

    fn language(&self) -> Language {
        self.segmenter.language()
    }
}

/// One word of a line.
#[derive(Debug, Clone)]
pub struct Word {
    text: Text,
    segmenter: Arc<dyn SyllableSegmenter>,
    syllables: OnceLock<Vec<String>>,
}

impl Word {
    /// Build a word around an existing segmenter.
    pub fn new(raw: impl Into<String>, segmenter: Arc<dyn SyllableSegmenter>) -> Self {
        Self { text: Text::new(raw), segmenter, syllables: OnceLock::new() }
    }

    /// The syllable units of the normalized word, in order.
    pub fn syllables(&self) -> &[String] {
        self.syllables.get_or_init(|| {
            self.segmenter.split(self.normalized()).into_iter().map(String::from).collect()
        })
    }

    fn snapshot(&self, backing_vocal: bool) -> WordSnapshot {
        WordSnapshot {
            raw: self.raw().to_string(),
            transcript_for_alignment: self.transcript_for_alignment().to_vec(),
            syllables: self.syllables().to_vec(),
            backing_vocal,
        }
    }
}

impl TextUnit for Word {
    fn text(&self) -> &Text {
        &self.text
    }

    fn language(&self) -> Language {
        self.segmenter.language()
    }
}
