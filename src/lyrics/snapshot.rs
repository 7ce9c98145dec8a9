//! Serializable view of a segmented lyric block.
//!
//! This is what leaves the crate: the aligner reads `transcript_for_alignment`
//! and `syllables`, and subtitle generation reads the whole tree.

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// A whole lyric block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricsSnapshot {
    /// Language every level was segmented as.
    pub language: Language,
    /// Non-empty lines, top to bottom.
    pub lines: Vec<LineSnapshot>,
}

/// One lyric line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSnapshot {
    /// The line as written.
    pub raw: String,
    /// Parenthesis-free alignment tokens.
    pub transcript_for_alignment: Vec<String>,
    /// Words, left to right.
    pub words: Vec<WordSnapshot>,
}

/// One word and its syllable units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSnapshot {
    /// The normalized token the word was built from.
    pub raw: String,
    /// Parenthesis-free alignment tokens (empty for a bare `(` or `)`).
    pub transcript_for_alignment: Vec<String>,
    /// Syllable units in order; they concatenate back to the normalized word.
    pub syllables: Vec<String>,
    /// Whether the word is part of a parenthesised backing-vocal passage.
    #[serde(default)]
    pub backing_vocal: bool,
}

impl LyricsSnapshot {
    /// Every syllable unit in reading order.
    pub fn syllables(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .flat_map(|line| &line.words)
            .flat_map(|word| word.syllables.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::lyrics::Lyrics;

    #[test]
    fn snapshot_mirrors_hierarchy() {
        let lyrics = Lyrics::new("Gonna be (alright)\nTonight", Language::English).unwrap();
        let snapshot = lyrics.snapshot();

        assert_eq!(snapshot.language, Language::English);
        assert_eq!(snapshot.lines.len(), 2);
        let first = &snapshot.lines[0];
        assert_eq!(first.raw, "Gonna be (alright)");
        assert_eq!(first.transcript_for_alignment, ["gonna", "be", "alright"]);
        assert_eq!(first.words[0].syllables, ["gon", "na"]);
        assert!(!first.words[0].backing_vocal);
        assert!(first.words[2].backing_vocal);
        assert_eq!(snapshot.lines[1].words[0].syllables, ["to", "night"]);
    }

    #[test]
    fn syllables_flatten_in_reading_order() {
        let lyrics = Lyrics::new("kyou mo\nai", Language::Japanese).unwrap();
        let snapshot = lyrics.snapshot();
        let flat: Vec<&str> = snapshot.syllables().collect();
        assert_eq!(flat, ["kyo", "u", "mo", "a", "i"]);
        assert_eq!(flat.len(), lyrics.syllable_count());
    }

    #[test]
    fn survives_json() {
        let snapshot = Lyrics::new("la la (la)", Language::Japanese).unwrap().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"language\":\"ja\""));
        let back: LyricsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
