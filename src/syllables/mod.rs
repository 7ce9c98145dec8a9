//! Syllable segmentation.
//!
//! A segmenter decomposes one normalized word into the ordered units that each get
//! a single karaoke timing slot. Segmenters only insert boundaries: the returned
//! pieces are slices of the input word and always concatenate back to it.
//!
//! The strategy is chosen once per lyric block with [`segmenter_for`] and shared
//! down the hierarchy, so no word ever re-branches on the language tag.

mod english;
mod japanese;

use std::fmt::Debug;
use std::sync::Arc;

pub use english::{custom_syllables, EnglishSegmenter};
pub use japanese::{is_mora_boundary, JapaneseSegmenter};

use crate::error::Result;
use crate::types::Language;

/// Language-specific word-to-syllable strategy.
pub trait SyllableSegmenter: Send + Sync + Debug {
    /// The language this segmenter handles.
    fn language(&self) -> Language;

    /// Split a word into its syllable units, in order.
    ///
    /// An empty word yields a single empty unit.
    fn split<'w>(&self, word: &'w str) -> Vec<&'w str>;
}

/// Build the segmenter for a language.
pub fn segmenter_for(language: Language) -> Result<Arc<dyn SyllableSegmenter>> {
    let segmenter: Arc<dyn SyllableSegmenter> = match language {
        Language::English => Arc::new(EnglishSegmenter::new()?),
        Language::Japanese => Arc::new(JapaneseSegmenter),
    };
    tracing::debug!("Built {language} syllable segmenter");
    Ok(segmenter)
}

/// Split a single word without building a lyric hierarchy.
pub fn split(word: &str, language: Language) -> Result<Vec<&str>> {
    Ok(segmenter_for(language)?.split(word))
}

/// Cut `word` at the given ascending byte offsets.
///
/// Returns `None` if an offset is out of order, out of range or not on a char
/// boundary. Offsets at either end of the word are ignored so no piece is empty.
fn cut_at(word: &str, offsets: impl IntoIterator<Item = usize>) -> Option<Vec<&str>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for offset in offsets {
        if offset == 0 || offset == word.len() {
            continue;
        }
        pieces.push(word.get(start..offset)?);
        start = offset;
    }
    pieces.push(word.get(start..)?);
    pieces.iter().all(|piece| !piece.is_empty() || word.is_empty()).then_some(pieces)
}
