//! Lyric processing: normalization, tokenization and the segmented hierarchy.
//!
//! Data flows raw text → normalizer → line and word tokenizer → per-word
//! [`crate::syllables`] segmenter → [`Lyrics`].

pub mod models;
pub mod normalize;
pub mod snapshot;
pub mod tokenize;

pub use models::{Line, Lyrics, Text, TextUnit, Word};
pub use normalize::{normalize, strip_parens};
pub use snapshot::{LineSnapshot, LyricsSnapshot, WordSnapshot};
