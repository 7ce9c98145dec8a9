//! Karaoke syllables - lyric normalization and syllable segmentation.
//!
//! Turns a raw lyric block into the Lyrics → Line → Word → syllable hierarchy that
//! a forced aligner maps onto audio timestamps. English words are split into sung
//! syllables; romanized Japanese words are split into morae.
//!
//! ```no_run
//! use karaoke_syllables::{Language, Lyrics, TextUnit};
//!
//! let lyrics = Lyrics::new("Gonna sing tonight", Language::English)?;
//! for word in lyrics.words() {
//!     println!("{} -> {:?}", word.normalized(), word.syllables());
//! }
//! # Ok::<(), karaoke_syllables::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;
pub mod syllables;
pub mod types;

pub use error::{Error, Result};
pub use lyrics::{normalize, strip_parens, Line, Lyrics, LyricsSnapshot, TextUnit, Word};
pub use syllables::{segmenter_for, split, SyllableSegmenter};
pub use types::Language;
