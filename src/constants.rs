//! Shared constants.
//!
//! Character sets and environment keys used across the pipeline.

/// Normalizer character constants.
pub mod normalize {
    /// The canonical apostrophe every variant is folded into.
    pub const APOSTROPHE: char = '\'';

    /// Typographic apostrophes folded into [`APOSTROPHE`].
    pub const APOSTROPHE_VARIANTS: &[char] = &['\u{2019}', '\u{2018}'];

    /// Opening backing-vocal marker.
    pub const OPEN_PAREN: char = '(';

    /// Closing backing-vocal marker.
    pub const CLOSE_PAREN: char = ')';
}

/// Romanized Japanese mora boundary character sets.
pub mod mora {
    /// Consonants that always open a new mora.
    pub const ONSET_CONSONANTS: &str = "ktnfmrwpbdgzcj";

    /// Consonants that may be followed by `y` within a single palatalized onset.
    pub const PALATAL_ONSETS: &str = "kstnhfmrwpbdgzcj";

    /// Letters that pair with a following `h` (`sh`, `ch`).
    pub const H_DIGRAPH_LEADS: &str = "sc";

    /// Vowels.
    pub const VOWELS: &str = "aeiou";
}

/// Environment variable names read by [`crate::config::Config`].
pub mod env {
    /// Default language selector.
    pub const LANGUAGE: &str = "LYRICS_LANGUAGE";

    /// Default lyrics file.
    pub const LYRICS_PATH: &str = "LYRICS_PATH";
}
