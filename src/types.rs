//! Core type definitions.
//!
//! The language selector is parsed once at the boundary so that nothing deeper in
//! the pipeline ever branches on a raw string tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The language a lyric block is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Romanized Japanese, segmented into morae.
    #[default]
    #[serde(rename = "ja")]
    Japanese,
    /// English, segmented into singing syllables.
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Returns all language variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Japanese, Self::English]
    }

    /// Returns the two-letter selector for this language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts exactly `ja` or `en`; anything else is a caller error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(Self::Japanese),
            "en" => Ok(Self::English),
            other => Err(Error::invalid_language(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn parses_exact_codes() {
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["", "EN", "Ja", "en-US", " en", "fr", "jp"] {
            match bad.parse::<Language>() {
                Err(Error::InvalidLanguage { value, .. }) => assert_eq!(value, bad),
                other => panic!("Expected InvalidLanguage for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn default_is_japanese() {
        assert_eq!(Language::default(), Language::Japanese);
    }

    #[test]
    fn code_round_trips_through_display() {
        for &lang in Language::all() {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
        assert_eq!(serde_json::from_str::<Language>("\"ja\"").unwrap(), Language::Japanese);
    }
}
