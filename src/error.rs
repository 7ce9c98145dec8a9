//! Crate error types.
//!
//! Every failure here is a caller contract violation (bad language tag, missing
//! file) or a broken embedded resource. Malformed lyric text is never an error:
//! normalization is total and degrades to an empty transcript.

use thiserror::Error;

/// Crate result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types with enough context to act on
#[derive(Debug, Error)]
pub enum Error {
    /// Language selector is neither `ja` nor `en`
    #[error("Invalid language {value:?}. {hint}")]
    InvalidLanguage {
        /// The rejected selector, verbatim.
        value: String,
        /// Actionable guidance for fixing the selector.
        hint: &'static str,
    },

    /// The embedded en-US hyphenation dictionary could not be loaded
    #[error("Hyphenation dictionary error: {0}")]
    Hyphenation(String),

    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create an invalid-language error for the given selector
    pub fn invalid_language(value: impl Into<String>) -> Self {
        Self::InvalidLanguage {
            value: value.into(),
            hint: "Expected exactly \"ja\" (Japanese, romanized) or \"en\" (English)",
        }
    }

    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
