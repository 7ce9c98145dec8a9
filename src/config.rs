//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::env::{LANGUAGE, LYRICS_PATH};
use crate::error::Result;
use crate::types::Language;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Language used when the caller does not pick one
    pub language: Language,
    /// Lyrics file used when the caller does not name one
    pub lyrics_path: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            language: Language::default(),
            lyrics_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// An unrecognised language is an error rather than a silent fallback: a wrong
    /// language corrupts the segmentation of the whole song.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(code) = lookup(LANGUAGE) {
            config.language = code.parse()?;
        }

        config.lyrics_path = lookup(LYRICS_PATH)
            .filter(|path| !path.trim().is_empty())
            .map(|path| PathBuf::from(shellexpand::tilde(&path).to_string()));

        Ok(config)
    }
}
