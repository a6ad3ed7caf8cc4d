//! Mushaf: a terminal Quran reader
//!
//! This crate implements a command-line Quran reader that lists chapters
//! (surahs), fetches verse text, translation, transliteration, and recitation
//! audio from a public REST API, and renders them in the terminal.

pub mod api;
pub mod audio;
pub mod config;
pub mod nav;
pub mod output;
pub mod prefs;
pub mod reader;
pub mod search;

use thiserror::Error;

/// Number of chapters (surahs) in the Quran.
pub const CHAPTER_COUNT: u16 = 114;

/// Main error type for Mushaf operations
#[derive(Debug, Error)]
pub enum MushafError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("API error for {endpoint}: {status} (code {code})")]
    Api {
        endpoint: String,
        code: u16,
        status: String,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Unknown chapter: {chapter} (expected 1-114)")]
    UnknownChapter { chapter: u16 },

    #[error("Verse {verse} is out of range for chapter {chapter} (1-{max})")]
    VerseOutOfRange { chapter: u16, verse: u16, max: u16 },

    #[error("No word-by-word source is configured")]
    WordByWordUnavailable,

    #[error("No audio player command is configured")]
    PlayerUnavailable,

    #[error("Preferences error: {0}")]
    Prefs(#[from] PrefsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Preferences-specific errors
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Failed to read preferences file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse preferences TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for Mushaf operations
pub type Result<T> = std::result::Result<T, MushafError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for preferences operations
pub type PrefsResult<T> = std::result::Result<T, PrefsError>;

// Re-export commonly used types
pub use api::{Chapter, QuranClient, VerseBundle};
pub use config::Config;
pub use nav::Cursor;
pub use prefs::{Preferences, Theme};
pub use reader::ReaderController;
