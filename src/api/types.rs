use serde::Deserialize;
use std::fmt;

use crate::config::ApiConfig;

/// Standard response envelope used by the Quran REST API
///
/// Every endpoint wraps its payload in `data` alongside an application-level
/// status code that mirrors (but is distinct from) the HTTP status.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

/// A chapter (surah) as returned by the chapter list and chapter endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Chapter number, 1-114
    pub number: u16,

    /// Arabic display name
    pub name: String,

    /// Latin-script display name (e.g. "Al-Baqarah")
    pub english_name: String,

    /// English translation of the name (e.g. "The Cow")
    pub english_name_translation: String,

    /// Number of verses (ayahs) in the chapter
    pub number_of_ayahs: u16,

    /// "Meccan" or "Medinan"
    pub revelation_type: String,
}

/// Abbreviated chapter metadata embedded in per-verse responses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub number_of_ayahs: u16,
}

/// Edition metadata embedded in per-verse responses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionInfo {
    pub identifier: String,
    pub language: String,
    pub name: String,
    pub english_name: String,
    pub format: String,
}

/// A single verse (ayah) in one edition
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    /// Absolute verse number across the whole text
    pub number: u32,

    /// Verse text in this edition's language/script
    pub text: String,

    /// Verse number within its chapter
    pub number_in_surah: u16,

    /// Primary recitation audio URL (audio editions only)
    #[serde(default)]
    pub audio: Option<String>,

    /// Fallback recitation audio URLs (audio editions only)
    #[serde(default)]
    pub audio_secondary: Option<Vec<String>>,

    /// Chapter this verse belongs to
    #[serde(default)]
    pub surah: Option<ChapterSummary>,

    /// Edition this text came from
    #[serde(default)]
    pub edition: Option<EditionInfo>,
}

/// One word of a verse from the word-by-word breakdown API
#[derive(Debug, Clone, Deserialize)]
pub struct WordSegment {
    /// 1-based position of the word within the verse
    pub position: u16,
    pub arabic: String,
    pub translation: String,
    pub transliteration: String,
}

/// The edition identifiers fetched for each navigation step
#[derive(Debug, Clone)]
pub struct EditionSet {
    pub arabic: String,
    pub translation: String,
    pub transliteration: String,
}

impl EditionSet {
    /// Builds the edition set from the API configuration section
    pub fn from_config(api: &ApiConfig) -> Self {
        Self {
            arabic: api.arabic_edition.clone(),
            translation: api.translation_edition.clone(),
            transliteration: api.transliteration_edition.clone(),
        }
    }
}

/// A `chapter:verse` pair identifying one displayed verse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseReference {
    pub chapter: u16,
    pub verse: u16,
}

impl fmt::Display for VerseReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// Everything fetched for one navigation step, fanned in from the
/// per-edition verse requests
#[derive(Debug, Clone)]
pub struct VerseBundle {
    /// Which verse this bundle displays
    pub reference: VerseReference,

    /// Latin-script chapter name for the verse reference line
    pub chapter_name: String,

    /// Arabic text (from the audio-bearing edition)
    pub arabic: Verse,

    /// Translation text
    pub translation: Verse,

    /// Transliteration text
    pub transliteration: Verse,

    /// Resolved recitation audio URL, if the edition carries one
    pub audio_url: Option<String>,
}
