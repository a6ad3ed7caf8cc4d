//! Reader controller - owns the navigation state and sequencing of fetches
//!
//! The controller holds everything one reading session needs:
//! - The HTTP client and edition identifiers
//! - The chapter list fetched once at startup
//! - The navigation cursor and the currently displayed verse bundle
//! - The persisted preferences (theme flag)
//!
//! Every successful navigation transition invalidates the displayed bundle
//! and refetches text/translation/transliteration/audio for the new cursor.
//! Commands run to completion one at a time, so a later navigation action can
//! never have its response overtake an earlier one's.

use std::path::PathBuf;

use crate::api::{Chapter, EditionSet, QuranClient, VerseBundle, WordSegment};
use crate::config::Config;
use crate::nav::Cursor;
use crate::prefs::{Preferences, Theme};
use crate::search::filter_chapters;
use crate::{MushafError, Result};

/// Owns the cursor, chapter list, client, and displayed content
pub struct ReaderController {
    client: QuranClient,
    editions: EditionSet,
    chapters: Vec<Chapter>,
    cursor: Cursor,
    current: Option<VerseBundle>,
    prefs: Preferences,
    prefs_path: PathBuf,
    player_command: Option<String>,
}

impl ReaderController {
    /// Creates a controller and fetches the chapter list
    ///
    /// The chapter list is the source of truth for chapter ids and verse
    /// counts for the rest of the session. The cursor starts at (1, 1); no
    /// verse is fetched until the first [`refresh`](Self::refresh).
    pub async fn new(config: &Config) -> Result<Self> {
        let client = QuranClient::new(config)?;

        tracing::info!("Fetching chapter list from {}", config.api.base_url);
        let chapters = client.chapters().await?;
        tracing::info!("Loaded {} chapters", chapters.len());

        let prefs_path = PathBuf::from(&config.prefs.path);
        let prefs = Preferences::load(&prefs_path)?;

        Ok(Self {
            client,
            editions: EditionSet::from_config(&config.api),
            chapters,
            cursor: Cursor::new(),
            current: None,
            prefs,
            prefs_path,
            player_command: config.audio.player_command.clone(),
        })
    }

    /// The fetched chapter list
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// The current cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The currently displayed verse bundle, if any
    pub fn current(&self) -> Option<&VerseBundle> {
        self.current.as_ref()
    }

    /// The active theme
    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    /// The configured external player command, if any
    pub fn player_command(&self) -> Option<&str> {
        self.player_command.as_deref()
    }

    /// The underlying API client
    pub fn client(&self) -> &QuranClient {
        &self.client
    }

    /// Looks up a chapter's verse count in the fetched list
    fn chapter_len(&self, id: u16) -> Result<u16> {
        self.chapters
            .iter()
            .find(|c| c.number == id)
            .map(|c| c.number_of_ayahs)
            .ok_or(MushafError::UnknownChapter { chapter: id })
    }

    /// Whether the cursor can advance within the current chapter
    pub fn can_advance(&self) -> bool {
        self.chapter_len(self.cursor.chapter())
            .map(|len| self.cursor.can_advance(len))
            .unwrap_or(false)
    }

    /// Whether the cursor can step back within the current chapter
    pub fn can_rewind(&self) -> bool {
        self.cursor.can_rewind()
    }

    /// Selects a chapter, resetting the cursor to its first verse
    pub async fn select_chapter(&mut self, id: u16) -> Result<()> {
        self.chapter_len(id)?;
        self.cursor.select_chapter(id);
        self.refresh().await
    }

    /// Jumps directly to a `chapter:verse` reference
    pub async fn goto(&mut self, chapter: u16, verse: u16) -> Result<()> {
        let len = self.chapter_len(chapter)?;
        if verse < 1 || verse > len {
            return Err(MushafError::VerseOutOfRange {
                chapter,
                verse,
                max: len,
            });
        }
        self.cursor.jump(chapter, verse);
        self.refresh().await
    }

    /// Advances to the next verse; no-op at the end of the chapter
    ///
    /// Returns whether the cursor moved. On movement the displayed content is
    /// refetched for the new position.
    pub async fn next_verse(&mut self) -> Result<bool> {
        let len = self.chapter_len(self.cursor.chapter())?;
        if self.cursor.next_verse(len) {
            self.refresh().await?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Steps back to the previous verse; no-op at verse 1
    pub async fn previous_verse(&mut self) -> Result<bool> {
        if self.cursor.previous_verse() {
            self.refresh().await?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Switches the translation edition and refetches the current verse
    pub async fn set_translation(&mut self, edition: String) -> Result<()> {
        tracing::info!("Switching translation edition to {}", edition);
        self.editions.translation = edition;
        self.refresh().await
    }

    /// Filters the chapter list by a free-text query
    pub fn search(&self, query: &str) -> Vec<&Chapter> {
        filter_chapters(&self.chapters, query)
    }

    /// Fetches the word-by-word breakdown for the current verse
    pub async fn word_by_word(&self) -> Result<Vec<WordSegment>> {
        let reference = self.cursor.reference();
        self.client
            .word_by_word(reference.chapter, reference.verse)
            .await
    }

    /// Fetches the verse bundle for the current cursor
    ///
    /// The previously displayed content is invalidated before the fetch, so a
    /// failure leaves nothing stale on display.
    pub async fn refresh(&mut self) -> Result<()> {
        self.current = None;

        let reference = self.cursor.reference();
        let bundle = self
            .client
            .verse_bundle(reference.chapter, reference.verse, &self.editions)
            .await?;

        self.current = Some(bundle);
        Ok(())
    }

    /// Flips the theme and persists the new value
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.prefs.toggle_theme();
        self.prefs.save(&self.prefs_path)?;
        tracing::info!("Theme set to {}", theme);
        Ok(theme)
    }

    /// The current verse's recitation audio URL, if one was resolved
    pub fn audio_url(&self) -> Option<&str> {
        self.current
            .as_ref()
            .and_then(|bundle| bundle.audio_url.as_deref())
    }
}
