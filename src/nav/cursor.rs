/// The reading cursor: which chapter and verse are currently displayed
///
/// The cursor only moves through explicit navigation actions and is always
/// within `[1, chapter_len]` after any transition. Out-of-bounds requests are
/// rejected as no-ops rather than applied. The cursor is never persisted.
use std::fmt;

use crate::api::VerseReference;

/// The `(chapter, verse)` pair currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    chapter: u16,
    verse: u16,
}

impl Default for Cursor {
    /// A fresh cursor starts at the first verse of the first chapter.
    fn default() -> Self {
        Self {
            chapter: 1,
            verse: 1,
        }
    }
}

impl Cursor {
    /// Creates a cursor at (1, 1)
    pub fn new() -> Self {
        Self::default()
    }

    /// The chapter currently displayed
    pub fn chapter(&self) -> u16 {
        self.chapter
    }

    /// The verse currently displayed within the chapter
    pub fn verse(&self) -> u16 {
        self.verse
    }

    /// The cursor as a `chapter:verse` reference
    pub fn reference(&self) -> VerseReference {
        VerseReference {
            chapter: self.chapter,
            verse: self.verse,
        }
    }

    /// Moves the cursor to the first verse of the given chapter
    ///
    /// Chapter validity is the caller's concern: the external chapter list
    /// defines which ids exist, and the controller checks against it before
    /// calling this.
    pub fn select_chapter(&mut self, id: u16) {
        self.chapter = id;
        self.verse = 1;
    }

    /// Moves the cursor to an arbitrary in-chapter position
    ///
    /// Used for direct jumps after the caller has validated `verse` against
    /// the chapter's length.
    pub fn jump(&mut self, chapter: u16, verse: u16) {
        self.chapter = chapter;
        self.verse = verse;
    }

    /// Advances to the next verse if one exists
    ///
    /// Returns whether a change occurred; at the last verse this is a no-op.
    pub fn next_verse(&mut self, chapter_len: u16) -> bool {
        if self.verse < chapter_len {
            self.verse += 1;
            true
        } else {
            false
        }
    }

    /// Steps back to the previous verse if one exists
    ///
    /// Returns whether a change occurred; at verse 1 this is a no-op.
    pub fn previous_verse(&mut self) -> bool {
        if self.verse > 1 {
            self.verse -= 1;
            true
        } else {
            false
        }
    }

    /// Whether a next verse exists (drives the "next" affordance)
    pub fn can_advance(&self, chapter_len: u16) -> bool {
        self.verse < chapter_len
    }

    /// Whether a previous verse exists (drives the "previous" affordance)
    pub fn can_rewind(&self) -> bool {
        self.verse > 1
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}
