//! Quran REST API client
//!
//! Wire types and the HTTP client for the external Quran text/audio API and
//! the word-by-word breakdown API. Responses are plain JSON over HTTPS; there
//! is no retry, caching, or failure-recovery policy beyond surfacing a typed
//! error to the caller.

mod client;
mod types;

pub use client::{build_http_client, QuranClient};
pub use types::{
    Chapter, ChapterSummary, EditionInfo, EditionSet, Envelope, Verse, VerseBundle,
    VerseReference, WordSegment,
};
