//! Chapter search filter
//!
//! Case-insensitive filtering of the in-memory chapter list. Matches the
//! chapter number, the Latin-script name, the English translation of the
//! name, or the Arabic name. Purely local; no network involved.

use crate::api::Chapter;

/// Filters the chapter list by a free-text query
///
/// An empty (or whitespace-only) query returns the whole list, matching the
/// behavior of an empty search box.
pub fn filter_chapters<'a>(chapters: &'a [Chapter], query: &str) -> Vec<&'a Chapter> {
    let query = query.trim();
    if query.is_empty() {
        return chapters.iter().collect();
    }

    let needle = query.to_lowercase();

    chapters
        .iter()
        .filter(|chapter| {
            chapter.number.to_string() == needle
                || chapter.english_name.to_lowercase().contains(&needle)
                || chapter
                    .english_name_translation
                    .to_lowercase()
                    .contains(&needle)
                || chapter.name.contains(query)
        })
        .collect()
}
