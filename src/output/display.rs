//! Terminal rendering of verses, chapter lists, and word tables
//!
//! Plain-string formatting so it is trivially testable; the session prints
//! the results. The theme picks the rule character used for panel borders.

use crate::api::{Chapter, VerseBundle, WordSegment};
use crate::prefs::Theme;

/// Horizontal rule sized to the verse panel
fn rule(theme: Theme) -> String {
    let c = match theme {
        Theme::Light => '-',
        Theme::Dark => '=',
    };
    c.to_string().repeat(64)
}

/// Formats the verse display panel
///
/// Shows the reference line ("Al-Baqarah:255"), the Arabic text, the
/// transliteration, and the translation, plus the navigation affordances.
pub fn format_verse(
    bundle: &VerseBundle,
    theme: Theme,
    can_rewind: bool,
    can_advance: bool,
) -> String {
    let rule = rule(theme);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{}:{}\n",
        bundle.chapter_name, bundle.reference.verse
    ));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("{}\n\n", bundle.arabic.text));
    out.push_str(&format!("{}\n\n", bundle.transliteration.text));
    out.push_str(&format!("{}\n", bundle.translation.text));
    out.push_str(&rule);
    out.push('\n');

    let prev = if can_rewind { "<- prev" } else { "       " };
    let next = if can_advance { "next ->" } else { "" };
    out.push_str(&format!("{}  [{}]  {}", prev, bundle.reference, next));

    out
}

/// Formats the chapter list panel
///
/// The currently selected chapter is marked with `*`, mirroring the active
/// entry highlight of the original list.
pub fn format_chapter_list(chapters: &[&Chapter], current: u16) -> String {
    let mut out = String::new();

    for chapter in chapters {
        let marker = if chapter.number == current { '*' } else { ' ' };
        out.push_str(&format!(
            "{} {:>3}  {} ({}) - {} [{} verses]\n",
            marker,
            chapter.number,
            chapter.english_name,
            chapter.name,
            chapter.english_name_translation,
            chapter.number_of_ayahs
        ));
    }

    out.trim_end().to_string()
}

/// Formats the word-by-word breakdown table
pub fn format_words(segments: &[WordSegment]) -> String {
    if segments.is_empty() {
        return "No word-by-word breakdown available for this verse.".to_string();
    }

    let mut out = String::new();
    for segment in segments {
        out.push_str(&format!(
            "{:>3}. {}  |  {}  |  {}\n",
            segment.position, segment.arabic, segment.transliteration, segment.translation
        ));
    }

    out.trim_end().to_string()
}

/// Session command help
pub fn help_text() -> &'static str {
    "Commands:
  next, n              advance to the next verse
  prev, p              step back to the previous verse
  goto C:V, g C:V      jump to chapter C, verse V (e.g. goto 2:255)
  surah N, c N         open chapter N at its first verse
  list, l              show the chapter list
  search TEXT, s TEXT  filter chapters by name or number
  translation ID, t ID switch translation edition (e.g. t en.pickthall)
  words, w             word-by-word breakdown of the current verse
  play                 play the current verse's recitation audio
  save [FILE]          download the recitation audio to a file
  theme                toggle light/dark theme
  help, h, ?           show this help
  quit, q              leave the session"
}
