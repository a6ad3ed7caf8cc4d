//! Interactive reading session
//!
//! A line-oriented command loop over the controller. Each command is awaited
//! to completion before the next line is read, so navigation responses are
//! applied in the order the commands were issued.

use std::io::{BufRead, Write};

use crate::output::display;
use crate::reader::ReaderController;
use crate::{MushafError, Result};

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Advance to the next verse
    Next,
    /// Step back to the previous verse
    Previous,
    /// Jump to a `chapter:verse` reference
    Goto(u16, u16),
    /// Select a chapter (resets to its first verse)
    Chapter(u16),
    /// Print the chapter list
    List,
    /// Filter the chapter list
    Search(String),
    /// Switch the translation edition
    Translation(String),
    /// Show the word-by-word breakdown of the current verse
    Words,
    /// Play (or print) the current verse's recitation audio
    Play,
    /// Download the current verse's recitation audio to a file
    Save(Option<String>),
    /// Toggle the light/dark theme
    Theme,
    /// Show command help
    Help,
    /// Leave the session
    Quit,
    /// Blank line
    Empty,
    /// Anything unrecognized
    Unknown(String),
}

/// Parses a `chapter:verse` reference such as "2:255"
pub fn parse_reference(s: &str) -> Option<(u16, u16)> {
    let (chapter, verse) = s.split_once(':')?;
    let chapter: u16 = chapter.trim().parse().ok()?;
    let verse: u16 = verse.trim().parse().ok()?;
    Some((chapter, verse))
}

/// Parses one line of session input
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "next" | "n" => Command::Next,
        "prev" | "previous" | "p" => Command::Previous,
        "goto" | "g" => match parse_reference(rest) {
            Some((chapter, verse)) => Command::Goto(chapter, verse),
            None => Command::Unknown(line.to_string()),
        },
        "surah" | "chapter" | "c" => match rest.parse() {
            Ok(id) => Command::Chapter(id),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "list" | "l" => Command::List,
        "search" | "s" => Command::Search(rest.to_string()),
        "translation" | "t" if !rest.is_empty() => Command::Translation(rest.to_string()),
        "words" | "w" => Command::Words,
        "play" => Command::Play,
        "save" => Command::Save(if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }),
        "theme" => Command::Theme,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Runs the interactive session until quit or end of input
pub async fn run_session(controller: &mut ReaderController) -> Result<()> {
    println!("Mushaf - {} chapters loaded. Type 'help' for commands.\n", controller.chapters().len());

    // Initial display, like the original's load-on-startup
    let initial = controller.refresh().await;
    show_after_fetch(controller, initial);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} > ", controller.cursor());
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match parse_command(&line) {
            Command::Next => {
                let result = controller.next_verse().await;
                if run_nav(controller, result) == Some(false) {
                    println!("Already at the last verse of this chapter.");
                }
            }
            Command::Previous => {
                let result = controller.previous_verse().await;
                if run_nav(controller, result) == Some(false) {
                    println!("Already at the first verse.");
                }
            }
            Command::Goto(chapter, verse) => {
                let result = controller.goto(chapter, verse).await;
                show_after_fetch(controller, result);
            }
            Command::Chapter(id) => {
                let result = controller.select_chapter(id).await;
                show_after_fetch(controller, result);
            }
            Command::List => {
                let chapters: Vec<_> = controller.chapters().iter().collect();
                println!(
                    "{}",
                    display::format_chapter_list(&chapters, controller.cursor().chapter())
                );
            }
            Command::Search(query) => {
                let matches = controller.search(&query);
                if matches.is_empty() {
                    println!("No chapters match '{}'.", query);
                } else {
                    println!(
                        "{}",
                        display::format_chapter_list(&matches, controller.cursor().chapter())
                    );
                }
            }
            Command::Translation(edition) => {
                let result = controller.set_translation(edition).await;
                show_after_fetch(controller, result);
            }
            Command::Words => match controller.word_by_word().await {
                Ok(segments) => println!("{}", display::format_words(&segments)),
                Err(MushafError::WordByWordUnavailable) => {
                    println!("No word-by-word source is configured.");
                }
                Err(e) => {
                    tracing::error!("Failed to load word-by-word breakdown: {}", e);
                    println!("Error loading word-by-word breakdown. Please try again.");
                }
            },
            Command::Play => play_current(controller),
            Command::Save(file) => save_current(controller, file).await,
            Command::Theme => match controller.toggle_theme() {
                Ok(theme) => println!("Theme set to {}.", theme),
                Err(e) => {
                    tracing::error!("Failed to persist theme: {}", e);
                    println!("Could not save theme preference.");
                }
            },
            Command::Help => println!("{}", display::help_text()),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(input) => {
                println!("Unrecognized command: '{}'. Type 'help' for commands.", input);
            }
        }
    }

    Ok(())
}

/// Handles a bounded navigation result: render on movement, surface errors
///
/// Returns `Some(moved)` on success, `None` when the fetch failed.
fn run_nav(controller: &ReaderController, result: Result<bool>) -> Option<bool> {
    match result {
        Ok(true) => {
            render_current(controller);
            Some(true)
        }
        Ok(false) => Some(false),
        Err(e) => {
            tracing::error!("Failed to load verse: {}", e);
            println!("Error loading verse. Please try again.");
            None
        }
    }
}

/// Renders the displayed verse, or surfaces a fetch failure
fn show_after_fetch(controller: &ReaderController, result: Result<()>) {
    match result {
        Ok(()) => render_current(controller),
        Err(e) => {
            tracing::error!("Failed to load verse: {}", e);
            println!("Error loading verse. Please try again.");
        }
    }
}

fn render_current(controller: &ReaderController) {
    if let Some(bundle) = controller.current() {
        println!(
            "{}",
            display::format_verse(bundle, controller.theme(), controller.can_rewind(), controller.can_advance())
        );
    }
}

/// Hands the current verse's audio to the configured player, or prints the URL
fn play_current(controller: &ReaderController) {
    let Some(url) = controller.audio_url() else {
        println!("No recitation audio available for this verse.");
        return;
    };

    match controller.player_command() {
        Some(command) => match crate::audio::spawn_player(command, url) {
            Ok(_child) => println!("Playing {}", controller.cursor()),
            Err(e) => {
                tracing::error!("Failed to start audio player: {}", e);
                println!("Could not start the audio player.");
            }
        },
        None => println!("Audio: {}", url),
    }
}

/// Downloads the current verse's audio to a file
async fn save_current(controller: &ReaderController, file: Option<String>) {
    let Some(url) = controller.audio_url() else {
        println!("No recitation audio available for this verse.");
        return;
    };

    let cursor = controller.cursor();
    let file = file.unwrap_or_else(|| format!("{}-{}.mp3", cursor.chapter(), cursor.verse()));

    match crate::audio::download(controller.client().http(), url, std::path::Path::new(&file)).await
    {
        Ok(bytes) => println!("Saved {} bytes to {}", bytes, file),
        Err(e) => {
            tracing::error!("Failed to download audio: {}", e);
            println!("Error downloading audio. Please try again.");
        }
    }
}
