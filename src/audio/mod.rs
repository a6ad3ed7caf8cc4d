//! Recitation audio resolution and playback hand-off
//!
//! The reader never decodes audio itself. It resolves the per-verse audio URL
//! from the audio-bearing edition response and either hands it to a
//! user-configured external player command or downloads the bytes to a file.

use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::api::Verse;
use crate::{MushafError, Result};

/// Resolves the recitation audio URL from an audio-edition verse
///
/// Prefers the primary URL, falling back to the first secondary URL.
pub fn resolve_audio(verse: &Verse) -> Option<String> {
    verse.audio.clone().or_else(|| {
        verse
            .audio_secondary
            .as_ref()
            .and_then(|urls| urls.first().cloned())
    })
}

/// Downloads recitation audio to a local file
///
/// Returns the number of bytes written.
pub async fn download(client: &reqwest::Client, url: &str, path: &Path) -> Result<u64> {
    tracing::info!("Downloading audio from {} to {}", url, path.display());

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| MushafError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MushafError::Api {
            endpoint: url.to_string(),
            code: status.as_u16(),
            status: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| MushafError::Http {
            url: url.to_string(),
            source,
        })?;

    std::fs::write(path, &bytes)?;
    Ok(bytes.len() as u64)
}

/// Splits a configured player command into program and arguments
///
/// The audio URL is appended as the final argument.
pub fn player_invocation(command: &str, url: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?.to_string();
    let mut args: Vec<String> = parts.map(str::to_string).collect();
    args.push(url.to_string());
    Some((program, args))
}

/// Hands the audio URL to the configured external player
///
/// The child process is detached from the reader's stdio so player chatter
/// does not interleave with the session prompt.
pub fn spawn_player(command: &str, url: &str) -> Result<Child> {
    let (program, args) =
        player_invocation(command, url).ok_or(MushafError::PlayerUnavailable)?;

    tracing::info!("Handing audio to player: {} {:?}", program, args);

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(child)
}
