//! HTTP client for the Quran REST API
//!
//! All network access goes through [`QuranClient`]: the chapter list, chapter
//! metadata, per-edition verse text, and the word-by-word breakdown. Each
//! navigation step fans out the per-edition requests concurrently and fans
//! them in to a [`VerseBundle`].

use crate::api::types::{Chapter, EditionSet, Envelope, Verse, VerseBundle, VerseReference, WordSegment};
use crate::config::{ClientConfig, Config};
use crate::{MushafError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper identification and timeouts
///
/// The User-Agent is `{reader-name}/{reader-version}`.
pub fn build_http_client(config: &ClientConfig) -> std::result::Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", config.reader_name, config.reader_version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Client for the Quran text/audio API and the word-by-word API
#[derive(Debug, Clone)]
pub struct QuranClient {
    http: Client,
    base: String,
    word_by_word: Option<String>,
}

impl QuranClient {
    /// Creates a client from the loaded configuration
    ///
    /// Base URLs are parsed up front so endpoint construction cannot fail
    /// later with a malformed-URL surprise.
    pub fn new(config: &Config) -> Result<Self> {
        Url::parse(&config.api.base_url)?;
        if let Some(wbw) = &config.api.word_by_word_url {
            Url::parse(wbw)?;
        }

        let http = build_http_client(&config.client)?;

        Ok(Self {
            http,
            base: config.api.base_url.trim_end_matches('/').to_string(),
            word_by_word: config
                .api
                .word_by_word_url
                .as_ref()
                .map(|u| u.trim_end_matches('/').to_string()),
        })
    }

    /// Returns the underlying reqwest client (for audio downloads)
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Whether a word-by-word source is configured
    pub fn has_word_by_word(&self) -> bool {
        self.word_by_word.is_some()
    }

    /// Fetches the full chapter (surah) list
    pub async fn chapters(&self) -> Result<Vec<Chapter>> {
        let url = format!("{}/surah", self.base);
        self.get_envelope(&url).await
    }

    /// Fetches metadata for a single chapter, including its verse count
    pub async fn chapter(&self, id: u16) -> Result<Chapter> {
        let url = format!("{}/surah/{}", self.base, id);
        self.get_envelope(&url).await
    }

    /// Fetches one verse in the given edition
    pub async fn verse(&self, chapter: u16, verse: u16, edition: &str) -> Result<Verse> {
        let url = format!("{}/ayah/{}:{}/{}", self.base, chapter, verse, edition);
        self.get_envelope(&url).await
    }

    /// Fetches everything displayed for one navigation step
    ///
    /// The Arabic, translation, and transliteration requests run concurrently;
    /// the bundle is assembled once all three arrive. The audio URL comes from
    /// the Arabic (audio-bearing) edition response.
    pub async fn verse_bundle(
        &self,
        chapter: u16,
        verse: u16,
        editions: &EditionSet,
    ) -> Result<VerseBundle> {
        let (arabic, translation, transliteration) = tokio::try_join!(
            self.verse(chapter, verse, &editions.arabic),
            self.verse(chapter, verse, &editions.translation),
            self.verse(chapter, verse, &editions.transliteration),
        )?;

        let audio_url = crate::audio::resolve_audio(&arabic);
        let chapter_name = arabic
            .surah
            .as_ref()
            .map(|s| s.english_name.clone())
            .unwrap_or_else(|| format!("Surah {}", chapter));

        Ok(VerseBundle {
            reference: VerseReference { chapter, verse },
            chapter_name,
            arabic,
            translation,
            transliteration,
            audio_url,
        })
    }

    /// Fetches the word-by-word breakdown for one verse
    ///
    /// This hits the separately configured word-by-word API; when none is
    /// configured the feature reports unavailable.
    pub async fn word_by_word(&self, chapter: u16, verse: u16) -> Result<Vec<WordSegment>> {
        let base = self
            .word_by_word
            .as_ref()
            .ok_or(MushafError::WordByWordUnavailable)?;
        let url = format!("{}/{}/{}", base, chapter, verse);
        self.get_json(&url).await
    }

    /// Sends a GET request and unwraps the standard `{code, status, data}` envelope
    ///
    /// The application-level code is checked before the payload is decoded:
    /// error envelopes carry `data: null`.
    async fn get_envelope<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let envelope: Envelope<serde_json::Value> = self.get_json(url).await?;

        if envelope.code != 200 {
            return Err(MushafError::Api {
                endpoint: url.to_string(),
                code: envelope.code,
                status: envelope.status,
            });
        }

        serde_json::from_value(envelope.data).map_err(|source| MushafError::Decode {
            endpoint: url.to_string(),
            source,
        })
    }

    /// Sends a GET request and decodes a JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .http
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

        response.json().await.map_err(|source| MushafError::Http {
            url: url.to_string(),
            source,
        })
    }
}
