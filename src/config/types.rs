use serde::Deserialize;

/// Main configuration structure for Mushaf
///
/// Every section has sensible built-in defaults (the public alquran.cloud
/// endpoints and editions), so the reader runs without a config file at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub prefs: PrefsConfig,
}

/// Remote API endpoints and edition identifiers
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Quran text/audio REST API
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Base URL of the word-by-word breakdown API (feature is disabled when absent)
    #[serde(rename = "word-by-word-url", default)]
    pub word_by_word_url: Option<String>,

    /// Edition identifier for the Arabic (audio-bearing) text
    #[serde(rename = "arabic-edition", default = "default_arabic_edition")]
    pub arabic_edition: String,

    /// Edition identifier for the translation
    #[serde(rename = "translation-edition", default = "default_translation_edition")]
    pub translation_edition: String,

    /// Edition identifier for the transliteration
    #[serde(
        rename = "transliteration-edition",
        default = "default_transliteration_edition"
    )]
    pub transliteration_edition: String,
}

/// HTTP client identification and timeouts
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Name sent in the User-Agent header
    #[serde(rename = "reader-name", default = "default_reader_name")]
    pub reader_name: String,

    /// Version sent in the User-Agent header
    #[serde(rename = "reader-version", default = "default_reader_version")]
    pub reader_version: String,

    /// Overall request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// Audio playback hand-off configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AudioConfig {
    /// External player command to hand recitation URLs to (e.g. "mpv --no-video").
    /// When absent, the `play` command prints the URL instead.
    #[serde(rename = "player-command", default)]
    pub player_command: Option<String>,
}

/// Preference persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PrefsConfig {
    /// Path of the TOML file holding the persisted theme flag
    #[serde(default = "default_prefs_path")]
    pub path: String,
}

fn default_base_url() -> String {
    "https://api.alquran.cloud/v1".to_string()
}

fn default_arabic_edition() -> String {
    "ar.alafasy".to_string()
}

fn default_translation_edition() -> String {
    "en.sahih".to_string()
}

fn default_transliteration_edition() -> String {
    "en.transliteration".to_string()
}

fn default_reader_name() -> String {
    "mushaf".to_string()
}

fn default_reader_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_prefs_path() -> String {
    "./mushaf-prefs.toml".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            word_by_word_url: None,
            arabic_edition: default_arabic_edition(),
            translation_edition: default_translation_edition(),
            transliteration_edition: default_transliteration_edition(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            reader_name: default_reader_name(),
            reader_version: default_reader_version(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self {
            path: default_prefs_path(),
        }
    }
}
