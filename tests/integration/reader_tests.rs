//! Integration tests for the reader
//!
//! These tests use wiremock to stand in for the remote Quran API and drive
//! the controller end-to-end: chapter list loading, the per-verse fetch
//! fan-out, navigation bounds, and failure surfacing.

use std::path::Path;

use mushaf::config::Config;
use mushaf::prefs::{Preferences, Theme};
use mushaf::{MushafError, ReaderController};
use tempfile::TempDir;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a config pointing at the mock server, with prefs in a temp dir
fn test_config(server: &MockServer, dir: &Path) -> Config {
    let mut config = Config::default();
    config.api.base_url = format!("{}/v1", server.uri());
    config.prefs.path = dir.join("prefs.toml").display().to_string();
    config
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "code": 200,
        "status": "OK",
        "data": data
    })
}

fn chapter_json(
    number: u16,
    english_name: &str,
    name: &str,
    translation: &str,
    ayahs: u16,
) -> serde_json::Value {
    serde_json::json!({
        "number": number,
        "name": name,
        "englishName": english_name,
        "englishNameTranslation": translation,
        "numberOfAyahs": ayahs,
        "revelationType": "Meccan"
    })
}

/// Mounts the chapter list: chapter 1 with 7 verses, chapter 2 with 3
async fn mount_chapter_list(server: &MockServer) {
    let chapters = serde_json::json!([
        chapter_json(1, "Al-Faatiha", "سورة الفاتحة", "The Opening", 7),
        chapter_json(2, "Al-Baqarah", "سورة البقرة", "The Cow", 3),
    ]);

    Mock::given(method("GET"))
        .and(path("/v1/surah"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(chapters)))
        .mount(server)
        .await;
}

/// Mounts a specific verse for one edition
async fn mount_verse(
    server: &MockServer,
    chapter: u16,
    verse: u16,
    edition: &str,
    text: &str,
    audio: Option<&str>,
) {
    let (english_name, ayahs) = if chapter == 1 {
        ("Al-Faatiha", 7)
    } else {
        ("Al-Baqarah", 3)
    };
    let mut body = serde_json::json!({
        "number": 1,
        "text": text,
        "numberInSurah": verse,
        "surah": {
            "number": chapter,
            "name": "سورة الفاتحة",
            "englishName": english_name,
            "numberOfAyahs": ayahs
        }
    });
    if let Some(url) = audio {
        body["audio"] = serde_json::json!(url);
    }

    Mock::given(method("GET"))
        .and(path(format!("/v1/ayah/{}:{}/{}", chapter, verse, edition)))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(body)))
        .mount(server)
        .await;
}

/// Mounts catch-all verse responses for all three default editions
async fn mount_generic_verses(server: &MockServer) {
    for (edition, text) in [
        (r"ar\.alafasy", "عربي"),
        (r"en\.sahih", "english translation"),
        (r"en\.transliteration", "transliteration"),
    ] {
        Mock::given(method("GET"))
            .and(path_regex(format!(r"^/v1/ayah/\d+:\d+/{}$", edition)))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
                "number": 1,
                "text": text,
                "numberInSurah": 1
            }))))
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn test_chapter_list_loaded_at_startup() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;

    let controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .expect("controller creation failed");

    let chapters = controller.chapters();
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].english_name, "Al-Faatiha");
    assert_eq!(chapters[1].number_of_ayahs, 3);

    // Fresh controller: cursor at (1, 1), nothing displayed yet
    assert_eq!(controller.cursor().chapter(), 1);
    assert_eq!(controller.cursor().verse(), 1);
    assert!(controller.current().is_none());
}

#[tokio::test]
async fn test_verse_bundle_fans_out_three_editions() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;
    mount_verse(
        &server,
        1,
        1,
        "ar.alafasy",
        "بِسْمِ اللَّهِ",
        Some("https://cdn.example.com/1.mp3"),
    )
    .await;
    mount_verse(&server, 1, 1, "en.sahih", "In the name of Allah", None).await;
    mount_verse(&server, 1, 1, "en.transliteration", "Bismi Allahi", None).await;

    let mut controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();
    controller.refresh().await.expect("refresh failed");

    let bundle = controller.current().expect("no bundle displayed");
    assert_eq!(bundle.reference.to_string(), "1:1");
    assert_eq!(bundle.chapter_name, "Al-Faatiha");
    assert_eq!(bundle.arabic.text, "بِسْمِ اللَّهِ");
    assert_eq!(bundle.translation.text, "In the name of Allah");
    assert_eq!(bundle.transliteration.text, "Bismi Allahi");
    assert_eq!(
        bundle.audio_url.as_deref(),
        Some("https://cdn.example.com/1.mp3")
    );
    assert_eq!(controller.audio_url(), Some("https://cdn.example.com/1.mp3"));
}

#[tokio::test]
async fn test_next_verse_stops_at_chapter_end() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;
    mount_generic_verses(&server).await;

    let mut controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();

    // Chapter 2 has 3 verses; jump to the last one
    controller.goto(2, 3).await.unwrap();
    assert!(!controller.can_advance());

    let moved = controller.next_verse().await.unwrap();
    assert!(!moved);
    assert_eq!(controller.cursor().chapter(), 2);
    assert_eq!(controller.cursor().verse(), 3);
}

#[tokio::test]
async fn test_previous_verse_stops_at_first() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;
    mount_generic_verses(&server).await;

    let mut controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();

    assert!(!controller.can_rewind());
    let moved = controller.previous_verse().await.unwrap();
    assert!(!moved);
    assert_eq!(controller.cursor().verse(), 1);
}

#[tokio::test]
async fn test_navigation_walks_and_refetches() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;
    mount_generic_verses(&server).await;

    let mut controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();
    controller.select_chapter(2).await.unwrap();

    // 2:1 -> 2:2 -> 2:3, then bounded
    assert!(controller.next_verse().await.unwrap());
    assert!(controller.next_verse().await.unwrap());
    assert!(!controller.next_verse().await.unwrap());
    assert_eq!(controller.cursor().to_string(), "2:3");

    // Each successful transition replaced the displayed bundle
    let bundle = controller.current().expect("no bundle displayed");
    assert_eq!(bundle.reference.to_string(), "2:3");

    // And back down to the first verse
    assert!(controller.previous_verse().await.unwrap());
    assert!(controller.previous_verse().await.unwrap());
    assert!(!controller.previous_verse().await.unwrap());
    assert_eq!(controller.cursor().to_string(), "2:1");
}

#[tokio::test]
async fn test_select_chapter_resets_cursor() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;
    mount_generic_verses(&server).await;

    let mut controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();

    controller.goto(1, 5).await.unwrap();
    assert_eq!(controller.cursor().to_string(), "1:5");

    controller.select_chapter(2).await.unwrap();
    assert_eq!(controller.cursor().to_string(), "2:1");
    assert_eq!(
        controller.current().unwrap().reference.to_string(),
        "2:1"
    );
}

#[tokio::test]
async fn test_unknown_chapter_rejected() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;

    let mut controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();

    let result = controller.select_chapter(99).await;
    assert!(matches!(
        result,
        Err(MushafError::UnknownChapter { chapter: 99 })
    ));
    // Cursor unchanged
    assert_eq!(controller.cursor().to_string(), "1:1");
}

#[tokio::test]
async fn test_goto_out_of_range_rejected() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;

    let mut controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();

    let result = controller.goto(2, 10).await;
    assert!(matches!(
        result,
        Err(MushafError::VerseOutOfRange {
            chapter: 2,
            verse: 10,
            max: 3
        })
    ));
    assert_eq!(controller.cursor().to_string(), "1:1");
}

#[tokio::test]
async fn test_fetch_failure_clears_display() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;
    mount_verse(&server, 1, 1, "ar.alafasy", "عربي", None).await;
    mount_verse(&server, 1, 1, "en.sahih", "translation", None).await;
    mount_verse(&server, 1, 1, "en.transliteration", "transliteration", None).await;

    let mut controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();
    controller.refresh().await.unwrap();
    assert!(controller.current().is_some());

    // Verse 1:2 has no mocks, so the fan-out fails (HTTP 404 from wiremock)
    let result = controller.next_verse().await;
    assert!(result.is_err());
    assert!(controller.current().is_none());

    // The cursor still moved; a retry of the same position is a plain refresh
    assert_eq!(controller.cursor().to_string(), "1:2");
}

#[tokio::test]
async fn test_api_level_error_code_surfaces() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;

    // HTTP 200 but application-level failure in the envelope
    Mock::given(method("GET"))
        .and(path_regex(r"^/v1/ayah/.*$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 404,
            "status": "Surah not found",
            "data": null
        })))
        .mount(&server)
        .await;

    let mut controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();

    let result = controller.refresh().await;
    match result {
        Err(MushafError::Api { code, .. }) => assert_eq!(code, 404),
        other => panic!("expected API error, got {:?}", other),
    }
    assert!(controller.current().is_none());
}

#[tokio::test]
async fn test_word_by_word_breakdown() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;

    Mock::given(method("GET"))
        .and(path("/words/1/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"position": 1, "arabic": "بِسْمِ", "translation": "In the name", "transliteration": "bismi"},
            {"position": 2, "arabic": "اللَّهِ", "translation": "of Allah", "transliteration": "allahi"}
        ])))
        .mount(&server)
        .await;

    let mut config = test_config(&server, dir.path());
    config.api.word_by_word_url = Some(format!("{}/words", server.uri()));

    let controller = ReaderController::new(&config).await.unwrap();
    let segments = controller.word_by_word().await.unwrap();

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].transliteration, "bismi");
    assert_eq!(segments[1].translation, "of Allah");
}

#[tokio::test]
async fn test_word_by_word_unconfigured() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;

    let controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();

    let result = controller.word_by_word().await;
    assert!(matches!(result, Err(MushafError::WordByWordUnavailable)));
}

#[tokio::test]
async fn test_theme_toggle_persists() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;

    let config = test_config(&server, dir.path());
    let mut controller = ReaderController::new(&config).await.unwrap();

    assert_eq!(controller.theme(), Theme::Light);
    let theme = controller.toggle_theme().unwrap();
    assert_eq!(theme, Theme::Dark);

    // The flag survives outside the controller
    let prefs = Preferences::load(Path::new(&config.prefs.path)).unwrap();
    assert_eq!(prefs.theme, Theme::Dark);

    // And a new controller picks it up
    let controller = ReaderController::new(&config).await.unwrap();
    assert_eq!(controller.theme(), Theme::Dark);
}

#[tokio::test]
async fn test_search_filters_chapters() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;

    let controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();

    let matches = controller.search("cow");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].english_name, "Al-Baqarah");

    assert_eq!(controller.search("").len(), 2);
    assert!(controller.search("zzz").is_empty());
}

#[tokio::test]
async fn test_audio_download() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let body = vec![0x49, 0x44, 0x33, 0x04]; // ID3 header
    Mock::given(method("GET"))
        .and(path("/audio/1.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let target = dir.path().join("verse.mp3");
    let bytes = mushaf::audio::download(
        &client,
        &format!("{}/audio/1.mp3", server.uri()),
        &target,
    )
    .await
    .unwrap();

    assert_eq!(bytes, 4);
    assert_eq!(std::fs::read(&target).unwrap(), body);
}

#[tokio::test]
async fn test_set_translation_refetches() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_chapter_list(&server).await;
    mount_generic_verses(&server).await;
    mount_verse(&server, 1, 1, "en.pickthall", "In the name of Allah, the Beneficent", None).await;

    let mut controller = ReaderController::new(&test_config(&server, dir.path()))
        .await
        .unwrap();
    controller.refresh().await.unwrap();

    controller
        .set_translation("en.pickthall".to_string())
        .await
        .unwrap();

    let bundle = controller.current().expect("no bundle displayed");
    assert_eq!(
        bundle.translation.text,
        "In the name of Allah, the Beneficent"
    );
}
