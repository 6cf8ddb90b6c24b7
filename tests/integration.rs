// SPDX-License-Identifier: MPL-2.0
//! End-to-end flow through the gallery and the detail overlay, without a
//! window or a network.

use apod_gallery::apod::feed;
use apod_gallery::config::{self, Config};
use apod_gallery::i18n::fluent::I18n;
use apod_gallery::ui::detail::{self, MediaItem};
use apod_gallery::ui::gallery::{self, Effect};
use tempfile::tempdir;

const FEED: &str = r#"[
    {"date": "2024-01-01", "title": "A", "media_type": "image",
     "url": "https://example.com/a.jpg"},
    {"date": "2024-01-02", "title": "B", "media_type": "image",
     "url": "https://example.com/b.jpg", "hdurl": "https://example.com/b_hd.jpg",
     "explanation": "Second picture.", "copyright": "Jane Doe"}
]"#;

fn loaded_gallery() -> gallery::State {
    let records = feed::decode(FEED.as_bytes()).expect("feed decodes");
    let mut state = gallery::State::new(3);
    assert_eq!(
        state.handle_message(gallery::Message::FetchRequested),
        Effect::StartLoad
    );
    state.handle_message(gallery::Message::FeedLoaded(Ok(records)));
    state
}

#[test]
fn feed_renders_newest_card_first() {
    let gallery = loaded_gallery();

    assert!(!gallery.is_busy());
    let dates: Vec<_> = gallery.cards().iter().map(|c| c.date.as_str()).collect();
    assert_eq!(dates, ["2024-01-02", "2024-01-01"]);
    assert_eq!(gallery.cards()[0].title.as_deref(), Some("B"));
}

#[test]
fn activating_a_card_opens_its_detail_and_closing_clears_media() {
    let mut gallery = loaded_gallery();
    let Effect::OpenDetail(record) = gallery.handle_message(gallery::Message::CardActivated(0))
    else {
        panic!("card activation should open the detail");
    };

    let mut overlay = detail::State::new();
    let sources = overlay.open(&record);

    assert!(overlay.is_open());
    let content = overlay.content();
    assert_eq!(content.title, "B");
    assert_eq!(content.date, "2024-01-02");
    assert_eq!(content.explanation, "Second picture.");
    assert_eq!(content.credit.as_deref(), Some("Jane Doe"));
    assert_eq!(
        content.media,
        [MediaItem::Image {
            src: "https://example.com/b_hd.jpg".into(),
            alt: "B".into(),
        }]
    );
    assert_eq!(sources, ["https://example.com/b_hd.jpg"]);

    overlay.handle_message(detail::Message::CloseRequested);
    assert!(!overlay.is_open());
    assert!(overlay.content().media.is_empty());
}

#[test]
fn failed_load_leaves_no_cards() {
    let mut gallery = loaded_gallery();
    gallery.handle_message(gallery::Message::FetchRequested);

    let err = feed::decode(br#"{"error": "rate limited"}"#).expect_err("object is rejected");
    gallery.handle_message(gallery::Message::FeedLoaded(Err(err)));

    assert!(gallery.cards().is_empty());
    assert!(matches!(gallery.surface(), gallery::Surface::Failed(_)));
}

#[test]
fn language_from_config_file_is_applied() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    // CLI language wins over the file
    let i18n = I18n::new(Some("en-US".into()), &loaded);
    assert_eq!(i18n.tr("detail-close"), "Close");

    let (defaults, warning) = config::load_with_override(Some(dir.path().join("missing")));
    assert_eq!(defaults, Config::default());
    assert!(warning.is_none());
}
