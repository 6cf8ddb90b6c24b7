// SPDX-License-Identifier: MPL-2.0
//! Preview image resolution for gallery cards.
//!
//! Video records often lack an explicit thumbnail. For those, the preview is
//! derived from the video URL when it points at YouTube in one of three
//! shapes:
//!
//! - embed path: `youtube.com/embed/{id}`
//! - query parameter: `...?v={id}` or `...&v={id}`
//! - short link: `youtu.be/{id}`
//!
//! A URL matching none of them simply yields no preview.

use super::record::{MediaKind, Record};
use regex::Regex;
use std::sync::LazyLock;

/// Host prefix for derived preview images.
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Canonical embed prefix.
const EMBED_BASE: &str = "https://www.youtube.com/embed";

static EMBED_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]+)").unwrap());

static QUERY_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([a-zA-Z0-9_-]+)").unwrap());

static SHORT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be/([a-zA-Z0-9_-]+)").unwrap());

/// Returns the best available preview URL for a record, or an empty string.
#[must_use]
pub fn resolve(record: &Record) -> String {
    let preview = match record.media_kind {
        MediaKind::Image => record.url.clone().or_else(|| record.hd_url.clone()),
        MediaKind::Video => record
            .thumbnail_url
            .clone()
            .or_else(|| record.url.as_deref().and_then(youtube_thumbnail)),
        MediaKind::Other => record.url.clone(),
    };
    preview.unwrap_or_default()
}

/// Extracts a video identifier, trying embed, query and short-link shapes
/// in that order.
#[must_use]
pub fn video_id(url: &str) -> Option<&str> {
    [&*EMBED_PATH, &*QUERY_PARAM, &*SHORT_LINK]
        .into_iter()
        .find_map(|pattern| capture(pattern, url))
}

/// Extracts an identifier from the query-parameter shape only.
#[must_use]
pub fn watch_id(url: &str) -> Option<&str> {
    capture(&QUERY_PARAM, url)
}

/// Whether the URL is already in embed form.
#[must_use]
pub fn is_embed_url(url: &str) -> bool {
    url.contains("youtube.com/embed")
}

/// Whether the URL points at a recognized video host.
#[must_use]
pub fn is_video_host(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// Preview image derived from a video URL.
#[must_use]
pub fn youtube_thumbnail(url: &str) -> Option<String> {
    video_id(url).map(|id| format!("{THUMBNAIL_BASE}/{id}/hqdefault.jpg"))
}

/// Canonical embed URL for a video identifier.
#[must_use]
pub fn embed_url(id: &str) -> String {
    format!("{EMBED_BASE}/{id}")
}

fn capture<'a>(pattern: &Regex, url: &'a str) -> Option<&'a str> {
    pattern
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(url: Option<&str>, thumbnail: Option<&str>) -> Record {
        Record {
            media_kind: MediaKind::Video,
            url: url.map(str::to_owned),
            thumbnail_url: thumbnail.map(str::to_owned),
            ..Record::default()
        }
    }

    #[test]
    fn all_three_shapes_yield_the_same_id() {
        assert_eq!(video_id("https://www.youtube.com/embed/abc123"), Some("abc123"));
        assert_eq!(video_id("https://www.youtube.com/watch?v=abc123"), Some("abc123"));
        assert_eq!(video_id("https://youtu.be/abc123"), Some("abc123"));
    }

    #[test]
    fn embed_id_stops_at_query_string() {
        assert_eq!(
            video_id("https://www.youtube.com/embed/abc_12-3?rel=0"),
            Some("abc_12-3")
        );
    }

    #[test]
    fn query_parameter_may_follow_other_parameters() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?feature=share&v=xyz"),
            Some("xyz")
        );
    }

    #[test]
    fn unrecognized_urls_yield_nothing() {
        assert_eq!(video_id("https://vimeo.com/123456"), None);
        assert_eq!(video_id("not a url at all"), None);
        assert_eq!(video_id(""), None);
        assert_eq!(youtube_thumbnail("https://example.com/video.mp4"), None);
    }

    #[test]
    fn image_prefers_url_then_hd_url() {
        let mut record = Record {
            media_kind: MediaKind::Image,
            url: Some("small.jpg".into()),
            hd_url: Some("large.jpg".into()),
            ..Record::default()
        };
        assert_eq!(resolve(&record), "small.jpg");

        record.url = None;
        assert_eq!(resolve(&record), "large.jpg");

        record.hd_url = None;
        assert_eq!(resolve(&record), "");
    }

    #[test]
    fn video_prefers_explicit_thumbnail() {
        let record = video(
            Some("https://www.youtube.com/embed/abc123"),
            Some("https://example.com/thumb.jpg"),
        );
        assert_eq!(resolve(&record), "https://example.com/thumb.jpg");
    }

    #[test]
    fn video_derives_thumbnail_from_url() {
        let record = video(Some("https://www.youtube.com/embed/abc123?rel=0"), None);
        assert_eq!(
            resolve(&record),
            "https://img.youtube.com/vi/abc123/hqdefault.jpg"
        );
    }

    #[test]
    fn video_without_recognizable_url_is_empty() {
        assert_eq!(resolve(&video(Some("https://vimeo.com/1"), None)), "");
        assert_eq!(resolve(&video(None, None)), "");
    }

    #[test]
    fn other_kind_falls_back_to_url() {
        let record = Record {
            url: Some("https://example.com/page.html".into()),
            ..Record::default()
        };
        assert_eq!(resolve(&record), "https://example.com/page.html");
    }

    #[test]
    fn resolve_never_fails_on_empty_record() {
        assert_eq!(resolve(&Record::default()), "");
        for kind in [MediaKind::Image, MediaKind::Video, MediaKind::Other] {
            let record = Record {
                media_kind: kind,
                ..Record::default()
            };
            assert_eq!(resolve(&record), "");
        }
    }

    #[test]
    fn host_checks() {
        assert!(is_embed_url("https://www.youtube.com/embed/abc"));
        assert!(!is_embed_url("https://www.youtube.com/watch?v=abc"));
        assert!(is_video_host("https://youtu.be/abc"));
        assert!(!is_video_host("https://vimeo.com/abc"));
        assert_eq!(embed_url("abc"), "https://www.youtube.com/embed/abc");
        assert_eq!(watch_id("https://youtu.be/abc"), None);
    }
}
