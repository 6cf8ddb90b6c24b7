// SPDX-License-Identifier: MPL-2.0
//! Astronomy-picture-of-the-day record as published by the feed.
//!
//! The feed is loosely typed: any field may be missing, `null`, empty or of
//! an unexpected JSON type. Decoding never fails on a single field; absent
//! values simply become `None` and consumers fall back to empty output.

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};

/// Classification of a record's primary media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    Image,
    Video,
    /// Anything else, including a missing `media_type`.
    #[default]
    Other,
}

impl MediaKind {
    /// Maps the feed's `media_type` string to a kind.
    #[must_use]
    pub fn from_feed(value: Option<&str>) -> Self {
        match value {
            Some("image") => MediaKind::Image,
            Some("video") => MediaKind::Video,
            _ => MediaKind::Other,
        }
    }
}

/// One entry of the feed. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub date: Option<String>,
    pub title: Option<String>,
    pub media_kind: MediaKind,
    pub url: Option<String>,
    pub hd_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub explanation: Option<String>,
    pub copyright: Option<String>,
}

impl Record {
    /// Builds a record from one element of the feed array.
    ///
    /// Non-object elements produce a record with every field absent.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        Self {
            date: string_field(fields, "date"),
            title: string_field(fields, "title"),
            media_kind: MediaKind::from_feed(fields.get("media_type").and_then(Value::as_str)),
            url: string_field(fields, "url"),
            hd_url: string_field(fields, "hdurl"),
            thumbnail_url: string_field(fields, "thumbnail_url"),
            explanation: string_field(fields, "explanation"),
            copyright: string_field(fields, "copyright"),
        }
    }

    /// Parsed calendar date used as the sort key.
    ///
    /// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps. Returns `None` for
    /// missing or unparsable dates.
    #[must_use]
    pub fn sort_date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }

    pub fn explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or_default()
    }
}

/// Reads a non-empty string field; everything else counts as absent.
fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
