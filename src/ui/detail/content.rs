// SPDX-License-Identifier: MPL-2.0
//! What the detail overlay shows for one record.

use crate::apod::{thumbnail, MediaKind, Record};

/// Wording of an external video link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLabel {
    /// "Open video in new tab", for video hosts whose id could not be read.
    OpenInNewTab,
    /// "Open video", for any other host.
    Open,
}

impl LinkLabel {
    pub fn i18n_key(self) -> &'static str {
        match self {
            LinkLabel::OpenInNewTab => "detail-open-video-new-tab",
            LinkLabel::Open => "detail-open-video",
        }
    }
}

/// Text shown in place of media.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Video record without any URL.
    VideoContent,
    /// Neither an image nor a video.
    Unsupported,
}

impl Placeholder {
    pub fn i18n_key(self) -> &'static str {
        match self {
            Placeholder::VideoContent => "detail-video-placeholder",
            Placeholder::Unsupported => "detail-media-unsupported",
        }
    }
}

/// One element of the media area, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaItem {
    Image {
        src: String,
        alt: String,
    },
    /// Embeddable video player URL, with the poster shown in its place.
    Embed {
        src: String,
        poster: Option<String>,
    },
    Link {
        href: String,
        label: LinkLabel,
    },
    Placeholder(Placeholder),
}

/// Everything the overlay displays for the open record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailContent {
    pub title: String,
    pub date: String,
    pub explanation: String,
    /// Credit holder, rendered as "Credit: {holder}" when present.
    pub credit: Option<String>,
    pub media: Vec<MediaItem>,
}

impl DetailContent {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: record.title().to_owned(),
            date: record.date().to_owned(),
            explanation: record.explanation().to_owned(),
            credit: record.copyright.clone(),
            media: media_items(record),
        }
    }

    /// Image URLs that must be downloaded to render the media area.
    #[must_use]
    pub fn image_sources(&self) -> Vec<String> {
        let mut sources: Vec<String> = Vec::new();
        for item in &self.media {
            let src = match item {
                MediaItem::Image { src, .. } => Some(src),
                MediaItem::Embed { poster, .. } => poster.as_ref(),
                MediaItem::Link { .. } | MediaItem::Placeholder(_) => None,
            };
            if let Some(src) = src.filter(|s| !s.is_empty()) {
                if !sources.contains(src) {
                    sources.push(src.clone());
                }
            }
        }
        sources
    }
}

fn media_items(record: &Record) -> Vec<MediaItem> {
    match record.media_kind {
        MediaKind::Image => vec![MediaItem::Image {
            src: record
                .hd_url
                .clone()
                .or_else(|| record.url.clone())
                .unwrap_or_default(),
            alt: record.title().to_owned(),
        }],
        MediaKind::Video => video_items(record),
        MediaKind::Other => vec![MediaItem::Placeholder(Placeholder::Unsupported)],
    }
}

fn video_items(record: &Record) -> Vec<MediaItem> {
    let Some(url) = record.url.as_deref() else {
        return vec![MediaItem::Placeholder(Placeholder::VideoContent)];
    };

    let poster = Some(thumbnail::resolve(record)).filter(|p| !p.is_empty());

    if thumbnail::is_embed_url(url) {
        return vec![MediaItem::Embed {
            src: url.to_owned(),
            poster,
        }];
    }

    if thumbnail::is_video_host(url) {
        if let Some(id) = thumbnail::video_id(url) {
            return vec![MediaItem::Embed {
                src: thumbnail::embed_url(id),
                poster,
            }];
        }
    }

    let label = if thumbnail::is_video_host(url) {
        LinkLabel::OpenInNewTab
    } else {
        LinkLabel::Open
    };

    let mut items = Vec::with_capacity(2);
    if let Some(src) = record.thumbnail_url.clone() {
        items.push(MediaItem::Image {
            src,
            alt: record.title().to_owned(),
        });
    }
    items.push(MediaItem::Link {
        href: url.to_owned(),
        label,
    });
    items
}
