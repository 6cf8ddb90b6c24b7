// SPDX-License-Identifier: MPL-2.0
//! Remote media access and decoded image handles.

pub mod remote;

use iced::widget::image;

/// Loading state of a remote image shown in the UI.
#[derive(Debug, Clone, Default)]
pub enum RemoteImage {
    /// The image has been requested and not answered yet.
    #[default]
    Pending,
    Ready(image::Handle),
    /// No URL, or the fetch failed.
    Unavailable,
}

impl RemoteImage {
    /// Builds the state from a fetch result.
    #[must_use]
    pub fn from_fetch(result: Result<Vec<u8>, String>) -> Self {
        match result {
            Ok(bytes) => RemoteImage::Ready(image::Handle::from_bytes(bytes)),
            Err(_) => RemoteImage::Unavailable,
        }
    }
}
