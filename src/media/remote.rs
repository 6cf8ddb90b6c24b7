// SPDX-License-Identifier: MPL-2.0
//! HTTP access for the feed and the media it references.

use crate::error::{Error, Result};
use std::time::Duration;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("ApodGallery/", env!("CARGO_PKG_VERSION"));

/// Builds the client shared by the feed loader and image fetches.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Downloads the raw bytes of an image.
///
/// Errors are flattened to strings so results can travel inside UI messages.
pub async fn fetch_image(client: reqwest::Client, url: String) -> std::result::Result<Vec<u8>, String> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::from(e).to_string())?;

    if !response.status().is_success() {
        return Err(format!("HTTP status: {}", response.status()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::from(e).to_string())?;
    Ok(bytes.to_vec())
}

/// Hands a URL to the system browser.
pub fn open_in_browser(url: &str) -> Result<()> {
    webbrowser::open(url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_timeout() {
        assert!(build_client(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn user_agent_names_the_app() {
        assert!(USER_AGENT.starts_with("ApodGallery/"));
    }
}
