// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Network(String),
}

/// Reasons a feed load can fail.
///
/// Every variant ends the current load attempt; the gallery shows a single
/// inline message and the user has to trigger a new load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request failed or completed with a non-success status.
    Transport(String),

    /// The body could not be decoded as JSON.
    Decode(String),

    /// The decoded payload is not a sequence of records.
    Shape(String),
}

impl LoadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadError::Transport(_) => "error-load-feed-transport",
            LoadError::Decode(_) => "error-load-feed-decode",
            LoadError::Shape(_) => "error-load-feed-shape",
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(msg) => write!(f, "Transport error: {}", msg),
            LoadError::Decode(msg) => write!(f, "Invalid JSON: {}", msg),
            LoadError::Shape(msg) => write!(f, "Unexpected payload: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn load_error_i18n_keys() {
        assert_eq!(
            LoadError::Transport("HTTP 500".into()).i18n_key(),
            "error-load-feed-transport"
        );
        assert_eq!(
            LoadError::Decode("eof".into()).i18n_key(),
            "error-load-feed-decode"
        );
        assert_eq!(
            LoadError::Shape("object".into()).i18n_key(),
            "error-load-feed-shape"
        );
    }

    #[test]
    fn transport_error_display_keeps_status() {
        let err = LoadError::Transport("HTTP 404 Not Found".into());
        assert!(format!("{}", err).contains("404"));
    }
}
