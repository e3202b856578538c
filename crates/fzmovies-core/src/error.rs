//! Error types for the fzmovies scraper
//!
//! Separates transport failures (network, status codes) from the
//! "nothing to scrape here" outcomes of the download resolver.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all fzmovies scraper operations
///
/// Implements Display for human-readable messages and Serialize
/// so callers can forward errors as plain strings.
#[derive(Error, Debug)]
pub enum FzmoviesError {
    /// HTTP request failed (DNS, connect, timeout, body)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Expected HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Query rejected before any request was made
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Movie page has no usable entry in its files list
    #[error("No download pages found")]
    NoDownloadPages,

    /// Confirmation page has no download anchor
    #[error("Download link not found")]
    DownloadLinkNotFound,

    /// Final page has no direct link inputs
    #[error("No direct links found")]
    NoDirectLinks,
}

impl FzmoviesError {
    /// True for outcomes where the site simply had nothing to offer
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FzmoviesError::ElementNotFound(_)
                | FzmoviesError::NoDownloadPages
                | FzmoviesError::DownloadLinkNotFound
                | FzmoviesError::NoDirectLinks
        )
    }

    /// True for network level failures
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FzmoviesError::HttpError(_) | FzmoviesError::HttpStatus { .. }
        )
    }
}

impl Serialize for FzmoviesError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for fzmovies operations
pub type Result<T> = std::result::Result<T, FzmoviesError>;
