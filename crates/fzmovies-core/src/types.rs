//! Core data types for the fzmovies scraper

use serde::{Deserialize, Serialize};

/// Placeholder shown for fields the listing did not provide
pub const UNKNOWN: &str = "Unknown";

/// A movie from the fzmovies search listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Absolute URL of the movie detail page
    pub link: String,

    /// Movie title as shown in the listing
    pub title: String,

    /// Release year (e.g., "2010")
    pub year: Option<String>,

    /// Release quality label (e.g., "BluRay", "720p")
    pub quality: Option<String>,
}

impl SearchResult {
    pub fn year_or_unknown(&self) -> &str {
        self.year.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn quality_or_unknown(&self) -> &str {
        self.quality.as_deref().unwrap_or(UNKNOWN)
    }
}

/// The hops walked from a movie page to its direct file links
///
/// Every URL is absolute. `links` holds at most five entries in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDownload {
    /// Movie detail page the walk started from
    pub movie_page: String,

    /// File page picked from the movie's files list
    pub file_page: String,

    /// Page behind the download confirmation anchor
    pub final_page: String,

    /// Direct file URLs
    pub links: Vec<String>,
}
