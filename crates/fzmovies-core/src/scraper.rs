//! Main scraper API for fzmovies
//!
//! Provides the high-level API combining the HTTP client and parsers.

use tracing::{debug, info};
use url::Url;

use crate::client::{ClientConfig, FzmoviesClient};
use crate::error::{FzmoviesError, Result};
use crate::mode::Mode;
use crate::parser::form::SEARCH_FIELD;
use crate::parser::{
    parse_direct_links, parse_download_link, parse_file_page, parse_search_form,
    parse_search_results,
};
use crate::types::{ResolvedDownload, SearchResult};

/// Most search results returned per query
pub const MAX_RESULTS: usize = 5;

/// Most direct links returned per movie
pub const MAX_DIRECT_LINKS: usize = 5;

/// Main scraper API for fzmovies
///
/// Owns the HTTP session and walks the site one page at a time.
pub struct FzmoviesScraper {
    client: FzmoviesClient,
}

impl FzmoviesScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = FzmoviesClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = FzmoviesClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Site root the scraper resolves links against
    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    /// Classifies an input against this scraper's site
    pub fn classify(&self, input: &str) -> Result<Mode> {
        Mode::classify(input, self.client.base_url())
    }

    /// Search for movies by query
    ///
    /// Opens the homepage, fills the search form and parses the listing.
    ///
    /// # Returns
    /// Up to [`MAX_RESULTS`] results in site order, empty if nothing matched
    ///
    /// # Errors
    /// - `InvalidQuery` if query is empty or whitespace only
    /// - `ElementNotFound` if the homepage has no search form
    /// - `HttpError` / `HttpStatus` if a request fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> fzmovies_core::Result<()> {
    /// use fzmovies_core::FzmoviesScraper;
    /// let scraper = FzmoviesScraper::new()?;
    /// for movie in scraper.search("inception").await? {
    ///     println!("{} ({}): {}", movie.title, movie.year_or_unknown(), movie.link);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(FzmoviesError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let home = self.client.base_url();
        let html = self.client.fetch(home).await?;

        let mut form = parse_search_form(&html, home)?;
        form.set_field(SEARCH_FIELD, trimmed);

        let html = self.client.submit(&form).await?;
        let results = shortlist(&html, home)?;
        debug!(query = trimmed, kept = results.len(), "parsed search listing");

        for result in &results {
            debug!(
                title = %result.title,
                year = result.year_or_unknown(),
                quality = result.quality_or_unknown(),
                link = %result.link,
                "search result"
            );
        }

        Ok(results)
    }

    /// Walk a movie page down to its direct file links
    ///
    /// Follows movie page → file page → final page, resolving each
    /// extracted href against the site root before fetching it.
    ///
    /// # Arguments
    /// * `movie_page` - Absolute URL of a movie detail page
    ///
    /// # Returns
    /// The pages visited and up to [`MAX_DIRECT_LINKS`] direct links
    ///
    /// # Errors
    /// - `NoDownloadPages` if the movie page lists no file page
    /// - `DownloadLinkNotFound` if the file page has no download anchor
    /// - `NoDirectLinks` if the final page has no direct link inputs
    /// - `HttpError` / `HttpStatus` if a request fails
    pub async fn resolve(&self, movie_page: &Url) -> Result<ResolvedDownload> {
        let base = self.client.base_url();

        let html = self.client.fetch(movie_page).await?;
        let file_page = parse_file_page(&html, base)?;
        debug!(%file_page, "found file page");

        let html = self.client.fetch(&file_page).await?;
        let final_page = parse_download_link(&html, base)?;
        debug!(%final_page, "found download link");

        let html = self.client.fetch(&final_page).await?;
        let mut links = parse_direct_links(&html, base)?;
        links.truncate(MAX_DIRECT_LINKS);
        info!(count = links.len(), "resolved direct links");

        Ok(ResolvedDownload {
            movie_page: movie_page.to_string(),
            file_page: file_page.to_string(),
            final_page: final_page.to_string(),
            links,
        })
    }

    /// Get direct file links for a movie page given as a string
    ///
    /// # Errors
    /// - `InvalidUrl` if `movie_page` is not a URL on this site
    /// - everything [`FzmoviesScraper::resolve`] returns
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> fzmovies_core::Result<()> {
    /// use fzmovies_core::FzmoviesScraper;
    /// let scraper = FzmoviesScraper::new()?;
    /// let links = scraper
    ///     .get_direct_links("https://www.fzmovies.host/movie-Inception--hmp4.htm")
    ///     .await?;
    /// for link in links {
    ///     println!("{}", link);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_direct_links(&self, movie_page: &str) -> Result<Vec<String>> {
        match self.classify(movie_page)? {
            Mode::Download(url) => Ok(self.resolve(&url).await?.links),
            Mode::Search(_) => Err(FzmoviesError::InvalidUrl(format!(
                "{} is not a page on {}",
                movie_page.trim(),
                self.base_url()
            ))),
        }
    }
}

/// The first [`MAX_RESULTS`] distinct results of a listing page
fn shortlist(html: &str, base: &Url) -> Result<Vec<SearchResult>> {
    let mut results = parse_search_results(html, base)?;
    results.truncate(MAX_RESULTS);
    Ok(results)
}
