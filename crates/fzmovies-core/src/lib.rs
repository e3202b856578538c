//! fzmovies Scraper Core Library
//!
//! Provides an async API for searching movies and resolving direct download
//! links on fzmovies.
//!
//! # Overview
//!
//! - [`Mode`] decides whether an input is a search query or a movie page
//! - [`FzmoviesScraper::search`] submits the homepage search form and parses the listing
//! - [`FzmoviesScraper::resolve`] walks movie page → file page → final page
//!   and collects the direct file URLs
//!
//! Pages are fetched strictly one after another through a single
//! [`FzmoviesClient`] session; nothing is cached or retried.
//!
//! # Example
//!
//! ```no_run
//! use fzmovies_core::{FzmoviesScraper, Mode, Result};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let scraper = FzmoviesScraper::new()?;
//!
//!     match scraper.classify("inception")? {
//!         Mode::Search(query) => {
//!             for movie in scraper.search(&query).await? {
//!                 println!("{}: {}", movie.title, movie.link);
//!             }
//!         }
//!         Mode::Download(url) => {
//!             for link in scraper.resolve(&url).await?.links {
//!                 println!("{}", link);
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod mode;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use crate::client::{ClientConfig, FzmoviesClient};

// Re-export error types
pub use crate::error::{FzmoviesError, Result};

// Re-export mode selection
pub use crate::mode::Mode;

// Re-export parser functions
pub use crate::parser::{
    parse_direct_links, parse_download_link, parse_file_page, parse_search_form,
    parse_search_results,
};

// Re-export main scraper API
pub use crate::scraper::{FzmoviesScraper, MAX_DIRECT_LINKS, MAX_RESULTS};

// Re-export data types
pub use crate::types::{ResolvedDownload, SearchResult, UNKNOWN};
