//! Command implementations for the fzmovies CLI
//!
//! Each command runs one pipeline and prints its outcome. Scraping
//! failures are reported as plain messages; they never abort the process.

use std::io::{self, Write};

use fzmovies_core::{FzmoviesError, FzmoviesScraper, SearchResult};
use tracing::{debug, warn};
use url::Url;

/// Printed when a search listing comes back empty
pub const NO_RESULTS: &str = "No results found";

/// Search for movies and print them as numbered entries
///
/// Output per result:
/// ```text
/// 1. Inception
///    https://www.fzmovies.host/movie-Inception--hmp4.htm
/// ```
pub async fn search<W: Write>(
    scraper: &FzmoviesScraper,
    query: &str,
    out: &mut W,
) -> io::Result<()> {
    match scraper.search(query).await {
        Ok(results) if results.is_empty() => writeln!(out, "{}", NO_RESULTS),
        Ok(results) => print_results(&results, out),
        Err(e) => report(&e, out),
    }
}

/// Resolve a movie page and print its direct links as numbered lines
pub async fn download<W: Write>(
    scraper: &FzmoviesScraper,
    movie_page: &Url,
    out: &mut W,
) -> io::Result<()> {
    match scraper.resolve(movie_page).await {
        Ok(resolved) => {
            for (i, link) in resolved.links.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, link)?;
            }
            Ok(())
        }
        Err(e) => report(&e, out),
    }
}

fn print_results<W: Write>(results: &[SearchResult], out: &mut W) -> io::Result<()> {
    for (i, result) in results.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, result.title)?;
        writeln!(out, "   {}", result.link)?;
    }
    Ok(())
}

/// Print a failure as a user-facing message
///
/// Network failures are also logged at `warn`; pages that simply had
/// nothing to offer only at `debug`.
pub fn report<W: Write>(error: &FzmoviesError, out: &mut W) -> io::Result<()> {
    if error.is_transport() {
        warn!(error = %error, "giving up on request");
    } else if error.is_not_found() {
        debug!(error = %error, "site had nothing to offer");
    }
    writeln!(out, "{}", error)
}
