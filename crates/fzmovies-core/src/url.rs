//! URL helper functions for fzmovies
//!
//! Provides the site base URL and the joining rules every scraped href
//! goes through before it is fetched or printed.

use url::Url;

use crate::error::{FzmoviesError, Result};

/// Default site root; hrefs on every page are resolved against it
pub const BASE_URL: &str = "https://www.fzmovies.host/";

/// Path fragment of the media-info popup listed next to movie files
const MEDIA_INFO_ENDPOINT: &str = "mediainfo.php";

/// Path fragment of the tag listing pages mixed into search results
const TAGS_ENDPOINT: &str = "movietags";

/// Parses a base URL, making sure relative joins land under it
///
/// A base without a trailing slash would drop its last path segment
/// on join, so one is appended.
///
/// # Example
/// ```
/// use fzmovies_core::url::parse_base_url;
/// let base = parse_base_url("http://127.0.0.1:8080").unwrap();
/// assert_eq!(base.as_str(), "http://127.0.0.1:8080/");
/// ```
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut base = Url::parse(raw.trim())
        .map_err(|e| FzmoviesError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
        return Err(FzmoviesError::InvalidUrl(format!(
            "{}: expected an http(s) URL with a host",
            raw
        )));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    Ok(base)
}

/// Resolves a scraped href against the base URL
///
/// Relative, root-relative and scheme-relative hrefs are all accepted.
/// Returns `None` for empty hrefs and for non-HTTP targets such as
/// `javascript:` or `mailto:` links.
///
/// # Example
/// ```
/// use fzmovies_core::url::{parse_base_url, resolve_href};
/// let base = parse_base_url("https://www.fzmovies.host/").unwrap();
/// let url = resolve_href(&base, "movie-Inception--hmp4.htm").unwrap();
/// assert_eq!(url.as_str(), "https://www.fzmovies.host/movie-Inception--hmp4.htm");
/// ```
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let url = base.join(href).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

/// Returns the parsed URL if `input` points at the scraped site
///
/// The host must equal the base host or be a subdomain of it; a
/// leading `www.` is ignored on both sides.
///
/// # Example
/// ```
/// use fzmovies_core::url::{parse_base_url, parse_site_url};
/// let base = parse_base_url("https://www.fzmovies.host/").unwrap();
/// assert!(parse_site_url("https://fzmovies.host/movie-Up--hmp4.htm", &base).is_some());
/// assert!(parse_site_url("https://example.com/", &base).is_none());
/// assert!(parse_site_url("inception", &base).is_none());
/// ```
pub fn parse_site_url(input: &str, base: &Url) -> Option<Url> {
    let url = Url::parse(input.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = site_domain(url.host_str()?);
    let site = site_domain(base.host_str()?);

    if host.eq_ignore_ascii_case(site)
        || host
            .to_ascii_lowercase()
            .ends_with(&format!(".{}", site.to_ascii_lowercase()))
    {
        Some(url)
    } else {
        None
    }
}

/// Strips a leading `www.` from a host name
fn site_domain(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Checks if an href targets the media-info popup rather than a file page
pub fn is_media_info_link(href: &str) -> bool {
    href.contains(MEDIA_INFO_ENDPOINT)
}

/// Checks if an href targets a tag listing rather than a movie
pub fn is_tags_link(href: &str) -> bool {
    href.contains(TAGS_ENDPOINT)
}
