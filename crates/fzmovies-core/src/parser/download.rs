//! Download chain parsers for fzmovies
//!
//! One parser per page of the download walk:
//! movie page → file page → final page.

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::error::{FzmoviesError, Result};
use crate::url::{is_media_info_link, resolve_href};

/// Name of the inputs that carry direct file URLs on the final page
pub const DIRECT_LINK_FIELD: &str = "download1";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| FzmoviesError::ParseError(format!("Invalid selector {}: {:?}", css, e)))
}

/// Picks the file page from a movie detail page
///
/// Looks at the links of the `ul.moviesfiles` list and returns the first
/// one that is not a media-info popup.
///
/// # Arguments
/// * `html` - Raw HTML of the movie detail page
/// * `base` - Site base URL used to resolve relative hrefs
///
/// # Errors
/// Returns `NoDownloadPages` if the list is missing or holds no usable link
pub fn parse_file_page(html: &str, base: &Url) -> Result<Url> {
    let document = Html::parse_document(html);
    let files = selector("ul.moviesfiles a[href]")?;

    document
        .select(&files)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| !is_media_info_link(href))
        .find_map(|href| resolve_href(base, href))
        .ok_or(FzmoviesError::NoDownloadPages)
}

/// Extracts the `#downloadlink` anchor target from a file page
///
/// # Errors
/// Returns `DownloadLinkNotFound` if the anchor is missing or has no usable href
pub fn parse_download_link(html: &str, base: &Url) -> Result<Url> {
    let document = Html::parse_document(html);
    let anchor = selector("a#downloadlink[href]")?;

    document
        .select(&anchor)
        .filter_map(|a| a.value().attr("href"))
        .find_map(|href| resolve_href(base, href))
        .ok_or(FzmoviesError::DownloadLinkNotFound)
}

/// Collects direct file URLs from the final download page
///
/// Every `<input name="download1">` carries one URL in its `value`.
/// Values keep the page order and are resolved against `base`.
///
/// An input is skipped (and logged at `debug`) when its `value` is missing,
/// empty, or resolves to something other than an http(s) URL, such as
/// `javascript:void(0)`.
///
/// # Errors
/// Returns `NoDirectLinks` if no input yields a URL
pub fn parse_direct_links(html: &str, base: &Url) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let inputs = selector(&format!(r#"input[name="{}"]"#, DIRECT_LINK_FIELD))?;

    let mut links = Vec::new();
    for input in document.select(&inputs) {
        let value = input.value().attr("value").unwrap_or_default();
        match resolve_href(base, value) {
            Some(url) => links.push(url.to_string()),
            None => debug!(value, "skipping unusable direct link input"),
        }
    }

    if links.is_empty() {
        return Err(FzmoviesError::NoDirectLinks);
    }

    Ok(links)
}
