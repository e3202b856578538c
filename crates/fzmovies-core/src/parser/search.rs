//! Search results parser for fzmovies
//!
//! Parses the listing returned by the search form. Each result lives in a
//! `div.mainbox` block; title, year and quality are picked by what the text
//! looks like rather than by its position in the block.

use std::collections::HashSet;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{FzmoviesError, Result};
use crate::types::{SearchResult, UNKNOWN};
use crate::url::{is_tags_link, resolve_href};

const YEAR_PATTERN: &str = r"\b(19\d{2}|20\d{2})\b";

const QUALITY_PATTERN: &str = r"(?i)\b(blu-?ray|brrip|bdrip|web-?dl|web-?rip|hd-?rip|dvd-?rip|dvd-?scr|hdtv|hd-?cam|hd-?ts|cam-?rip|telesync|\d{3,4}p|4k)\b";

// "CAM" and "TS" are ordinary words too; they only count when they stand alone
const BARE_QUALITY_PATTERN: &str = r"(?i)^[(\[]?(cam|ts)[)\]]?$";

/// Labels whose value is a release quality, as in `Quality: DVDRip`
const QUALITY_LABELS: [&str; 3] = ["quality", "format", "source"];

/// Parses search results HTML and returns the listed movies
///
/// Results keep the page order. A link listed twice is kept only at its
/// first position; tag listing links and blocks without a usable link
/// are skipped.
///
/// # Arguments
/// * `html` - Raw HTML string from the search results page
/// * `base` - Site base URL used to resolve relative hrefs
///
/// # Returns
/// Vector of `SearchResult`, empty if the page lists nothing
pub fn parse_search_results(html: &str, base: &Url) -> Result<Vec<SearchResult>> {
    let document = Html::parse_document(html);
    let box_selector = Selector::parse("div.mainbox")
        .map_err(|e| FzmoviesError::ParseError(format!("Invalid selector: {:?}", e)))?;

    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for element in document.select(&box_selector) {
        if let Some(result) = parse_result_box(&element, base)
            && seen.insert(result.link.clone())
        {
            results.push(result);
        }
    }

    Ok(results)
}

/// Parses a single `div.mainbox` block
fn parse_result_box(element: &ElementRef, base: &Url) -> Option<SearchResult> {
    let link_selector = Selector::parse("a[href]").ok()?;

    let link = element
        .select(&link_selector)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| resolve_href(base, href))
        .find(|url| !is_tags_link(url.as_str()))?;

    let fragments = text_fragments(element);

    // Title comes from the first link that shows text, e.g. <a><b>Inception</b></a>
    let title_parts = element
        .select(&link_selector)
        .filter(|a| !a.value().attr("href").is_some_and(is_tags_link))
        .map(|a| text_fragments(&a))
        .find(|parts| !parts.is_empty());

    let (title, rest) = match title_parts {
        Some(parts) => {
            let rest = fragments_after(&fragments, &parts);
            (parts.join(" "), rest)
        }
        None if !fragments.is_empty() => (fragments.join(" "), fragments.as_slice()),
        None => (UNKNOWN.to_string(), fragments.as_slice()),
    };

    Some(SearchResult {
        link: link.to_string(),
        title,
        year: extract_year(rest),
        quality: extract_quality(rest),
    })
}

/// Visible text of an element split into trimmed, whitespace-collapsed pieces
fn text_fragments(element: &ElementRef) -> Vec<String> {
    element
        .text()
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Fragments that follow the title inside the block
fn fragments_after<'a>(fragments: &'a [String], title: &[String]) -> &'a [String] {
    let Some(first) = title.first() else {
        return fragments;
    };
    match fragments.iter().position(|f| f == first) {
        Some(start) => &fragments[(start + title.len()).min(fragments.len())..],
        None => fragments,
    }
}

/// First four digit year found after the title
fn extract_year(fragments: &[String]) -> Option<String> {
    let re = Regex::new(YEAR_PATTERN).ok()?;
    fragments
        .iter()
        .find_map(|f| re.captures(f))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First release quality label found after the title
///
/// In a labeled fragment such as `Starring: Cam Gigandet` only the label is
/// looked at, unless the label announces a quality (`Quality: DVDRip`).
fn extract_quality(fragments: &[String]) -> Option<String> {
    let re = Regex::new(QUALITY_PATTERN).ok()?;
    let bare = Regex::new(BARE_QUALITY_PATTERN).ok()?;

    fragments.iter().find_map(|f| {
        let candidate = match f.split_once(':') {
            Some((label, value)) if is_quality_label(label) => value.trim(),
            Some((label, _)) => label.trim(),
            None => f.as_str(),
        };
        re.find(candidate)
            .map(|m| m.as_str().to_string())
            .or_else(|| bare.captures(candidate)?.get(1).map(|m| m.as_str().to_string()))
    })
}

fn is_quality_label(label: &str) -> bool {
    let label = label.trim();
    QUALITY_LABELS.iter().any(|q| label.eq_ignore_ascii_case(q))
}
