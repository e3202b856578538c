//! Run mode selection
//!
//! A run either searches the site or resolves a movie page into direct
//! download links, depending on what the single input looks like.

use url::Url;

use crate::error::{FzmoviesError, Result};
use crate::url::parse_site_url;

/// What a run should do with its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Free-text search query, trimmed
    Search(String),
    /// Movie detail page on the scraped site
    Download(Url),
}

impl Mode {
    /// Classifies an input string
    ///
    /// Inputs that are http(s) URLs on the site behind `base` select
    /// download mode; any other non-blank text is a search query.
    ///
    /// # Errors
    /// Returns `InvalidQuery` for empty or whitespace-only input
    ///
    /// # Example
    /// ```
    /// use fzmovies_core::{Mode, url::parse_base_url};
    /// let base = parse_base_url("https://www.fzmovies.host/").unwrap();
    /// assert!(matches!(Mode::classify("inception", &base), Ok(Mode::Search(_))));
    /// assert!(matches!(
    ///     Mode::classify("https://www.fzmovies.host/movie-Up--hmp4.htm", &base),
    ///     Ok(Mode::Download(_))
    /// ));
    /// ```
    pub fn classify(input: &str, base: &Url) -> Result<Mode> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FzmoviesError::InvalidQuery(
                "input cannot be empty".to_string(),
            ));
        }

        Ok(match parse_site_url(trimmed, base) {
            Some(url) => Mode::Download(url),
            None => Mode::Search(trimmed.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::parse_base_url;
    use proptest::prelude::*;

    fn base() -> Url {
        parse_base_url("https://www.fzmovies.host/").unwrap()
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            Mode::classify("", &base()),
            Err(FzmoviesError::InvalidQuery(_))
        ));
        assert!(matches!(
            Mode::classify(" \t\n", &base()),
            Err(FzmoviesError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(
            Mode::classify("  the dark knight ", &base()).unwrap(),
            Mode::Search("the dark knight".to_string())
        );
    }

    #[test]
    fn test_site_url_selects_download() {
        let mode = Mode::classify(" https://fzmovies.host/movie-Up--hmp4.htm ", &base()).unwrap();
        match mode {
            Mode::Download(url) => {
                assert_eq!(url.as_str(), "https://fzmovies.host/movie-Up--hmp4.htm")
            }
            other => panic!("Expected download mode, got {:?}", other),
        }
    }

    #[test]
    fn test_foreign_url_is_a_query() {
        assert_eq!(
            Mode::classify("https://www.imdb.com/title/tt1375666/", &base()).unwrap(),
            Mode::Search("https://www.imdb.com/title/tt1375666/".to_string())
        );
    }

    proptest! {
        #[test]
        fn prop_plain_words_select_search(query in "[a-zA-Z0-9 ]{0,40}[a-zA-Z0-9]") {
            let mode = Mode::classify(&query, &base()).unwrap();
            prop_assert_eq!(mode, Mode::Search(query.trim().to_string()));
        }

        #[test]
        fn prop_site_paths_select_download(path in "[a-zA-Z0-9_-]{1,30}\\.htm") {
            let input = format!("https://www.fzmovies.host/{}", path);
            let mode = Mode::classify(&input, &base()).unwrap();
            prop_assert!(matches!(mode, Mode::Download(_)));
        }
    }
}
