//! HTML parsers for fzmovies
//!
//! Contains modules for parsing different page types.

pub mod download;
pub mod form;
pub mod search;

pub use download::{parse_direct_links, parse_download_link, parse_file_page};
pub use form::{FormMethod, SearchForm, parse_search_form};
pub use search::parse_search_results;
