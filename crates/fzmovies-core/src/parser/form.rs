//! Search form parser for the fzmovies homepage
//!
//! Reads the first `<form>` on the page the way a browser would submit it:
//! action resolved against the page, method, and all successful controls.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{FzmoviesError, Result};
use crate::url::resolve_href;

/// Name of the text field that carries the search term
pub const SEARCH_FIELD: &str = "searchname";

/// HTTP method declared by a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
}

/// A form ready to be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    /// Absolute submission URL
    pub action: Url,
    pub method: FormMethod,
    /// Name/value pairs in document order
    pub fields: Vec<(String, String)>,
}

impl SearchForm {
    /// Sets a field value, appending the field if the form lacks it
    pub fn set_field(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some(field) => field.1 = value.to_string(),
            None => self.fields.push((name.to_string(), value.to_string())),
        }
    }

    /// Returns the current value of a field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Parses the first form of a page
///
/// # Arguments
/// * `html` - Raw HTML of the page holding the form
/// * `page_url` - URL the page was fetched from; the action resolves against it
///
/// # Errors
/// Returns `ElementNotFound` if the page has no form
pub fn parse_search_form(html: &str, page_url: &Url) -> Result<SearchForm> {
    let document = Html::parse_document(html);
    let form_selector = Selector::parse("form")
        .map_err(|e| FzmoviesError::ParseError(format!("Invalid selector: {:?}", e)))?;
    let control_selector = Selector::parse("input, select, textarea")
        .map_err(|e| FzmoviesError::ParseError(format!("Invalid selector: {:?}", e)))?;

    let form = document
        .select(&form_selector)
        .next()
        .ok_or_else(|| FzmoviesError::ElementNotFound("search form".to_string()))?;

    let action = match form.value().attr("action").map(str::trim) {
        Some(action) if !action.is_empty() => resolve_href(page_url, action)
            .ok_or_else(|| FzmoviesError::InvalidUrl(format!("form action {}", action)))?,
        _ => page_url.clone(),
    };

    let method = match form.value().attr("method") {
        Some(m) if m.trim().eq_ignore_ascii_case("post") => FormMethod::Post,
        _ => FormMethod::Get,
    };

    let mut fields = Vec::new();
    let mut submit_seen = false;

    for control in form.select(&control_selector) {
        let element = control.value();
        let Some(name) = element.attr("name").filter(|n| !n.is_empty()) else {
            continue;
        };
        if element.attr("disabled").is_some() {
            continue;
        }

        match element.name() {
            "input" => {
                let kind = element.attr("type").unwrap_or("text").to_ascii_lowercase();
                let value = element.attr("value").unwrap_or_default();
                match kind.as_str() {
                    "checkbox" | "radio" => {
                        if element.attr("checked").is_some() {
                            let value = if value.is_empty() { "on" } else { value };
                            fields.push((name.to_string(), value.to_string()));
                        }
                    }
                    // Only the button that would be clicked is sent
                    "submit" | "image" => {
                        if !submit_seen {
                            submit_seen = true;
                            fields.push((name.to_string(), value.to_string()));
                        }
                    }
                    "button" | "reset" | "file" => {}
                    _ => fields.push((name.to_string(), value.to_string())),
                }
            }
            "select" => {
                if let Some(value) = selected_option(&control) {
                    fields.push((name.to_string(), value));
                }
            }
            "textarea" => {
                fields.push((name.to_string(), control.text().collect::<String>()));
            }
            _ => {}
        }
    }

    Ok(SearchForm {
        action,
        method,
        fields,
    })
}

/// Value of the selected option, or of the first option when none is marked
fn selected_option(select: &ElementRef) -> Option<String> {
    let option_selector = Selector::parse("option").ok()?;
    let options: Vec<ElementRef> = select.select(&option_selector).collect();

    let chosen = options
        .iter()
        .find(|o| o.value().attr("selected").is_some())
        .or_else(|| options.first())?;

    Some(match chosen.value().attr("value") {
        Some(value) => value.to_string(),
        None => chosen.text().collect::<String>().trim().to_string(),
    })
}
