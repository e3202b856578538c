//! HTTP client for fzmovies
//!
//! Wraps a single cookie-keeping `reqwest::Client` that acts as the browser
//! session for a whole run. Requests are sent one at a time and never
//! retried; each one is bounded by the configured timeout.

use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tracing::{debug, warn};
use url::Url;

use crate::error::{FzmoviesError, Result};
use crate::parser::{FormMethod, SearchForm};
use crate::url::{BASE_URL, parse_base_url};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root every href is resolved against (default: https://www.fzmovies.host/)
    pub base_url: String,
    /// User-Agent header; the site rejects default client identifiers
    pub user_agent: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Skip TLS certificate validation (default: true, the site's chain is often broken)
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: true,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another site root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP session used for every page of a run
///
/// Handles all HTTP communication with fzmovies, including:
/// - Cookies carried from one page to the next
/// - Redirect following
/// - Browser-like headers (User-Agent, Accept, Accept-Language)
pub struct FzmoviesClient {
    client: reqwest::Client,
    base_url: Url,
}

impl FzmoviesClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidUrl` if `base_url` is not an absolute http(s) URL
    /// - `HttpError` if the underlying client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(headers)
            .build()
            .map_err(FzmoviesError::HttpError)?;

        Ok(Self { client, base_url })
    }

    /// Site root every scraped href is joined against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch a page and return its HTML
    ///
    /// # Errors
    /// - `HttpError` - Network errors, including timeouts
    /// - `HttpStatus` - Any non-success status after redirects
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        debug!(%url, "GET");
        let request = self.client.get(url.clone());
        self.send(request, url).await
    }

    /// Submit a form the way its `method` asks
    ///
    /// GET forms send the fields as a query string, POST forms as an
    /// urlencoded body.
    pub async fn submit(&self, form: &SearchForm) -> Result<String> {
        debug!(url = %form.action, method = ?form.method, "submitting form");
        let request = match form.method {
            FormMethod::Get => self.client.get(form.action.clone()).query(&form.fields),
            FormMethod::Post => self.client.post(form.action.clone()).form(&form.fields),
        };
        self.send(request, &form.action).await
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &Url) -> Result<String> {
        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "request failed");
            FzmoviesError::HttpError(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "unexpected status");
            return Err(FzmoviesError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        response.text().await.map_err(FzmoviesError::HttpError)
    }
}
