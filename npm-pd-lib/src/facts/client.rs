//! npms.io API client
//!
//! Minimal client for the two endpoints the tool needs: package details and search.

use super::{PackageReport, SearchQuery, SearchResponse, SearchResult, SearchSource};
use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;

const LOG_TARGET: &str = "      npms";

/// Characters left alone by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client talking to the npms.io API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("npm-pd/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            let _ = base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn package_url(&self, name: &str) -> String {
        format!("{}/package/{}", self.base_url, utf8_percent_encode(name, COMPONENT))
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    /// Fetch the full analysis of a single package.
    pub async fn get_package(&self, name: &str) -> Result<PackageReport> {
        let url = self.package_url(name);
        log::info!(target: LOG_TARGET, "Querying npms.io for package '{name}'");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .into_app_err_with(|| format!("requesting '{url}'"))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(app_err!("package '{name}' not found"));
        }

        let resp = resp
            .error_for_status()
            .into_app_err_with(|| format!("npms.io rejected the request for package '{name}'"))?;

        resp.json()
            .await
            .into_app_err_with(|| format!("decoding the npms.io analysis of package '{name}'"))
    }
}

impl SearchSource for Client {
    async fn search(&self, query: &SearchQuery, from: usize, size: usize) -> Result<Vec<SearchResult>> {
        let url = self.search_url();
        log::debug!(target: LOG_TARGET, "Searching npms.io for '{query}' (from {from}, size {size})");

        let resp = self
            .client
            .get(&url)
            .query(&[("q", query.to_string()), ("from", from.to_string()), ("size", size.to_string())])
            .send()
            .await
            .into_app_err_with(|| format!("requesting '{url}'"))?
            .error_for_status()
            .into_app_err_with(|| format!("npms.io rejected the search for '{query}'"))?;

        let body: SearchResponse = resp
            .json()
            .await
            .into_app_err_with(|| format!("decoding npms.io search results for '{query}'"))?;

        Ok(body.results)
    }
}
