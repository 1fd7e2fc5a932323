//! HTTP client for the REST Countries catalog service.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::FetchError;
use crate::state::Country;
use crate::util::percent_encode;

/// Default service root (REST Countries v3.1).
pub const DEFAULT_API_BASE: &str = "https://restcountries.com/v3.1";

/// Fields requested for the catalog listing; detail views fetch full records.
pub const CATALOG_FIELDS: &[&str] = &["name", "flags", "capital", "region", "population", "cca3"];

/// Characters of a non-success body kept for diagnostics.
const PREVIEW_CHARS: usize = 300;

/// Body shape accepted from the service: normally a list, but single-record
/// lookups are tolerated as a bare object.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    /// Regular list response.
    Many(Vec<Country>),
    /// Single object response.
    One(Box<Country>),
}

/// What: Decode a response body into country records.
///
/// Inputs:
/// - `body`: Raw JSON text from the service
///
/// Output:
/// - `Ok(Vec<Country>)` (possibly empty); `Err(FetchError::Decode)` on malformed JSON.
///
/// # Errors
/// - Returns `FetchError::Decode` when the body is neither a list of countries nor one country.
pub fn parse_countries(body: &str) -> Result<Vec<Country>, FetchError> {
    match serde_json::from_str::<OneOrMany>(body)? {
        OneOrMany::Many(items) => Ok(items),
        OneOrMany::One(item) => Ok(vec![*item]),
    }
}

/// Read-only client for the three request shapes used by the directory.
///
/// Cloning is cheap; the inner `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct CountryClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// Service root without a trailing slash.
    base: String,
}

impl CountryClient {
    /// What: Build a client for the given service root.
    ///
    /// Inputs:
    /// - `base_url`: Service root, e.g. `https://restcountries.com/v3.1`
    /// - `connect_timeout`: TCP/TLS connect timeout
    ///
    /// Output:
    /// - A ready client. Falls back to reqwest defaults if the builder fails.
    #[must_use]
    pub fn new(base_url: &str, connect_timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(format!("Wherein/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to build configured HTTP client; using defaults");
                reqwest::Client::new()
            });
        Self {
            http,
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Service root in use.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// URL of the full catalog with field selection.
    #[must_use]
    pub fn catalog_url(&self) -> String {
        format!("{}/all?fields={}", self.base, CATALOG_FIELDS.join(","))
    }

    /// URL of a single record by code.
    #[must_use]
    pub fn code_url(&self, code: &str) -> String {
        format!("{}/alpha/{}", self.base, percent_encode(code))
    }

    /// URL of several records by a comma-separated code list.
    #[must_use]
    pub fn codes_url(&self, codes: &[String]) -> String {
        let joined = codes
            .iter()
            .map(|c| percent_encode(c))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}/alpha?codes={joined}", self.base)
    }

    /// What: Fetch the whole catalog (restricted to [`CATALOG_FIELDS`]).
    ///
    /// Output:
    /// - `Ok(Vec<Country>)` on success; `Err` on network, status or decode failure.
    ///
    /// # Errors
    /// - Any [`FetchError`] variant.
    pub async fn fetch_catalog(&self) -> Result<Vec<Country>, FetchError> {
        self.get_countries(&self.catalog_url(), false).await
    }

    /// What: Fetch one country by its code.
    ///
    /// Inputs:
    /// - `code`: 3-letter country code
    ///
    /// Output:
    /// - `Ok(vec![])` when the service knows no such code (empty list or HTTP 404).
    ///
    /// # Errors
    /// - Any [`FetchError`] variant other than the not-found case.
    pub async fn fetch_by_code(&self, code: &str) -> Result<Vec<Country>, FetchError> {
        self.get_countries(&self.code_url(code), true).await
    }

    /// What: Fetch every country whose code is in `codes`.
    ///
    /// Inputs:
    /// - `codes`: Country codes to resolve; an empty slice issues no request
    ///
    /// # Errors
    /// - Any [`FetchError`] variant.
    pub async fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<Country>, FetchError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }
        self.get_countries(&self.codes_url(codes), false).await
    }

    /// Shared GET + decode path.
    async fn get_countries(
        &self,
        url: &str,
        not_found_is_empty: bool,
    ) -> Result<Vec<Country>, FetchError> {
        debug!(url, "requesting countries");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if not_found_is_empty && status == reqwest::StatusCode::NOT_FOUND {
            info!(url, "service reported not found");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            let preview: String = body.chars().take(PREVIEW_CHARS).collect();
            warn!(
                url,
                status = status.as_u16(),
                preview = preview,
                "country service returned non-success status"
            );
            return Err(FetchError::Status {
                code: status.as_u16(),
                preview,
            });
        }
        let items = parse_countries(&body)?;
        info!(url, count = items.len(), bytes = body.len(), "fetched countries");
        Ok(items)
    }
}

impl Default for CountryClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, Duration::from_secs(15))
    }
}
