//! Core value types used by Wherein state.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Localized name forms for one language of a country's native names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NativeName {
    /// Official name in the native language.
    #[serde(default)]
    pub official: String,
    /// Common name in the native language.
    #[serde(default)]
    pub common: String,
}

/// Structured country name as delivered by the catalog service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CountryName {
    /// Common display name (e.g., "Germany").
    pub common: String,
    /// Official name (e.g., "Federal Republic of Germany").
    #[serde(default)]
    pub official: String,
    /// Native name forms keyed by language code. Ordered by key so the
    /// "first" entry is deterministic regardless of response ordering.
    #[serde(rename = "nativeName", default)]
    pub native_name: BTreeMap<String, NativeName>,
}

/// Flag image references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Flags {
    /// PNG rendition URL.
    #[serde(default)]
    pub png: Option<String>,
    /// SVG rendition URL.
    #[serde(default)]
    pub svg: Option<String>,
    /// Textual description of the flag, when provided.
    #[serde(default)]
    pub alt: Option<String>,
}

/// A currency entry attached to a country.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Currency {
    /// Display name (e.g., "Euro").
    #[serde(default)]
    pub name: Option<String>,
    /// Currency symbol (e.g., "€").
    #[serde(default)]
    pub symbol: Option<String>,
}

/// One country record, consumed read-only from the catalog service.
///
/// Only `code` and `name` are required; everything else may be missing,
/// either because the service omits it or because a field selection was
/// requested.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Country {
    /// Stable 3-letter identifier (ISO 3166-1 alpha-3), unique per batch.
    #[serde(rename = "cca3")]
    pub code: String,
    /// Structured name.
    pub name: CountryName,
    /// Population count.
    #[serde(default)]
    pub population: Option<u64>,
    /// Region classification (e.g., "Europe").
    #[serde(default)]
    pub region: Option<String>,
    /// Subregion classification (e.g., "Western Europe").
    #[serde(default)]
    pub subregion: Option<String>,
    /// Capital cities; the first one is "the" capital.
    #[serde(rename = "capital", default)]
    pub capital_cities: Vec<String>,
    /// Flag images.
    #[serde(default)]
    pub flags: Option<Flags>,
    /// Top-level internet domains.
    #[serde(rename = "tld", default)]
    pub top_level_domains: Vec<String>,
    /// Currencies keyed by ISO 4217 code.
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    /// Languages keyed by language code, valued by display name.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// Codes of countries sharing a land border.
    #[serde(rename = "borders", default)]
    pub border_codes: Vec<String>,
}

impl Country {
    /// Common display name.
    #[must_use]
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// First capital city, if any non-empty entry is present.
    #[must_use]
    pub fn capital(&self) -> Option<&str> {
        self.capital_cities
            .first()
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    /// PNG flag URL, if present.
    #[must_use]
    pub fn flag_url(&self) -> Option<&str> {
        self.flags
            .as_ref()
            .and_then(|f| f.png.as_deref())
            .filter(|u| !u.is_empty())
    }
}

/// View projection of a [`Country`] for the catalog list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayEntry {
    /// Country code used for navigation.
    pub code: String,
    /// Common name.
    pub name: String,
    /// Flag image URL.
    pub flag_url: Option<String>,
    /// Population count.
    pub population: Option<u64>,
    /// Region classification.
    pub region: Option<String>,
    /// First capital city.
    pub capital: Option<String>,
}

impl From<&Country> for DisplayEntry {
    fn from(c: &Country) -> Self {
        Self {
            code: c.code.clone(),
            name: c.name.common.clone(),
            flag_url: c.flag_url().map(ToString::to_string),
            population: c.population,
            region: c.region.clone().filter(|r| !r.is_empty()),
            capital: c.capital().map(ToString::to_string),
        }
    }
}

/// A neighbouring country resolved from a border code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderEntry {
    /// Display name.
    pub name: String,
    /// Country code, used to navigate to the neighbour.
    pub code: String,
}

/// Which top-level screen is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    /// Catalog list with search and region filter.
    #[default]
    Home,
    /// Single-country detail view.
    Detail,
}

/// Request for a single country record, sent to the detail worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    /// Generation id used to discard stale responses.
    pub id: u64,
    /// Requested country code.
    pub code: String,
}

/// Request to resolve a country's border codes into records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderRequest {
    /// Generation id of the detail view that asked for the borders.
    pub id: u64,
    /// Border codes to resolve.
    pub codes: Vec<String>,
}

/// Outcome of a primary detail fetch.
#[derive(Debug)]
pub struct DetailResponse {
    /// Echoed generation id.
    pub id: u64,
    /// Echoed country code.
    pub code: String,
    /// Records returned (empty means not found) or the fetch error.
    pub result: Result<Vec<Country>, crate::sources::FetchError>,
}

/// Outcome of a border enrichment fetch.
#[derive(Debug)]
pub struct BorderResponse {
    /// Echoed generation id.
    pub id: u64,
    /// Resolved border records or the fetch error.
    pub result: Result<Vec<Country>, crate::sources::FetchError>,
}

/// Lifecycle of the one catalog fetch made per run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogState {
    /// Fetch issued, no answer yet.
    #[default]
    Loading,
    /// Catalog received; immutable for the rest of the run.
    Ready(Vec<Country>),
    /// Fetch failed; terminal for this run. Holds the user-visible message.
    Failed(String),
}

impl CatalogState {
    /// `true` while the catalog fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// User-visible error message when the fetch failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Records of a ready catalog; empty otherwise.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        match self {
            Self::Ready(items) => items,
            _ => &[],
        }
    }
}

/// Resolution state of the border section of a detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BorderState {
    /// The country declares no border codes.
    NoBorders,
    /// Border records are being fetched.
    Loading,
    /// Border entries, sorted by name.
    Resolved(Vec<BorderEntry>),
    /// Enrichment failed; rendered as an empty list.
    Unavailable,
}

impl BorderState {
    /// Resolved entries, or an empty slice in every other state.
    #[must_use]
    pub fn entries(&self) -> &[BorderEntry] {
        match self {
            Self::Resolved(items) => items,
            _ => &[],
        }
    }
}

/// A loaded detail view: the full record plus its border section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryDetail {
    /// Full country record.
    pub country: Country,
    /// Border section state.
    pub borders: BorderState,
}

/// Lifecycle of the detail view for one country code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailState {
    /// No detail view has been requested.
    #[default]
    Idle,
    /// Primary record fetch outstanding.
    Loading {
        /// Requested code.
        code: String,
    },
    /// Record received.
    Ready(Box<CountryDetail>),
    /// The service has no record for the code.
    NotFound {
        /// Requested code.
        code: String,
    },
    /// Transport or decode failure.
    Failed {
        /// Requested code.
        code: String,
        /// User-visible message.
        message: String,
    },
}
