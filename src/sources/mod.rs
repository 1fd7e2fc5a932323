//! Network access to the country catalog service.

mod client;
mod error;

pub use client::{CATALOG_FIELDS, CountryClient, DEFAULT_API_BASE, parse_countries};
pub use error::FetchError;
