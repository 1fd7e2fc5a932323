//! Application state and the value types it is built from.
//!
//! The public API lives under `crate::state::*` via re-exports.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{
    BorderEntry, BorderRequest, BorderResponse, BorderState, CatalogState, Country,
    CountryDetail, CountryName, Currency, DetailRequest, DetailResponse, DetailState,
    DisplayEntry, Flags, NativeName, Screen,
};
