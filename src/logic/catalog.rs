//! Catalog list derivation and the state changes that drive it.

use crate::logic::text::{collate, contains_folded};
use crate::sources::FetchError;
use crate::state::{AppState, CatalogState, Country, DisplayEntry};

/// Codes shown, in this order, when neither search text nor region filter is set.
pub const FEATURED_CODES: [&str; 8] = ["DEU", "USA", "BRA", "ISL", "AFG", "ALA", "ALB", "DZA"];

/// Region filter options in cycling order.
pub const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

/// User-visible message when the catalog fetch fails.
pub const CATALOG_ERROR_MESSAGE: &str = "Failed to load countries.";

/// What: Compute the list shown on the home screen.
///
/// Inputs:
/// - `catalog`: All records received from the catalog fetch
/// - `search`: Raw search text
/// - `region`: Active region filter, if any
///
/// Output:
/// - Featured countries in fixed order when both inputs are empty; otherwise
///   every record whose common name contains `search` (ignoring case and
///   diacritics) and whose region equals `region` exactly, sorted by name.
///
/// Details:
/// - Featured codes missing from the catalog are skipped.
/// - An empty region string counts as no filter.
#[must_use]
pub fn derive_display_list(
    catalog: &[Country],
    search: &str,
    region: Option<&str>,
) -> Vec<DisplayEntry> {
    let region = region.filter(|r| !r.is_empty());
    if search.is_empty() && region.is_none() {
        return FEATURED_CODES
            .iter()
            .filter_map(|code| catalog.iter().find(|c| c.code == *code))
            .map(DisplayEntry::from)
            .collect();
    }
    let mut hits: Vec<&Country> = catalog
        .iter()
        .filter(|c| contains_folded(c.common_name(), search))
        .filter(|c| region.is_none_or(|r| c.region.as_deref() == Some(r)))
        .collect();
    hits.sort_by(|a, b| collate(a.common_name(), b.common_name()));
    hits.into_iter().map(DisplayEntry::from).collect()
}

/// What: Recompute the memoized display list and keep the selection in range.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Details:
/// - Resets the selection to the top; the list widget state is kept in sync.
pub fn refresh_display_list(app: &mut AppState) {
    app.display = derive_display_list(
        app.catalog.countries(),
        &app.input,
        app.region_filter.as_deref(),
    );
    app.selected = 0;
    if app.display.is_empty() {
        app.list_state.select(None);
    } else {
        app.list_state.select(Some(0));
    }
}

/// Replace the search text and refresh the list.
pub fn set_search_text(app: &mut AppState, text: impl Into<String>) {
    app.input = text.into();
    refresh_display_list(app);
}

/// Replace the region filter (`None` clears it) and refresh the list.
pub fn set_region_filter(app: &mut AppState, region: Option<String>) {
    app.region_filter = region.filter(|r| !r.is_empty());
    refresh_display_list(app);
}

/// What: Step the region filter through `REGIONS`, wrapping through "all regions".
///
/// Inputs:
/// - `app`: Mutable application state
/// - `forward`: `true` for the next option, `false` for the previous one
///
/// Details:
/// - Sequence forward: none, Africa, Americas, Asia, Europe, Oceania, none, ...
/// - A filter value outside `REGIONS` behaves like none.
pub fn cycle_region_filter(app: &mut AppState, forward: bool) {
    // Slot 0 is "all regions"; slots 1..=len map onto REGIONS.
    let slots = REGIONS.len() + 1;
    let current = app
        .region_filter
        .as_deref()
        .and_then(|r| REGIONS.iter().position(|x| *x == r))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (current + 1) % slots
    } else {
        (current + slots - 1) % slots
    };
    let region = next.checked_sub(1).map(|i| REGIONS[i].to_string());
    set_region_filter(app, region);
}

/// What: Apply the outcome of the one catalog fetch.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `result`: Records or the fetch error
///
/// Details:
/// - Success moves to `Ready` and derives the list; failure moves to the
///   terminal `Failed` state with a fixed message and logs the cause.
/// - Ignored unless the catalog is still loading.
pub fn apply_catalog_result(app: &mut AppState, result: Result<Vec<Country>, FetchError>) {
    if !app.catalog.is_loading() {
        tracing::debug!("ignoring catalog result outside of loading state");
        return;
    }
    match result {
        Ok(items) => {
            tracing::info!(count = items.len(), "catalog loaded");
            app.catalog = CatalogState::Ready(items);
        }
        Err(e) => {
            tracing::error!(error = %e, "catalog fetch failed");
            app.catalog = CatalogState::Failed(CATALOG_ERROR_MESSAGE.to_string());
        }
    }
    refresh_display_list(app);
}

/// Move the list selection by `delta`, clamped to the list bounds.
pub fn move_selection(app: &mut AppState, delta: isize) {
    if app.display.is_empty() {
        return;
    }
    let last = app.display.len() - 1;
    app.selected = app.selected.saturating_add_signed(delta).min(last);
    app.list_state.select(Some(app.selected));
}

/// Code of the highlighted list entry, if any.
#[must_use]
pub fn selected_code(app: &AppState) -> Option<String> {
    app.display.get(app.selected).map(|e| e.code.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CountryName;

    fn country(code: &str, name: &str, region: &str) -> Country {
        Country {
            code: code.to_string(),
            name: CountryName {
                common: name.to_string(),
                ..CountryName::default()
            },
            region: Some(region.to_string()),
            ..Country::default()
        }
    }

    fn sample() -> Vec<Country> {
        vec![
            country("USA", "United States", "Americas"),
            country("DEU", "Germany", "Europe"),
            country("FRA", "France", "Europe"),
            country("ALA", "Åland Islands", "Europe"),
            country("BRA", "Brazil", "Americas"),
            country("AUT", "Austria", "Europe"),
            country("CIV", "Côte d'Ivoire", "Africa"),
        ]
    }

    fn names(list: &[DisplayEntry]) -> Vec<&str> {
        list.iter().map(|e| e.name.as_str()).collect()
    }

    fn ready_app() -> AppState {
        let mut app = AppState::default();
        apply_catalog_result(&mut app, Ok(sample()));
        app
    }

    #[test]
    /// What: No search and no filter shows featured countries in fixed order.
    ///
    /// - Input: Sample catalog missing several featured codes
    /// - Output: DEU, USA, BRA, ALA in featured order; absent codes skipped
    fn catalog_featured_order_skips_missing() {
        let list = derive_display_list(&sample(), "", None);
        let codes: Vec<&str> = list.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["DEU", "USA", "BRA", "ALA"]);
        assert!(list.len() <= FEATURED_CODES.len());
    }

    #[test]
    /// What: Search is a case-insensitive substring match sorted by name.
    ///
    /// - Input: "an"
    /// - Output: Åland Islands, France, Germany
    fn catalog_search_substring_sorted() {
        let list = derive_display_list(&sample(), "AN", None);
        assert_eq!(names(&list), vec!["Åland Islands", "France", "Germany"]);
    }

    #[test]
    /// What: Accented names match unaccented search text.
    ///
    /// - Input: "cote", "aland"
    /// - Output: Côte d'Ivoire, Åland Islands
    fn catalog_search_ignores_diacritics() {
        assert_eq!(
            names(&derive_display_list(&sample(), "cote", None)),
            vec!["Côte d'Ivoire"]
        );
        assert_eq!(
            names(&derive_display_list(&sample(), "aland", None)),
            vec!["Åland Islands"]
        );
    }

    #[test]
    /// What: A region filter alone lists every country of that region, sorted.
    ///
    /// - Input: Empty search, region "Europe"
    /// - Output: All four European entries, not the featured subset
    fn catalog_region_only_lists_whole_region() {
        let list = derive_display_list(&sample(), "", Some("Europe"));
        assert_eq!(
            names(&list),
            vec!["Åland Islands", "Austria", "France", "Germany"]
        );
    }

    #[test]
    /// What: Search and region combine; the region must match exactly.
    ///
    /// - Input: "a" within "Americas"; region "europe" (wrong case)
    /// - Output: Brazil, United States; nothing for the wrong-case region
    fn catalog_search_and_region_combine() {
        assert_eq!(
            names(&derive_display_list(&sample(), "a", Some("Americas"))),
            vec!["Brazil", "United States"]
        );
        assert!(derive_display_list(&sample(), "", Some("europe")).is_empty());
    }

    #[test]
    /// What: An unmatched search yields an empty list.
    ///
    /// - Input: "zzz"
    /// - Output: Empty
    fn catalog_no_match_is_empty() {
        assert!(derive_display_list(&sample(), "zzz", None).is_empty());
    }

    #[test]
    /// What: Region cycling wraps through "all regions" both ways.
    ///
    /// - Input: Six forward steps, then one backward step from none
    /// - Output: Africa..Oceania, none; backward from none lands on Oceania
    fn catalog_cycle_region_wraps() {
        let mut app = ready_app();
        for expected in REGIONS {
            cycle_region_filter(&mut app, true);
            assert_eq!(app.region_filter.as_deref(), Some(expected));
        }
        cycle_region_filter(&mut app, true);
        assert_eq!(app.region_filter, None);
        cycle_region_filter(&mut app, false);
        assert_eq!(app.region_filter.as_deref(), Some("Oceania"));
    }

    #[test]
    /// What: State changes refresh the memoized list and reset the selection.
    ///
    /// - Input: Select the second entry, then type a search
    /// - Output: List reflects the search; selection back at 0
    fn catalog_set_search_refreshes_and_clamps() {
        let mut app = ready_app();
        move_selection(&mut app, 1);
        assert_eq!(app.selected, 1);
        set_search_text(&mut app, "germ");
        assert_eq!(names(&app.display), vec!["Germany"]);
        assert_eq!(app.selected, 0);
        assert_eq!(app.list_state.selected(), Some(0));
        set_search_text(&mut app, "nothing here");
        assert_eq!(app.list_state.selected(), None);
        assert_eq!(selected_code(&app), None);
    }

    #[test]
    /// What: Selection moves clamp at both ends.
    ///
    /// - Input: Move up from 0, then far down
    /// - Output: Stays at 0, then lands on the last entry
    fn catalog_move_selection_clamps() {
        let mut app = ready_app();
        move_selection(&mut app, -3);
        assert_eq!(app.selected, 0);
        move_selection(&mut app, 100);
        assert_eq!(app.selected, app.display.len() - 1);
        assert_eq!(selected_code(&app).as_deref(), Some("ALA"));
    }

    #[test]
    /// What: A failed catalog fetch is terminal and shows the fixed message.
    ///
    /// - Input: Network error, then a late success
    /// - Output: Failed with the message; the late success is ignored
    fn catalog_failure_is_terminal() {
        let mut app = AppState::default();
        assert!(app.catalog.is_loading());
        apply_catalog_result(&mut app, Err(FetchError::Network("refused".into())));
        assert_eq!(app.catalog.error_message(), Some(CATALOG_ERROR_MESSAGE));
        assert!(app.display.is_empty());
        apply_catalog_result(&mut app, Ok(sample()));
        assert_eq!(app.catalog.error_message(), Some(CATALOG_ERROR_MESSAGE));
    }
}
