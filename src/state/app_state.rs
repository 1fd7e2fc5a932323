//! Central `AppState` container.

use ratatui::widgets::ListState;

use crate::state::types::{CatalogState, DetailState, DisplayEntry, Screen};
use crate::theme::{KeyMap, ThemeStore};

/// Application state shared by the event, networking and UI layers.
///
/// Only the main event loop mutates it; workers communicate through
/// channels and their responses are applied by the `logic` functions.
#[derive(Debug)]
pub struct AppState {
    /// Active top-level screen.
    pub screen: Screen,
    /// Lifecycle of the catalog fetch.
    pub catalog: CatalogState,
    /// Set once the single catalog fetch has been issued.
    pub catalog_requested: bool,
    /// Current search input text.
    pub input: String,
    /// Active region filter; `None` means all regions.
    pub region_filter: Option<String>,
    /// Memoized display list derived from catalog, input and region filter.
    pub display: Vec<DisplayEntry>,
    /// Index into `display` that is currently highlighted.
    pub selected: usize,
    /// List widget state mirroring `selected`.
    pub list_state: ListState,
    /// Detail view lifecycle.
    pub detail: DetailState,
    /// Highlighted border entry on the detail screen.
    pub border_selected: usize,
    /// Next detail request id to allocate.
    pub next_detail_id: u64,
    /// Id of the most recent detail request; responses with other ids are stale.
    pub latest_detail_id: u64,
    /// Persisted theme preference.
    pub theme: ThemeStore,
    /// Configured key bindings.
    pub keymap: KeyMap,
}

impl AppState {
    /// What: Construct state around an already-loaded theme store and key map.
    ///
    /// Inputs:
    /// - `theme`: Theme preference restored at startup
    /// - `keymap`: Key bindings from settings
    ///
    /// Output:
    /// - Fresh state on the home screen with the catalog loading.
    #[must_use]
    pub fn new(theme: ThemeStore, keymap: KeyMap) -> Self {
        Self {
            theme,
            keymap,
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            catalog: CatalogState::Loading,
            catalog_requested: false,
            input: String::new(),
            region_filter: None,
            display: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            detail: DetailState::Idle,
            border_selected: 0,
            next_detail_id: 1,
            latest_detail_id: 0,
            theme: ThemeStore::default(),
            keymap: KeyMap::default(),
        }
    }
}
