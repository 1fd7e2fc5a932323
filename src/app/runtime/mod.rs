use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::catalog::REGIONS;
use crate::logic::{open_detail, refresh_display_list};
use crate::sources::CountryClient;
use crate::state::AppState;
use crate::theme::{KeyMap, Settings, ThemeMode, ThemeStore};

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
mod workers;

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use event_loop::run_event_loop;
use workers::request_catalog;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment switch that bypasses terminal setup, rendering and input.
pub const HEADLESS_ENV: &str = "WHEREIN_TEST_HEADLESS";

/// Startup options resolved from settings and command-line flags.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Root URL of the catalog service.
    pub api_base_url: String,
    /// Connect timeout for catalog requests.
    pub connect_timeout: Duration,
    /// Key bindings.
    pub keymap: KeyMap,
    /// Preferences file backing the theme; `None` keeps the theme in memory.
    pub preferences_path: Option<PathBuf>,
    /// Initial search text.
    pub search: Option<String>,
    /// Initial region filter.
    pub region: Option<String>,
    /// Country code whose detail view opens at startup.
    pub country: Option<String>,
}

impl RunOptions {
    /// What: Build options from loaded settings with no startup overrides.
    ///
    /// Inputs:
    /// - `settings`: Parsed settings
    /// - `preferences_path`: Theme preferences file, if persistence is wanted
    #[must_use]
    pub fn from_settings(settings: Settings, preferences_path: Option<PathBuf>) -> Self {
        Self {
            api_base_url: settings.api_base_url,
            connect_timeout: settings.connect_timeout,
            keymap: settings.keymap,
            preferences_path,
            search: None,
            region: None,
            country: None,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::from_settings(Settings::default(), None)
    }
}

/// What: Match a user-supplied region against the known region names.
///
/// Inputs:
/// - `region`: Region as typed (case-insensitive)
///
/// Output:
/// - Canonical region name, or `None` if it is not one of the filter options.
fn canonical_region(region: &str) -> Option<String> {
    REGIONS
        .iter()
        .find(|r| r.eq_ignore_ascii_case(region.trim()))
        .map(|r| (*r).to_string())
}

/// What: Build the initial application state from the startup options.
///
/// Inputs:
/// - `options`: Resolved startup options
///
/// Output:
/// - State with theme, key map, search text and region filter applied.
fn initialize_app_state(options: &RunOptions) -> AppState {
    let theme = options
        .preferences_path
        .as_deref()
        .map_or_else(|| ThemeStore::in_memory(ThemeMode::Light), ThemeStore::load);
    let mut app = AppState::new(theme, options.keymap.clone());
    if let Some(search) = &options.search {
        app.input.clone_from(search);
    }
    if let Some(region) = &options.region {
        app.region_filter = canonical_region(region);
        if app.region_filter.is_none() {
            tracing::warn!(region = %region, "unknown region ignored");
        }
    }
    refresh_display_list(&mut app);
    app
}

/// What: Run the Wherein TUI end-to-end: set up the terminal, spawn workers,
/// drive the event loop and restore the terminal on exit.
///
/// Inputs:
/// - `options`: Startup options (service URL, key bindings, initial view)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// # Errors
/// - Returns `Err` when terminal setup, drawing or restoration fails.
///
/// Details:
/// - Issues exactly one catalog fetch per run.
/// - With `WHEREIN_TEST_HEADLESS=1`, skips terminal setup, rendering and the input thread.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = initialize_app_state(&options);
    let client = CountryClient::new(&options.api_base_url, options.connect_timeout);
    tracing::info!(base = client.base_url(), headless, "runtime starting");

    let mut channels = Channels::new(&client);
    spawn_tick_worker(&channels.tick_tx);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    request_catalog(&mut app, &client, &channels.catalog_res_tx);
    if let Some(code) = options.country.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        open_detail(&mut app, &code.to_ascii_uppercase(), &channels.detail_req_tx);
    }

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    tracing::debug!("main loop exited");

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;

    #[test]
    /// What: Region flags are matched case-insensitively against the known regions.
    ///
    /// - Input: "europe", " Asia ", "Antarctica"
    /// - Output: "Europe", "Asia", none
    fn runtime_canonical_region() {
        assert_eq!(canonical_region("europe").as_deref(), Some("Europe"));
        assert_eq!(canonical_region(" Asia ").as_deref(), Some("Asia"));
        assert_eq!(canonical_region("Antarctica"), None);
    }

    #[test]
    /// What: Startup options seed the initial state.
    ///
    /// - Input: Search "ger", region "americas", no preferences file
    /// - Output: Input and canonical region set; home screen; light theme in memory
    fn runtime_initial_state_from_options() {
        let options = RunOptions {
            search: Some("ger".into()),
            region: Some("americas".into()),
            ..RunOptions::default()
        };
        let app = initialize_app_state(&options);
        assert_eq!(app.input, "ger");
        assert_eq!(app.region_filter.as_deref(), Some("Americas"));
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.theme.mode(), ThemeMode::Light);
        assert!(app.catalog.is_loading());
    }
}
