use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{
    cycle_region_filter, move_selection, open_detail, refresh_display_list, selected_code,
    set_search_text,
};
use crate::state::{AppState, DetailRequest};
use crate::theme::KeyMap;

/// Rows moved by PageUp/PageDown.
const PAGE_STEP: isize = 10;

/// What: Handle a key on the home (catalog list) screen.
///
/// Inputs:
/// - `code`/`mods`: Pressed key and normalized modifiers
/// - `app`: Mutable application state
/// - `detail_tx`: Channel to the detail worker
///
/// Output:
/// - `true` when Esc is pressed with no search text and no region filter (quit).
///
/// Details:
/// - Typing edits the search text; the list is re-derived locally, no fetch.
pub fn handle_home_key(
    code: KeyCode,
    mods: KeyModifiers,
    app: &mut AppState,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) -> bool {
    if KeyMap::hit(&app.keymap.region_next, code, mods) {
        cycle_region_filter(app, true);
        return false;
    }
    if KeyMap::hit(&app.keymap.region_prev, code, mods) {
        cycle_region_filter(app, false);
        return false;
    }
    match code {
        KeyCode::Char(ch) if !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            let mut text = app.input.clone();
            text.push(ch);
            set_search_text(app, text);
        }
        KeyCode::Backspace => {
            if !app.input.is_empty() {
                let mut text = app.input.clone();
                text.pop();
                set_search_text(app, text);
            }
        }
        KeyCode::Up => move_selection(app, -1),
        KeyCode::Down => move_selection(app, 1),
        KeyCode::PageUp => move_selection(app, -PAGE_STEP),
        KeyCode::PageDown => move_selection(app, PAGE_STEP),
        KeyCode::Enter => {
            if let Some(code) = selected_code(app) {
                open_detail(app, &code, detail_tx);
            }
        }
        KeyCode::Esc => {
            if app.input.is_empty() && app.region_filter.is_none() {
                return true;
            }
            app.input.clear();
            app.region_filter = None;
            refresh_display_list(app);
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::apply_catalog_result;
    use crate::state::{Country, CountryName, Screen};

    fn ready_app() -> AppState {
        let mk = |code: &str, name: &str, region: &str| Country {
            code: code.to_string(),
            name: CountryName {
                common: name.to_string(),
                ..CountryName::default()
            },
            region: Some(region.to_string()),
            ..Country::default()
        };
        let mut app = AppState::default();
        apply_catalog_result(
            &mut app,
            Ok(vec![
                mk("DEU", "Germany", "Europe"),
                mk("USA", "United States", "Americas"),
                mk("FRA", "France", "Europe"),
            ]),
        );
        app
    }

    fn press(app: &mut AppState, code: KeyCode, tx: &mpsc::UnboundedSender<DetailRequest>) -> bool {
        handle_home_key(code, KeyModifiers::empty(), app, tx)
    }

    #[test]
    /// What: Typing and Backspace edit the search text and re-derive the list.
    ///
    /// - Input: 'F', 'r', Backspace
    /// - Output: "Fr" lists France; after Backspace "F" lists France only
    fn home_typing_filters_list() {
        let mut app = ready_app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _ = handle_home_key(KeyCode::Char('F'), KeyModifiers::SHIFT, &mut app, &tx);
        let _ = press(&mut app, KeyCode::Char('r'), &tx);
        assert_eq!(app.input, "Fr");
        assert_eq!(app.display.len(), 1);
        assert_eq!(app.display[0].code, "FRA");
        let _ = press(&mut app, KeyCode::Backspace, &tx);
        assert_eq!(app.input, "F");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Enter opens the highlighted country.
    ///
    /// - Input: Down, Enter on the featured list (DEU, USA)
    /// - Output: Detail request for USA; detail screen active
    fn home_enter_opens_detail() {
        let mut app = ready_app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _ = press(&mut app, KeyCode::Down, &tx);
        let _ = press(&mut app, KeyCode::Enter, &tx);
        let req = rx.try_recv().expect("detail request");
        assert_eq!(req.code, "USA");
        assert_eq!(app.screen, Screen::Detail);
    }

    #[test]
    /// What: Esc clears search and filter first, then quits.
    ///
    /// - Input: Type "x", Tab, Esc, Esc
    /// - Output: First Esc clears both and stays; second Esc quits
    fn home_esc_clears_then_quits() {
        let mut app = ready_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        let _ = press(&mut app, KeyCode::Char('x'), &tx);
        let _ = press(&mut app, KeyCode::Tab, &tx);
        assert_eq!(app.region_filter.as_deref(), Some("Africa"));
        assert!(!press(&mut app, KeyCode::Esc, &tx));
        assert!(app.input.is_empty());
        assert!(app.region_filter.is_none());
        assert_eq!(app.display.len(), 2);
        assert!(press(&mut app, KeyCode::Esc, &tx));
    }
}
