//! Event handling layer for the Wherein TUI.
//!
//! `handle_event` applies global shortcuts and delegates to the handler of
//! the active screen.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, DetailRequest, Screen};
use crate::theme::KeyMap;

mod detail;
mod home;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    // Terminals report Shift+Tab as BackTab with SHIFT set; bindings store it bare.
    let mods = if ke.code == KeyCode::BackTab {
        ke.modifiers.difference(KeyModifiers::SHIFT)
    } else {
        ke.modifiers
    };

    if KeyMap::hit(&app.keymap.exit, ke.code, mods) {
        return true;
    }
    if KeyMap::hit(&app.keymap.toggle_theme, ke.code, mods) {
        let theme_mode = app.theme.toggle();
        tracing::debug!(mode = theme_mode.as_str(), "theme toggled");
        return false;
    }

    match app.screen {
        Screen::Home => home::handle_home_key(ke.code, mods, app, detail_tx),
        Screen::Detail => {
            detail::handle_detail_key(ke.code, app, detail_tx);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, mods: KeyModifiers) -> CEvent {
        CEvent::Key(KeyEvent::new(code, mods))
    }

    #[test]
    /// What: The exit chord quits from any screen.
    ///
    /// - Input: Ctrl+C on home and on detail
    /// - Output: `true` both times
    fn events_exit_chord_quits() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(handle_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app, &tx));
        app.screen = Screen::Detail;
        assert!(handle_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app, &tx));
    }

    #[test]
    /// What: The theme chord toggles the in-memory theme without touching the input.
    ///
    /// - Input: Ctrl+T twice
    /// - Output: Dark then Light; search text still empty
    fn events_theme_toggle() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(!handle_event(&key(KeyCode::Char('t'), KeyModifiers::CONTROL), &mut app, &tx));
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
        let _ = handle_event(&key(KeyCode::Char('t'), KeyModifiers::CONTROL), &mut app, &tx);
        assert_eq!(app.theme.mode(), ThemeMode::Light);
        assert!(app.input.is_empty());
    }

    #[test]
    /// What: Shift+Tab as reported by terminals steps the region filter back.
    ///
    /// - Input: BackTab with SHIFT on the home screen
    /// - Output: Region filter wraps to the last region
    fn events_backtab_with_shift_matches_binding() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let _ = handle_event(&key(KeyCode::BackTab, KeyModifiers::SHIFT), &mut app, &tx);
        assert_eq!(app.region_filter.as_deref(), Some("Oceania"));
    }

    #[test]
    /// What: Key releases are ignored.
    ///
    /// - Input: Release event for 'a'
    /// - Output: No input change
    fn events_ignore_release() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut ke = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty());
        ke.kind = KeyEventKind::Release;
        assert!(!handle_event(&CEvent::Key(ke), &mut app, &tx));
        assert!(app.input.is_empty());
    }
}
