use crossterm::event::KeyCode;
use tokio::sync::mpsc;

use crate::logic::{back_to_home, move_border_selection, open_detail, selected_border_code};
use crate::state::{AppState, DetailRequest, DetailState};

/// What: Handle a key on the detail screen.
///
/// Inputs:
/// - `code`: Pressed key
/// - `app`: Mutable application state
/// - `detail_tx`: Channel to the detail worker
///
/// Details:
/// - Esc/Backspace return to the list without refetching the catalog.
/// - Left/Right/Tab/Shift+Tab move between border entries; Enter opens one.
/// - `o` opens the flag image in the desktop's default viewer.
pub fn handle_detail_key(
    code: KeyCode,
    app: &mut AppState,
    detail_tx: &mpsc::UnboundedSender<DetailRequest>,
) {
    match code {
        KeyCode::Esc | KeyCode::Backspace => back_to_home(app),
        KeyCode::Left | KeyCode::BackTab => move_border_selection(app, -1),
        KeyCode::Right | KeyCode::Tab => move_border_selection(app, 1),
        KeyCode::Enter => {
            if let Some(code) = selected_border_code(app) {
                open_detail(app, &code, detail_tx);
            }
        }
        KeyCode::Char('o') => {
            if let DetailState::Ready(detail) = &app.detail
                && let Some(url) = detail.country.flag_url()
            {
                crate::util::open_url(url);
            }
        }
        _ => {}
    }
}
