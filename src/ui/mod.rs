//! Rendering for the Wherein TUI.
//!
//! `ui` paints the background and header, then hands the body area to the
//! renderer of the active screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, Screen};

/// Detail screen rendering.
mod details;
/// Title bar with the theme toggle hint.
mod header;
/// Catalog list screen rendering.
mod home;

/// Height of the header bar in rows.
const HEADER_HEIGHT: u16 = 3;

/// What: Render one frame for the current state.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; the list widget state is updated while rendering
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = app.theme.palette();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
        .split(area);

    header::render_header(f, app, chunks[0]);
    match app.screen {
        Screen::Home => home::render_home(f, app, chunks[1]),
        Screen::Detail => details::render_details(f, app, chunks[1]),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{Terminal, backend::TestBackend};

    use crate::state::AppState;

    /// What: Render the full UI into an in-memory buffer and return its text.
    ///
    /// Inputs:
    /// - `app`: State to render
    /// - `width`/`height`: Buffer size
    ///
    /// Output:
    /// - All cell symbols concatenated row by row, rows separated by newlines.
    pub fn render_to_string(app: &mut AppState, width: u16, height: u16) -> String {
        let mut term = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        term.draw(|f| super::ui(f, app)).expect("draw");
        let buf = term.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}
