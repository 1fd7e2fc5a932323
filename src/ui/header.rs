use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;
use crate::theme::ThemeMode;

/// Application title shown on every screen.
pub const TITLE: &str = "Where in the world?";

/// Render the title bar and the theme toggle hint.
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme.palette();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(th.overlay1))
        .style(Style::default().bg(th.mantle));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(28)])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {TITLE}"),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, cols[0]);

    // Names the mode the toggle switches to.
    let target = match app.theme.mode() {
        ThemeMode::Light => "Dark Mode",
        ThemeMode::Dark => "Light Mode",
    };
    let key = app
        .keymap
        .toggle_theme
        .first()
        .map(crate::theme::KeyChord::label)
        .unwrap_or_default();
    let hint = Paragraph::new(Line::from(vec![
        Span::styled(format!("[{key}] "), Style::default().fg(th.subtext0)),
        Span::styled(target, Style::default().fg(th.text)),
    ]))
    .alignment(ratatui::layout::Alignment::Right);
    f.render_widget(hint, cols[1]);
}
