use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::logic::format::{format_count, or_placeholder};
use crate::state::{AppState, CatalogState, DisplayEntry};
use crate::theme::Theme;
use crate::util::fit_to_width;

/// Text shown when the catalog is ready but nothing matches.
pub const EMPTY_LIST_TEXT: &str = "No countries found. Try another search.";
/// Placeholder inside the empty search field.
const SEARCH_PLACEHOLDER: &str = "Search for a country...";

/// Column widths of a list row: name, population, region.
const NAME_W: usize = 32;
const POP_W: usize = 15;
const REGION_W: usize = 10;

/// One list row: name, population, region and capital in fixed-width columns.
fn row_line(entry: &DisplayEntry, th: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            fit_to_width(&entry.name, NAME_W),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            fit_to_width(&format_count(entry.population), POP_W),
            Style::default().fg(th.subtext0),
        ),
        Span::raw(" "),
        Span::styled(
            fit_to_width(&or_placeholder(entry.region.as_deref()), REGION_W),
            Style::default().fg(th.subtext0),
        ),
        Span::raw(" "),
        Span::styled(
            or_placeholder(entry.capital.as_deref()),
            Style::default().fg(th.subtext0),
        ),
    ])
}

/// Render the search field and the region filter label.
fn render_controls(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme.palette();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(area);

    let input = if app.input.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(th.overlay1))
    } else {
        Span::styled(app.input.clone(), Style::default().fg(th.text))
    };
    let search = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        input,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay1))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(search, cols[0]);

    let region = app.region_filter.as_deref().unwrap_or("All");
    let next = app
        .keymap
        .region_next
        .first()
        .map(crate::theme::KeyChord::label)
        .unwrap_or_default();
    let filter = Paragraph::new(Line::from(vec![
        Span::styled(region.to_string(), Style::default().fg(th.text)),
        Span::styled(format!("  [{next}]"), Style::default().fg(th.subtext0)),
    ]))
    .block(
        Block::default()
            .title(Span::styled(
                " Filter by Region ",
                Style::default().fg(th.subtext0),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay1))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(filter, cols[1]);
}

/// Render the catalog list, or the loading/error/empty status in its place.
fn render_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = app.theme.palette();
    let block = Block::default()
        .title(Span::styled(
            format!(" Countries ({}) ", app.display.len()),
            Style::default().fg(th.mauve),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1));

    let status = match &app.catalog {
        CatalogState::Loading => Some(("Loading...".to_string(), th.yellow)),
        CatalogState::Failed(msg) => Some((msg.clone(), th.red)),
        CatalogState::Ready(_) if app.display.is_empty() => {
            Some((EMPTY_LIST_TEXT.to_string(), th.subtext0))
        }
        CatalogState::Ready(_) => None,
    };
    if let Some((text, color)) = status {
        let p = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = app
        .display
        .iter()
        .map(|e| ListItem::new(row_line(e, &th)))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.base).bg(th.sapphire))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the key hint line.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme.palette();
    let label = |chords: &[crate::theme::KeyChord]| {
        chords
            .first()
            .map(crate::theme::KeyChord::label)
            .unwrap_or_default()
    };
    let hint = format!(
        " [↑/↓] Move  [Enter] Details  [{}/{}] Region  [Esc] Clear/Quit  [{}] Exit",
        label(&app.keymap.region_next),
        label(&app.keymap.region_prev),
        label(&app.keymap.exit),
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(th.subtext0)))),
        area,
    );
}

/// Render the home screen into `area`.
pub fn render_home(f: &mut Frame, app: &mut AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    render_controls(f, app, rows[0]);
    render_list(f, app, rows[1]);
    render_footer(f, app, rows[2]);
}

#[cfg(test)]
mod tests {
    use crate::logic::{apply_catalog_result, set_search_text};
    use crate::sources::FetchError;
    use crate::state::{AppState, Country, CountryName};
    use crate::ui::test_support::render_to_string;

    fn germany() -> Country {
        Country {
            code: "DEU".into(),
            name: CountryName {
                common: "Germany".into(),
                ..CountryName::default()
            },
            population: Some(83_240_525),
            region: Some("Europe".into()),
            capital_cities: vec!["Berlin".into()],
            ..Country::default()
        }
    }

    #[test]
    /// What: The list shows formatted rows once the catalog is ready.
    ///
    /// - Input: Catalog with Germany
    /// - Output: Title, name, grouped population, region and capital on screen
    fn home_renders_rows() {
        let mut app = AppState::default();
        apply_catalog_result(&mut app, Ok(vec![germany()]));
        let screen = render_to_string(&mut app, 100, 20);
        assert!(screen.contains("Where in the world?"));
        assert!(screen.contains("Germany"));
        assert!(screen.contains("83,240,525"));
        assert!(screen.contains("Europe"));
        assert!(screen.contains("Berlin"));
    }

    #[test]
    /// What: Loading, failure and empty states replace the list.
    ///
    /// - Input: Fresh state; failed catalog; ready catalog with unmatched search
    /// - Output: "Loading...", the failure message, the empty-list text
    fn home_renders_status_states() {
        let mut app = AppState::default();
        assert!(render_to_string(&mut app, 100, 20).contains("Loading..."));

        let mut failed = AppState::default();
        apply_catalog_result(&mut failed, Err(FetchError::Network("down".into())));
        assert!(render_to_string(&mut failed, 100, 20).contains("Failed to load countries."));

        let mut empty = AppState::default();
        apply_catalog_result(&mut empty, Ok(vec![germany()]));
        set_search_text(&mut empty, "zzz");
        assert!(render_to_string(&mut empty, 100, 20).contains(super::EMPTY_LIST_TEXT));
    }
}
