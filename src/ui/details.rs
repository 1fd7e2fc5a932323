use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::logic::DetailFields;
use crate::logic::format::or_placeholder;
use crate::state::{AppState, BorderState, CountryDetail, DetailState};
use crate::theme::Theme;

/// Text shown when a country declares no borders.
pub const NO_BORDERS_TEXT: &str = "No border countries";
/// Heading of the not-found view.
pub const NOT_FOUND_TEXT: &str = "Country not found";

/// `Label: value` line used in the field columns.
fn field_line(label: &str, value: &str, th: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.to_string(), Style::default().fg(th.subtext0)),
    ])
}

/// Border chips, the selected one highlighted.
fn border_lines(borders: &BorderState, selected: usize, th: &Theme) -> Vec<Line<'static>> {
    let heading = Line::from(Span::styled(
        "Border Countries:",
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    ));
    match borders {
        BorderState::NoBorders => vec![Line::from(Span::styled(
            NO_BORDERS_TEXT,
            Style::default().fg(th.subtext0),
        ))],
        BorderState::Loading => vec![
            heading,
            Line::from(Span::styled(
                "Loading border countries...",
                Style::default().fg(th.yellow),
            )),
        ],
        BorderState::Resolved(_) | BorderState::Unavailable => {
            let mut chips: Vec<Span<'static>> = Vec::new();
            for (i, b) in borders.entries().iter().enumerate() {
                let style = if i == selected {
                    Style::default().fg(th.base).bg(th.sapphire)
                } else {
                    Style::default().fg(th.text).bg(th.surface1)
                };
                chips.push(Span::styled(format!(" {} ", b.name), style));
                chips.push(Span::raw(" "));
            }
            vec![heading, Line::from(chips)]
        }
    }
}

/// Render a loaded country.
fn render_ready(f: &mut Frame, detail: &CountryDetail, selected: usize, th: &Theme, area: Rect) {
    let country = &detail.country;
    let fields = DetailFields::from(country);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Min(2),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            country.common_name().to_string(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Flag: ", Style::default().fg(th.subtext0)),
            Span::styled(
                or_placeholder(country.flag_url()),
                Style::default().fg(th.sapphire),
            ),
        ]),
    ]);
    f.render_widget(title, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let left = Paragraph::new(vec![
        field_line("Native name", &fields.native_name, th),
        field_line("Population", &fields.population, th),
        field_line("Region", &fields.region, th),
        field_line("Sub Region", &fields.subregion, th),
        field_line("Capital", &fields.capital, th),
    ])
    .wrap(Wrap { trim: true });
    let right = Paragraph::new(vec![
        field_line("Top Level Domain", &fields.top_level_domain, th),
        field_line("Currencies", &fields.currency, th),
        field_line("Languages", &fields.languages, th),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(left, cols[0]);
    f.render_widget(right, cols[1]);

    let borders = Paragraph::new(border_lines(&detail.borders, selected, th))
        .wrap(Wrap { trim: false });
    f.render_widget(borders, rows[2]);
}

/// Render the detail screen into `area`.
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme.palette();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .title(Span::styled(
            " [Esc] Back ",
            Style::default().fg(th.subtext0),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.detail {
        DetailState::Ready(detail) => {
            render_ready(f, detail, app.border_selected, &th, inner);
        }
        DetailState::Loading { .. } | DetailState::Idle => {
            f.render_widget(
                Paragraph::new(Span::styled("Loading...", Style::default().fg(th.yellow))),
                inner,
            );
        }
        DetailState::NotFound { .. } | DetailState::Failed { .. } => {
            let mut lines = vec![Line::from(Span::styled(
                NOT_FOUND_TEXT,
                Style::default().fg(th.red).add_modifier(Modifier::BOLD),
            ))];
            if let DetailState::Failed { message, .. } = &app.detail {
                lines.push(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(th.subtext0),
                )));
            }
            lines.push(Line::from(Span::styled(
                "[Esc] Back to Home",
                Style::default().fg(th.text),
            )));
            f.render_widget(Paragraph::new(lines), inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BorderEntry, Country, CountryName, Flags, Screen};
    use crate::ui::test_support::render_to_string;

    fn detail_app(borders: BorderState) -> AppState {
        let country = Country {
            code: "FRA".into(),
            name: CountryName {
                common: "France".into(),
                ..CountryName::default()
            },
            population: Some(67_391_582),
            flags: Some(Flags {
                png: Some("https://flagcdn.com/w320/fr.png".into()),
                ..Flags::default()
            }),
            ..Country::default()
        };
        AppState {
            screen: Screen::Detail,
            detail: DetailState::Ready(Box::new(CountryDetail { country, borders })),
            ..AppState::default()
        }
    }

    #[test]
    /// What: A loaded country shows its fields, flag URL and border chips.
    ///
    /// - Input: France with resolved borders Andorra and Spain
    /// - Output: Name, flag URL, population, placeholders and both chips rendered
    fn details_render_ready() {
        let mut app = detail_app(BorderState::Resolved(vec![
            BorderEntry {
                name: "Andorra".into(),
                code: "AND".into(),
            },
            BorderEntry {
                name: "Spain".into(),
                code: "ESP".into(),
            },
        ]));
        let screen = render_to_string(&mut app, 110, 24);
        assert!(screen.contains("France"));
        assert!(screen.contains("https://flagcdn.com/w320/fr.png"));
        assert!(screen.contains("67,391,582"));
        assert!(screen.contains("Sub Region: N/A"));
        assert!(screen.contains("Andorra"));
        assert!(screen.contains("Spain"));
    }

    #[test]
    /// What: Countries without borders say so.
    ///
    /// - Input: France with `NoBorders`
    /// - Output: The no-border text
    fn details_render_no_borders() {
        let mut app = detail_app(BorderState::NoBorders);
        assert!(render_to_string(&mut app, 110, 24).contains(NO_BORDERS_TEXT));
    }

    #[test]
    /// What: Not found and failed both render the not-found view.
    ///
    /// - Input: `NotFound`, then `Failed` with a message
    /// - Output: Heading in both; the failure message only for `Failed`
    fn details_render_not_found_and_failed() {
        let mut app = AppState {
            screen: Screen::Detail,
            detail: DetailState::NotFound { code: "XXX".into() },
            ..AppState::default()
        };
        assert!(render_to_string(&mut app, 80, 20).contains(NOT_FOUND_TEXT));
        app.detail = DetailState::Failed {
            code: "XXX".into(),
            message: "Failed to load country details.".into(),
        };
        let screen = render_to_string(&mut app, 80, 20);
        assert!(screen.contains(NOT_FOUND_TEXT));
        assert!(screen.contains("Failed to load country details."));
    }
}
