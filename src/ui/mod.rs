pub mod theme;
pub mod widgets;

use chrono::{Local, Timelike};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::{
    app::state::{AppMode, AppState},
    domain::{
        projection::{Period, Projection},
        weather::{UNKNOWN_ENTRY, WeatherIcon, describe},
    },
    resilience::freshness::FreshnessState,
    ui::theme::{Theme, theme_for},
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < 30 || area.height < 15 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 30x15.")
            .block(Block::default().borders(Borders::ALL).title("weather"));
        frame.render_widget(warning, area);
        return;
    }

    let theme = theme_for(current_icon(state));
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.surface).fg(theme.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], state, &theme);
    render_body(frame, chunks[1], state, &theme);
    render_status_line(frame, chunks[2], state, &theme);
    render_status_badge(frame, area, state);

    if state.search.open {
        widgets::search::render(frame, centered_rect(60, 60, area), &state.search, &theme);
    }
}

fn current_icon(state: &AppState) -> WeatherIcon {
    state
        .weather
        .as_ref()
        .and_then(|bundle| bundle.current.as_ref())
        .map_or(UNKNOWN_ENTRY.icon, |current| {
            describe(
                current.weather_code,
                current.time.map(|t| t.hour()),
            )
            .icon
        })
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let place = state
        .displayed_place
        .as_ref()
        .or(state.selected_place.as_ref())
        .map_or_else(|| "Locating...".to_string(), |p| p.label());
    let title = Line::from(vec![
        Span::styled(
            place,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", Local::now().format("%H:%M")),
            Style::default().fg(theme.muted_text),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), rows[0]);

    let selected = Period::ALL
        .iter()
        .position(|p| *p == state.period)
        .unwrap_or_default();
    let tabs = Tabs::new(
        Period::ALL
            .iter()
            .enumerate()
            .map(|(idx, p)| format!("{} {}", idx + 1, p.title())),
    )
    .select(selected)
    .style(Style::default().fg(theme.muted_text))
    .highlight_style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    );
    frame.render_widget(tabs, rows[1]);
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (Some(bundle), Some(projection)) = (state.weather.as_ref(), state.projection()) else {
        let text = match state.mode {
            AppMode::Error => "No forecast available. Press r to retry or / to search.",
            _ => state.loading_message.as_str(),
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(theme.muted_text)),
            area,
        );
        return;
    };

    match projection {
        Ok(Projection::Today(view)) => {
            widgets::today::render(frame, area, &view, bundle, state.icon_mode, theme);
        }
        Ok(Projection::Tomorrow(view)) => {
            widgets::tomorrow::render(frame, area, &view, state.icon_mode, theme);
        }
        Ok(Projection::TenDays(cards)) => {
            widgets::ten_day::render(frame, area, &cards, state.icon_mode, theme);
        }
        Err(err) => frame.render_widget(
            Paragraph::new(err.status_message()).style(Style::default().fg(theme.warning)),
            area,
        ),
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = if let Some(error) = &state.last_error {
        Line::from(Span::styled(
            error.status_message(),
            Style::default().fg(theme.danger),
        ))
    } else if state.fetch_in_flight {
        Line::from(Span::styled(
            state.loading_message.clone(),
            Style::default().fg(theme.muted_text),
        ))
    } else {
        let updated = state
            .refresh_meta
            .age_minutes()
            .map_or_else(String::new, |mins| format!("updated {mins}m ago  "));
        Line::from(Span::styled(
            format!("{updated}1-3/Tab view  / search  r refresh  q quit"),
            Style::default().fg(theme.muted_text),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_badge(frame: &mut Frame, area: Rect, state: &AppState) {
    let label = match state.refresh_meta.state {
        FreshnessState::Fresh => None,
        FreshnessState::Stale => Some(("⚠ stale", Color::Yellow)),
        FreshnessState::Offline => Some(("⚠ offline", Color::LightRed)),
    };

    if let Some((text, color)) = label {
        let width = (text.chars().count() as u16 + 2).min(area.width);
        let badge_area = Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y,
            width,
            height: 1,
        };
        let badge = Paragraph::new(Line::from(text)).style(
            Style::default()
                .fg(color)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(badge, badge_area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
