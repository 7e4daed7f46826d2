use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{
    hourly,
    shared::{measure, panel_block},
};
use crate::{
    cli::IconMode,
    domain::{projection::TodayView, weather::ForecastBundle},
    ui::theme::{Theme, temp_color},
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &TodayView,
    bundle: &ForecastBundle,
    icon_mode: IconMode,
    theme: &Theme,
) {
    let hourly_height = if area.height >= 24 { 14 } else { 6 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(hourly_height)])
        .split(area);

    let block = panel_block(" Now ".to_string(), theme);
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);
    frame.render_widget(Paragraph::new(metric_lines(view, icon_mode, theme)), inner);

    hourly::render(frame, chunks[1], bundle, icon_mode, theme);
}

fn metric_lines(view: &TodayView, icon_mode: IconMode, theme: &Theme) -> Vec<Line<'static>> {
    let current = &view.current;
    let label = Style::default().fg(theme.muted_text);
    let value = Style::default().fg(theme.text);
    let pair = |name: &'static str, text: String| {
        vec![
            Span::styled(format!("{name:<12}"), label),
            Span::styled(format!("{text:<14}"), value),
        ]
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}°C ", view.temperature()),
                Style::default()
                    .fg(temp_color(theme, current.temperature_c))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} {}", view.entry.icon.glyph(icon_mode), view.entry.description),
                Style::default().fg(theme.accent),
            ),
        ]),
        Line::from(Span::styled(
            format!("Feels like {}°C", view.feels_like()),
            label,
        )),
        Line::default(),
    ];

    let mut row = pair("Humidity", format!("{:.0}%", current.relative_humidity_pct));
    row.extend(pair("Wind", format!("{:.1} m/s", current.wind_speed_ms)));
    lines.push(Line::from(row));

    let mut row = pair("Pressure", measure(current.pressure_hpa, "hPa"));
    row.extend(pair(
        "Visibility",
        format!("{:.1} km", current.visibility_m / 1000.0),
    ));
    lines.push(Line::from(row));

    let mut row = pair("Precip", format!("{:.1} mm", current.precipitation_mm));
    row.extend(pair("UV index", measure(current.uv_index.or(view.uv_index_max), "")));
    lines.push(Line::from(row));

    let mut row = pair("Dew point", format!("{:.0}°C", view.dew_point_c));
    let sun = match (view.sunrise, view.sunset) {
        (Some(rise), Some(set)) => format!("{} / {}", rise.format("%H:%M"), set.format("%H:%M")),
        _ => "--".to_string(),
    };
    row.extend(pair("Sun", sun));
    lines.push(Line::from(row));

    lines
}
