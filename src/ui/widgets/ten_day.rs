use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::{degrees, measure, panel_block, percent};
use crate::{cli::IconMode, domain::projection::DayCard, ui::theme::Theme};

/// Cards per row; narrow terminals fall back to fewer columns.
fn columns_for(width: u16) -> usize {
    match width {
        w if w >= 110 => 5,
        w if w >= 66 => 3,
        w if w >= 44 => 2,
        _ => 1,
    }
}

pub fn render(frame: &mut Frame, area: Rect, cards: &[DayCard], icon_mode: IconMode, theme: &Theme) {
    let columns = columns_for(area.width);
    let rows: Vec<&[DayCard]> = cards.chunks(columns).collect();
    if rows.is_empty() {
        return;
    }

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (card, cell) in row.iter().zip(cells.iter()) {
            render_card(frame, *cell, card, icon_mode, theme);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &DayCard, icon_mode: IconMode, theme: &Theme) {
    let block = panel_block(format!(" {} ", card.date.format("%a %d %b")), theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let muted = Style::default().fg(theme.muted_text);
    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", card.entry.icon.glyph(icon_mode), card.entry.description),
            Style::default().fg(theme.accent),
        )),
        Line::from(vec![
            Span::styled(
                degrees(card.max_display),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" / ", muted),
            Span::styled(degrees(card.min_display), muted),
        ]),
        Line::from(Span::styled(
            format!(
                "{} {}",
                measure(card.precipitation_sum_mm, "mm"),
                percent(card.precipitation_probability_max)
            ),
            muted,
        )),
        Line::from(Span::styled(
            format!(
                "{} UV {}",
                measure(card.wind_speed_max_ms, "m/s"),
                card.uv_index_max
                    .map_or_else(|| "--".to_string(), |uv| format!("{uv:.0}"))
            ),
            muted,
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
