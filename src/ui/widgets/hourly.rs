use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
};

use super::shared::panel_block;
use crate::{
    cli::IconMode,
    domain::{
        projection::{HourlySlot, project_hourly},
        weather::{ForecastBundle, round_temp},
    },
    ui::theme::{Theme, temp_color},
};

const SLOT_WIDTH: u16 = 6;
const CHART_MIN_HEIGHT: u16 = 10;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    bundle: &ForecastBundle,
    icon_mode: IconMode,
    theme: &Theme,
) {
    let slots: Vec<HourlySlot> = project_hourly(&bundle.hourly, bundle.local_now()).collect();
    render_slots(frame, area, &slots, icon_mode, theme);
}

pub(super) fn render_slots(
    frame: &mut Frame,
    area: Rect,
    slots: &[HourlySlot],
    icon_mode: IconMode,
    theme: &Theme,
) {
    let block = panel_block(" Next 24 hours ".to_string(), theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if slots.is_empty() {
        frame.render_widget(
            Paragraph::new("No hourly data").style(Style::default().fg(theme.muted_text)),
            inner,
        );
        return;
    }

    if inner.height >= CHART_MIN_HEIGHT {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(4)])
            .split(inner);
        render_strip(frame, chunks[0], slots, icon_mode, theme);
        render_chart(frame, chunks[1], slots, theme);
    } else {
        render_strip(frame, inner, slots, icon_mode, theme);
    }
}

fn render_strip(
    frame: &mut Frame,
    area: Rect,
    slots: &[HourlySlot],
    icon_mode: IconMode,
    theme: &Theme,
) {
    let visible = usize::from(area.width / SLOT_WIDTH).clamp(1, slots.len());
    let slice = &slots[..visible];

    let muted = Style::default().fg(theme.muted_text);
    let times = Row::new(slice.iter().enumerate().map(|(idx, slot)| {
        if idx == 0 {
            Cell::from("Now").style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Cell::from(slot.label.clone()).style(muted)
        }
    }));
    let icons = Row::new(
        slice
            .iter()
            .map(|slot| Cell::from(slot.icon.glyph(icon_mode)).style(Style::default().fg(theme.accent))),
    );
    let temps = Row::new(slice.iter().map(|slot| match slot.temperature_c {
        Some(temp) => Cell::from(format!("{}°", round_temp(temp)))
            .style(Style::default().fg(temp_color(theme, temp))),
        None => Cell::from("--").style(muted),
    }));

    let widths = vec![Constraint::Length(SLOT_WIDTH); slice.len()];
    let table = Table::new(vec![times, icons, temps], widths).column_spacing(0);
    frame.render_widget(table, area);
}

#[allow(clippy::cast_precision_loss)]
fn render_chart(frame: &mut Frame, area: Rect, slots: &[HourlySlot], theme: &Theme) {
    let points: Vec<(f64, f64)> = slots
        .iter()
        .enumerate()
        .filter_map(|(idx, slot)| slot.temperature_c.map(|t| (idx as f64, f64::from(t))))
        .collect();
    if points.is_empty() {
        return;
    }

    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, t)| {
            (lo.min(t), hi.max(t))
        });
    let low = (min - 1.0).floor();
    let high = (max + 1.0).ceil();
    let last_x = (slots.len().saturating_sub(1)).max(1) as f64;

    let first_label = slots.first().map(|s| s.label.clone()).unwrap_or_default();
    let last_label = slots.last().map(|s| s.label.clone()).unwrap_or_default();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.accent))
        .data(&points);
    let muted = Style::default().fg(theme.muted_text);
    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .bounds([0.0, last_x])
                .style(muted)
                .labels([Span::raw(first_label), Span::raw(last_label)]),
        )
        .y_axis(
            Axis::default()
                .bounds([low, high])
                .style(muted)
                .labels([Span::raw(format!("{low:.0}°")), Span::raw(format!("{high:.0}°"))]),
        );
    frame.render_widget(chart, area);
}
