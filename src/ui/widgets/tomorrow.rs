use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::{degrees, measure, panel_block, percent};
use crate::{
    cli::IconMode,
    domain::{projection::TomorrowView, weather::round_temp},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, view: &TomorrowView, icon_mode: IconMode, theme: &Theme) {
    let block = panel_block(format!(" {} ", view.date.format("%A, %d %B")), theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(theme.muted_text);
    let row = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{name:<16}"), label),
            Span::styled(value, Style::default().fg(theme.text)),
        ])
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", degrees(view.average_c)),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} {}", view.entry.icon.glyph(icon_mode), view.entry.description),
                Style::default().fg(theme.accent),
            ),
        ]),
        Line::default(),
        row("High", degrees(view.temperature_max_c.map(round_temp))),
        row("Low", degrees(view.temperature_min_c.map(round_temp))),
        row("Wind up to", measure(view.wind_speed_max_ms, "m/s")),
        row("Precipitation", measure(view.precipitation_sum_mm, "mm")),
        row("Chance", percent(view.precipitation_probability_max)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::projection::project_tomorrow,
        test_support::sample_bundle,
        ui::{theme::theme_for, widgets::buffer_text},
    };
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn renders_average_and_extremes() {
        let mut bundle = sample_bundle();
        bundle.daily[1].temperature_max_c = Some(10.0);
        bundle.daily[1].temperature_min_c = Some(4.0);
        bundle.daily[1].precipitation_probability_max = None;
        let view = project_tomorrow(&bundle).expect("tomorrow view");
        let theme = theme_for(view.entry.icon);

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
        terminal
            .draw(|frame| render(frame, frame.area(), &view, IconMode::Ascii, &theme))
            .expect("draw");

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("7° RAN Slight rain"));
        assert!(text.contains("10°"));
        assert!(text.contains("Friday, 13 February"));
        assert!(text.contains("Chance          --"));
    }
}
