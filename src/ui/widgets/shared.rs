use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

use crate::ui::theme::Theme;

pub(super) fn panel_block(title: String, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(theme.text).bg(theme.surface))
        .border_style(Style::default().fg(theme.border))
}

pub(super) fn popup_block(title: &'static str, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(
            Style::default()
                .fg(theme.text)
                .bg(theme.popup_surface),
        )
        .border_style(
            Style::default()
                .fg(theme.popup_border)
                .bg(theme.popup_surface),
        )
}

pub(super) fn degrees(value: Option<i32>) -> String {
    value.map_or_else(|| "--".to_string(), |v| format!("{v}°"))
}

pub(super) fn measure(value: Option<f32>, unit: &str) -> String {
    value.map_or_else(|| "--".to_string(), |v| format!("{v:.1} {unit}"))
}

pub(super) fn percent(value: Option<f32>) -> String {
    value.map_or_else(|| "--".to_string(), |v| format!("{v:.0}%"))
}
