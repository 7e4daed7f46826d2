use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use super::shared::popup_block;
use crate::{
    app::state::{MIN_SUGGEST_CHARS, SearchState},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, search: &SearchState, theme: &Theme) {
    frame.render_widget(Clear, area);
    let block = popup_block(" Search place ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let query = Line::from(vec![
        Span::styled("> ", Style::default().fg(theme.accent)),
        Span::styled(search.query.clone(), Style::default().fg(theme.text)),
        Span::styled("_", Style::default().fg(theme.muted_text)),
    ]);
    frame.render_widget(Paragraph::new(query), chunks[0]);

    let muted = Style::default().fg(theme.muted_text);
    if search.suggestions.is_empty() {
        let hint = if search.trimmed_query().chars().count() < MIN_SUGGEST_CHARS {
            "Type at least two letters"
        } else {
            "Enter searches for this name"
        };
        frame.render_widget(Paragraph::new(hint).style(muted), chunks[2]);
    } else {
        let items: Vec<ListItem> = search
            .suggestions
            .iter()
            .map(|place| ListItem::new(place.label()))
            .collect();
        let list = List::new(items)
            .style(Style::default().fg(theme.text))
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("› ");
        let mut list_state = ListState::default().with_selected(search.selected);
        frame.render_stateful_widget(list, chunks[2], &mut list_state);
    }

    frame.render_widget(
        Paragraph::new("↑/↓ choose  Enter select  Esc close").style(muted),
        chunks[3],
    );
}
