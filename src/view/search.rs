//! Header, query input and suggestion buttons

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{AppState, Focus, SUGGESTIONS};
use crate::view::theme::Styles;

const PLACEHOLDER: &str = "Enter your movie preference (e.g., 'action movies', 'Leonardo DiCaprio films', 'time travel stories')";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("🎬 PopcornPicks", Styles::title())),
        Line::from(Span::styled(
            "Discover your next favorite movie",
            Styles::subtitle(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

pub fn render_input(state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == Focus::Input;
    let query = state.search.query();

    let mut spans = vec![Span::raw("🔍 ")];
    if query.is_empty() {
        spans.push(Span::styled(PLACEHOLDER, Styles::placeholder()));
    } else if state.input_enabled() {
        spans.push(Span::raw(query));
    } else {
        spans.push(Span::styled(query, Styles::disabled()));
    }
    if !state.input_enabled() {
        spans.push(Span::raw(" ⏳"));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
        .title(" Search ");
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if focused && state.input_enabled() {
        frame.set_cursor_position(cursor_position(area, query));
    }
}

/// Cursor cell after the last query character, clamped inside the input box
fn cursor_position(area: Rect, query: &str) -> (u16, u16) {
    // 🔍 is two cells wide, followed by a space
    let typed = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(4)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2));
    (x, area.y.saturating_add(1))
}

pub fn render_suggestions(state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == Focus::Suggestions;

    let mut spans = vec![Span::styled("Try these examples: ", Styles::subtitle())];
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        let style = if !state.input_enabled() {
            Styles::disabled()
        } else {
            Styles::suggestion(focused && i == state.suggestion)
        };
        spans.push(Span::styled(format!("[ {} ]", suggestion), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_query() {
        let area = Rect::new(0, 2, 100, 3);
        assert_eq!(cursor_position(area, ""), (4, 3));
        assert_eq!(cursor_position(area, "noir"), (8, 3));
    }

    #[test]
    fn test_cursor_clamped_for_huge_query() {
        let area = Rect::new(10, 2, 40, 3);
        let query = "x".repeat(70_000);
        assert_eq!(cursor_position(area, &query), (48, 3));
    }
}
