//! View layer: draws [`AppState`] with ratatui. Reads state, never mutates it.

mod results;
mod search;
mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, Focus};
use theme::Styles;

pub use results::{LOADING_TEXT, NO_RESULTS_TEXT, WELCOME_TEXT};

pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(3), // input
            Constraint::Length(1), // suggestions
            Constraint::Min(3),    // status area
            Constraint::Length(1), // hints
        ])
        .split(frame.area());

    search::render_header(frame, chunks[0]);
    search::render_input(state, frame, chunks[1]);
    search::render_suggestions(state, frame, chunks[2]);
    results::render(state, frame, chunks[3]);
    render_hints(state, frame, chunks[4]);
}

fn render_hints(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut hints = vec![("Tab", "Switch focus")];
    match state.focus {
        Focus::Input => hints.push(("Enter", "Search")),
        Focus::Suggestions => {
            hints.push(("←→", "Pick"));
            hints.push(("Enter", "Search"));
        }
        Focus::Results => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "More/Less"));
        }
    }
    hints.push(("Esc", "Quit"));

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
