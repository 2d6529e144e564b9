//! Status area: welcome text, loading indicator, error, or the result cards

use std::ops::Range;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{AppState, CardView, Focus, PosterView, StatusView};
use crate::view::theme::Styles;

pub const WELCOME_TEXT: &str =
    "Enter your movie preferences above to get personalized recommendations!";
pub const LOADING_TEXT: &str = "Finding perfect movies for you...";
pub const NO_RESULTS_TEXT: &str = "No movies found. Try a different search.";
pub const RESULTS_TITLE: &str = " 🎭 Recommended Movies ";
pub const POSTER_PLACEHOLDER: &str = "🎬";

pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    match state.status() {
        StatusView::Welcome => render_message(
            frame,
            area,
            Line::from(vec![
                Span::raw("🎬 "),
                Span::styled(WELCOME_TEXT, Styles::subtitle()),
            ]),
        ),
        StatusView::Loading => render_message(
            frame,
            area,
            Line::from(vec![
                Span::raw("⏳ "),
                Span::styled(LOADING_TEXT, Styles::subtitle()),
            ]),
        ),
        StatusView::Error(message) => render_message(
            frame,
            area,
            Line::from(vec![Span::raw("❌ "), Span::styled(message, Styles::error())]),
        ),
        StatusView::NoResults => render_message(
            frame,
            area,
            Line::from(Span::styled(NO_RESULTS_TEXT, Styles::subtitle())),
        ),
        StatusView::Results(cards) => {
            render_cards(&cards, state.focus == Focus::Results, frame, area)
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, line: Line) {
    let paragraph = Paragraph::new(vec![Line::default(), line])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_cards(cards: &[CardView], focused: bool, frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    let mut selected = 0..0;

    for card in cards {
        let rows = card_lines(card, focused);
        if card.selected {
            selected = lines.len()..lines.len() + rows.len();
        }
        lines.extend(rows);
        lines.push(Line::default());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
        .title(RESULTS_TITLE);

    let scroll = scroll_offset(&lines, selected, area);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Rows to scroll so the selected card's lines (`selected`) fit inside the
/// bordered `area`. A card taller than the viewport keeps its title on top.
fn scroll_offset(lines: &[Line], selected: Range<usize>, area: Rect) -> u16 {
    let width = area.width.saturating_sub(2);
    let visible = usize::from(area.height.saturating_sub(2));

    let start = wrapped_height(&lines[..selected.start], width);
    let end = wrapped_height(&lines[..selected.end], width);

    u16::try_from(end.saturating_sub(visible).min(start)).unwrap_or(u16::MAX)
}

/// Rows `lines` take up once wrapped to `width`
fn wrapped_height(lines: &[Line], width: u16) -> usize {
    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width)
}

/// Lines for one card; collapsed cards are two lines, expanded ones add the
/// detail rows and plot
pub fn card_lines<'a>(card: &CardView<'a>, focused: bool) -> Vec<Line<'a>> {
    let marker = if card.selected && focused { "▶ " } else { "  " };
    let poster = match card.poster {
        PosterView::Image(url) => Span::styled(format!("🖼  {}", url), Styles::subtitle()),
        PosterView::Placeholder => Span::raw(POSTER_PLACEHOLDER),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(marker),
            Span::styled(card.title, Styles::card_title(card.selected)),
        ]),
        Line::from(vec![Span::raw("    "), poster]),
    ];

    let mut info = vec![Span::raw("    📅 "), Span::raw(card.year)];
    if let Some(rating) = card.rating {
        info.push(Span::raw("   ⭐ "));
        info.push(Span::raw(rating));
    }
    info.push(Span::raw("   "));
    info.push(Span::styled(card.toggle_label(), Styles::toggle()));
    lines.push(Line::from(info));

    if let Some(details) = card.details {
        let icons = ["⏱️", "🌍", "🎭", "🎬", "👥"];
        for (icon, (label, value)) in icons.iter().zip(details.rows()) {
            lines.push(Line::from(vec![
                Span::raw(format!("    {} ", icon)),
                Span::styled(format!("{}: ", label), Styles::label()),
                Span::raw(value),
            ]));
        }
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled("Plot: ", Styles::label()),
            Span::raw(details.plot),
        ]));
    }

    lines
}
