use ratatui::style::{Color, Modifier, Style};

pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    pub fn disabled() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn suggestion(highlighted: bool) -> Style {
        if highlighted {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn card_title(selected: bool) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if selected {
            style.fg(Color::Yellow)
        } else {
            style.fg(Color::White)
        }
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    pub fn toggle() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn hint_key() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Gray)
    }
}
