use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;
use crate::state::{AppState, Focus};
use crate::update::typing;

/// Wait up to `timeout` for a terminal event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message
pub fn handle_event(event: Event, state: &AppState) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, state),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> AppMessage {
    // Release/Repeat events would double every keystroke on Windows
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }

    // Some terminals report BackTab without the shift modifier
    if DefaultKeymap::FOCUS_PREV.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    match state.focus {
        Focus::Input => handle_input_keys(key, state),
        Focus::Suggestions => handle_suggestion_keys(key, state),
        Focus::Results => handle_result_keys(key),
    }
}

fn handle_input_keys(key: KeyEvent, state: &AppState) -> AppMessage {
    if !typing(state) {
        return AppMessage::Noop;
    }

    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Submit;
    }

    if DefaultKeymap::CLEAR_QUERY.matches(&key) {
        return AppMessage::ClearQuery;
    }

    match key.code {
        KeyCode::Backspace => AppMessage::DeleteChar,
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::InsertChar(c)
        }
        _ => AppMessage::Noop,
    }
}

fn handle_suggestion_keys(key: KeyEvent, state: &AppState) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppMessage::SuggestionPrev,
        KeyCode::Right | KeyCode::Char('l') => AppMessage::SuggestionNext,
        _ if DefaultKeymap::ACTIVATE.matches(&key) && state.input_enabled() => {
            AppMessage::ActivateSuggestion
        }
        _ => AppMessage::Noop,
    }
}

fn handle_result_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTIVATE.matches(&key) || DefaultKeymap::TOGGLE.matches(&key) {
        return AppMessage::ToggleCard;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::CardPrev,
        KeyCode::Down | KeyCode::Char('j') => AppMessage::CardNext,
        _ => AppMessage::Noop,
    }
}
