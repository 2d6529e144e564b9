//! State transitions.
//!
//! `update` is the only place that mutates [`AppState`]. It performs no I/O;
//! anything asynchronous is returned as an [`Effect`] for the runtime to run.

use crate::message::{AppMessage, Effect};
use crate::state::{AppState, Focus, Resolution, ResultPresenter, SUGGESTIONS};

pub fn update(state: &mut AppState, msg: AppMessage) -> Vec<Effect> {
    match msg {
        AppMessage::Noop => Vec::new(),

        AppMessage::Quit => {
            state.should_quit = true;
            Vec::new()
        }

        AppMessage::InsertChar(c) => {
            if state.input_enabled() {
                state.search.push_char(c);
            }
            Vec::new()
        }

        AppMessage::DeleteChar => {
            if state.input_enabled() {
                state.search.pop_char();
            }
            Vec::new()
        }

        AppMessage::ClearQuery => {
            if state.input_enabled() {
                state.search.clear_query();
            }
            Vec::new()
        }

        AppMessage::Submit => {
            if !state.input_enabled() {
                return Vec::new();
            }
            state.search.submit_current().map(Effect::Search).into_iter().collect()
        }

        AppMessage::FocusNext => {
            state.focus = state.focus.next();
            Vec::new()
        }

        AppMessage::FocusPrev => {
            state.focus = state.focus.prev();
            Vec::new()
        }

        AppMessage::SuggestionNext => {
            state.suggestion = (state.suggestion + 1) % SUGGESTIONS.len();
            Vec::new()
        }

        AppMessage::SuggestionPrev => {
            state.suggestion = (state.suggestion + SUGGESTIONS.len() - 1) % SUGGESTIONS.len();
            Vec::new()
        }

        AppMessage::ActivateSuggestion => {
            if !state.input_enabled() {
                return Vec::new();
            }
            let suggestion = SUGGESTIONS[state.suggestion % SUGGESTIONS.len()];
            state
                .search
                .activate_suggestion(suggestion)
                .map(Effect::Search)
                .into_iter()
                .collect()
        }

        AppMessage::CardNext => {
            let len = state.movies().len();
            state.presenter.select_next(len);
            Vec::new()
        }

        AppMessage::CardPrev => {
            state.presenter.select_prev();
            Vec::new()
        }

        AppMessage::ToggleCard => {
            let movies = state.search.state().movies().unwrap_or(&[]);
            state.presenter.toggle_selected(movies);
            Vec::new()
        }

        AppMessage::SearchResolved { token, outcome } => {
            match state.search.resolve(token, outcome) {
                Resolution::Succeeded => {
                    state.presenter.reset();
                    if state.poster_check {
                        let posters = ResultPresenter::posters_to_load(state.movies());
                        if !posters.is_empty() {
                            return vec![Effect::LoadPosters { token, posters }];
                        }
                    }
                    Vec::new()
                }
                Resolution::Failed | Resolution::Stale => Vec::new(),
            }
        }

        AppMessage::PosterFailed { token, index } => {
            // Only meaningful for the list that token produced
            if state.search.latest_token() == Some(token) && index < state.movies().len() {
                state.presenter.mark_poster_failed(index);
            }
            Vec::new()
        }
    }
}

/// Whether keystrokes currently edit the query
pub fn typing(state: &AppState) -> bool {
    state.focus == Focus::Input && state.input_enabled()
}
