//! Client state.
//!
//! Everything the screen shows lives in one [`AppState`]. The search
//! controller owns the request lifecycle, the presenter owns per-card state;
//! both are reached through the same object so transitions stay plain
//! functions over it (see `update`).

pub mod controller;
pub mod expansion;
pub mod presenter;
pub mod request;

pub use controller::{PendingSearch, Resolution, SearchController};
pub use expansion::ExpansionMap;
pub use presenter::{CardDetails, CardView, PosterView, ResultPresenter, StatusView};
pub use request::{RequestState, RequestToken, SearchOutcome};

use crate::models::MovieSummary;

/// Preset queries offered under the input
pub const SUGGESTIONS: [&str; 4] = [
    "action movies",
    "romantic comedies",
    "Christopher Nolan movies",
    "movies like The Matrix",
];

/// Which widget receives keyboard input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    Suggestions,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Suggestions,
            Focus::Suggestions => Focus::Results,
            Focus::Results => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::Results,
            Focus::Suggestions => Focus::Input,
            Focus::Results => Focus::Suggestions,
        }
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub search: SearchController,
    pub presenter: ResultPresenter,
    pub focus: Focus,
    /// Highlighted suggestion button
    pub suggestion: usize,
    /// Probe poster URLs after each successful search
    pub poster_check: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(poster_check: bool) -> Self {
        Self {
            poster_check,
            ..Self::default()
        }
    }

    /// Current result set; empty unless the last search succeeded
    pub fn movies(&self) -> &[MovieSummary] {
        self.search.state().movies().unwrap_or(&[])
    }

    /// Input field and suggestion buttons are disabled while loading
    pub fn input_enabled(&self) -> bool {
        !self.search.is_loading()
    }

    pub fn status(&self) -> StatusView<'_> {
        self.presenter.status(self.search.state())
    }
}
