//! Derives what the status area shows from the search state plus
//! client-local card state (expansion, selection, poster fallbacks).

use std::collections::BTreeSet;

use crate::models::MovieSummary;
use crate::state::expansion::ExpansionMap;
use crate::state::request::RequestState;

/// Poster slot of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterView<'a> {
    Image(&'a str),
    Placeholder,
}

/// Fields revealed when a card is expanded, shown verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDetails<'a> {
    pub runtime: &'a str,
    pub language: &'a str,
    pub genre: &'a str,
    pub director: &'a str,
    pub actors: &'a str,
    pub plot: &'a str,
}

impl<'a> CardDetails<'a> {
    /// Labeled rows in display order; plot is rendered separately
    pub fn rows(&self) -> [(&'static str, &'a str); 5] {
        [
            ("Duration", self.runtime),
            ("Language", self.language),
            ("Genre", self.genre),
            ("Director", self.director),
            ("Actors", self.actors),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub index: usize,
    pub title: &'a str,
    pub year: &'a str,
    /// `None` when the backend sent the absence sentinel
    pub rating: Option<&'a str>,
    pub poster: PosterView<'a>,
    pub selected: bool,
    pub details: Option<CardDetails<'a>>,
}

impl CardView<'_> {
    pub fn is_expanded(&self) -> bool {
        self.details.is_some()
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_expanded() {
            "Less ▲"
        } else {
            "More ▼"
        }
    }
}

/// Content of the status area; exactly one per request state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView<'a> {
    Welcome,
    Loading,
    Error(&'a str),
    NoResults,
    Results(Vec<CardView<'a>>),
}

#[derive(Debug, Default)]
pub struct ResultPresenter {
    expansion: ExpansionMap,
    failed_posters: BTreeSet<usize>,
    selected: usize,
}

impl ResultPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expansion(&self) -> &ExpansionMap {
        &self.expansion
    }

    /// Toggle the card at `index`; no-op when it is outside `movies`
    pub fn toggle(&mut self, index: usize, movies: &[MovieSummary]) -> Option<bool> {
        (index < movies.len()).then(|| self.expansion.toggle(index))
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expansion.is_expanded(index)
    }

    pub fn toggle_selected(&mut self, movies: &[MovieSummary]) -> Option<bool> {
        self.toggle(self.selected, movies)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Forget all per-card state. Called when a new result set replaces the
    /// previous one, since positions no longer refer to the same movies.
    pub fn reset(&mut self) {
        self.expansion.clear();
        self.failed_posters.clear();
        self.selected = 0;
    }

    /// The poster at `index` failed to load; show the placeholder instead
    pub fn mark_poster_failed(&mut self, index: usize) {
        self.failed_posters.insert(index);
    }

    /// Posters worth attempting to load, by card position
    pub fn posters_to_load(movies: &[MovieSummary]) -> Vec<(usize, String)> {
        movies
            .iter()
            .enumerate()
            .filter_map(|(index, movie)| movie.poster().map(|url| (index, url.to_string())))
            .collect()
    }

    pub fn card<'a>(&self, index: usize, movie: &'a MovieSummary) -> CardView<'a> {
        let poster = match movie.poster() {
            Some(url) if !self.failed_posters.contains(&index) => PosterView::Image(url),
            _ => PosterView::Placeholder,
        };

        let details = self.is_expanded(index).then(|| CardDetails {
            runtime: &movie.runtime,
            language: &movie.language,
            genre: &movie.genre,
            director: &movie.director,
            actors: &movie.actors,
            plot: &movie.plot,
        });

        CardView {
            index,
            title: &movie.title,
            year: &movie.year,
            rating: movie.rating(),
            poster,
            selected: index == self.selected,
            details,
        }
    }

    pub fn status<'a>(&self, state: &'a RequestState) -> StatusView<'a> {
        match state {
            RequestState::Idle => StatusView::Welcome,
            RequestState::Loading => StatusView::Loading,
            RequestState::Failed(message) => StatusView::Error(message),
            RequestState::Success(movies) if movies.is_empty() => StatusView::NoResults,
            RequestState::Success(movies) => StatusView::Results(
                movies
                    .iter()
                    .enumerate()
                    .map(|(index, movie)| self.card(index, movie))
                    .collect(),
            ),
        }
    }
}
