use std::fmt::Display;

use crate::error::AppResult;
use crate::models::MovieSummary;

/// Monotonically increasing id of one submitted search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle phase of the current search
///
/// Movies and error text live inside their variants, so a state can never
/// carry both, and `Loading` carries neither.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(Vec<MovieSummary>),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Current result set, if the last search succeeded
    pub fn movies(&self) -> Option<&[MovieSummary]> {
        match self {
            RequestState::Success(movies) => Some(movies),
            _ => None,
        }
    }

    /// Current error text, if the last search failed
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success(_) => "success",
            RequestState::Failed(_) => "failed",
        }
    }
}

/// What a finished backend call means for the search state
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<MovieSummary>),
    Failed(String),
}

impl From<AppResult<Vec<MovieSummary>>> for SearchOutcome {
    fn from(result: AppResult<Vec<MovieSummary>>) -> Self {
        match result {
            Ok(movies) => SearchOutcome::Found(movies),
            Err(e) => {
                tracing::warn!(error = %e, "Search failed");
                SearchOutcome::Failed(e.user_message())
            }
        }
    }
}
