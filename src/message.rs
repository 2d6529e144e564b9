//! Messages and effects.
//!
//! Input events and finished background tasks are both turned into an
//! [`AppMessage`]. `update` consumes messages and hands back [`Effect`]s, the
//! only work that leaves the event-loop thread.

use crate::state::{PendingSearch, RequestToken, SearchOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Noop,
    Quit,

    // Query input
    InsertChar(char),
    DeleteChar,
    ClearQuery,
    Submit,

    FocusNext,
    FocusPrev,

    // Suggestions
    SuggestionNext,
    SuggestionPrev,
    ActivateSuggestion,

    // Result cards
    CardNext,
    CardPrev,
    ToggleCard,

    // Background completions
    SearchResolved {
        token: RequestToken,
        outcome: SearchOutcome,
    },
    PosterFailed {
        token: RequestToken,
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run the backend call for a search that just entered `Loading`
    Search(PendingSearch),
    /// Try to load the posters of the result set issued under `token`
    LoadPosters {
        token: RequestToken,
        posters: Vec<(usize, String)>,
    },
}
