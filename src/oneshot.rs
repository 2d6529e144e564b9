//! Non-interactive mode: one search, printed as text.
//!
//! Goes through the same controller and presenter as the terminal UI, with
//! every card expanded.

use std::io::Write;

use crate::error::AppResult;
use crate::services::RecommendationProvider;
use crate::state::{PosterView, ResultPresenter, SearchController, StatusView};
use crate::view::{NO_RESULTS_TEXT, WELCOME_TEXT};

/// Run `query` once and print the outcome. Returns `false` when the search
/// failed or there was nothing to search for.
pub async fn run<W: Write>(
    provider: &dyn RecommendationProvider,
    query: &str,
    out: &mut W,
) -> AppResult<bool> {
    let mut controller = SearchController::new();
    let mut presenter = ResultPresenter::new();

    if let Some(pending) = controller.submit(query) {
        let outcome = SearchController::execute(provider, &pending).await;
        controller.resolve(pending.token, outcome);
    }

    let movies = controller.state().movies().unwrap_or(&[]);
    for index in 0..movies.len() {
        presenter.toggle(index, movies);
    }

    match presenter.status(controller.state()) {
        StatusView::Welcome => {
            writeln!(out, "{}", WELCOME_TEXT)?;
            Ok(false)
        }
        // submit/resolve ran to completion above
        StatusView::Loading => Ok(false),
        StatusView::Error(message) => {
            writeln!(out, "❌ {}", message)?;
            Ok(false)
        }
        StatusView::NoResults => {
            writeln!(out, "{}", NO_RESULTS_TEXT)?;
            Ok(true)
        }
        StatusView::Results(cards) => {
            writeln!(out, "🎭 Recommended Movies")?;
            for card in &cards {
                writeln!(out)?;
                writeln!(out, "{}. {} ({})", card.index + 1, card.title, card.year)?;
                if let Some(rating) = card.rating {
                    writeln!(out, "   ⭐ {}", rating)?;
                }
                if let PosterView::Image(url) = card.poster {
                    writeln!(out, "   🖼  {}", url)?;
                }
                if let Some(details) = card.details {
                    for (label, value) in details.rows() {
                        writeln!(out, "   {}: {}", label, value)?;
                    }
                    writeln!(out, "   Plot: {}", details.plot)?;
                }
            }
            Ok(true)
        }
    }
}

/// Print whether the backend answers its health check
pub async fn check_backend<W: Write>(
    provider: &dyn RecommendationProvider,
    out: &mut W,
) -> AppResult<bool> {
    match provider.health_check().await {
        Ok(()) => {
            writeln!(out, "✅ Backend is reachable")?;
            Ok(true)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            writeln!(out, "❌ {}", e.user_message())?;
            Ok(false)
        }
    }
}
