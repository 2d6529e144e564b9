//! Search lifecycle: query text, request state and the single backend call.

use crate::services::RecommendationProvider;
use crate::state::request::{RequestState, RequestToken, SearchOutcome};

/// A search that has entered `Loading` and still needs its backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub token: RequestToken,
    /// Trimmed query sent to the backend
    pub query: String,
}

/// Effect of a resolution on the search state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Succeeded,
    Failed,
    /// Superseded by a later submission; state untouched
    Stale,
}

/// Owns the query text and the request lifecycle.
///
/// Every submission gets a fresh token. Only the latest issued token may
/// resolve the state, so a slow response to an older query never overwrites
/// a newer one.
#[derive(Debug, Default)]
pub struct SearchController {
    query: String,
    state: RequestState,
    issued: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Token of the most recent submission, if any
    pub fn latest_token(&self) -> Option<RequestToken> {
        (self.issued > 0).then(|| RequestToken::new(self.issued))
    }

    /// Start a search for `raw`.
    ///
    /// A blank query is ignored: no transition, no request. Otherwise the
    /// state becomes `Loading` and the caller must run the returned search.
    pub fn submit(&mut self, raw: &str) -> Option<PendingSearch> {
        let query = raw.trim();
        if query.is_empty() {
            tracing::debug!("Ignoring empty query");
            return None;
        }

        self.issued += 1;
        let token = RequestToken::new(self.issued);
        self.state = RequestState::Loading;

        tracing::info!(token = %token, query = %query, "Search submitted");

        Some(PendingSearch {
            token,
            query: query.to_string(),
        })
    }

    /// Submit whatever is in the input field
    pub fn submit_current(&mut self) -> Option<PendingSearch> {
        let query = self.query.clone();
        self.submit(&query)
    }

    /// Preset suggestions overwrite the visible query, then submit it
    pub fn activate_suggestion(&mut self, suggestion: &str) -> Option<PendingSearch> {
        self.query = suggestion.to_string();
        self.submit(suggestion)
    }

    /// Apply the result of the backend call issued under `token`
    pub fn resolve(&mut self, token: RequestToken, outcome: SearchOutcome) -> Resolution {
        if self.latest_token() != Some(token) || !self.is_loading() {
            tracing::debug!(
                token = %token,
                latest = ?self.latest_token(),
                "Discarding stale search result"
            );
            return Resolution::Stale;
        }

        match outcome {
            SearchOutcome::Found(movies) => {
                tracing::info!(token = %token, results = movies.len(), "Search succeeded");
                self.state = RequestState::Success(movies);
                Resolution::Succeeded
            }
            SearchOutcome::Failed(message) => {
                tracing::info!(token = %token, error = %message, "Search failed");
                self.state = RequestState::Failed(message);
                Resolution::Failed
            }
        }
    }

    /// Run the backend call for a pending search
    pub async fn execute(
        provider: &dyn RecommendationProvider,
        pending: &PendingSearch,
    ) -> SearchOutcome {
        provider.recommend(&pending.query).await.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, CONNECTION_ERROR_MESSAGE};
    use crate::models::MovieSummary;
    use crate::services::providers::MockRecommendationProvider;
    use proptest::prelude::*;

    fn die_hard() -> MovieSummary {
        MovieSummary {
            imdb_rating: "8.2".to_string(),
            ..MovieSummary::new("Die Hard", "1988")
        }
    }

    #[test]
    fn test_submit_trims_and_enters_loading() {
        let mut controller = SearchController::new();
        let pending = controller.submit("  action movies \n").unwrap();

        assert_eq!(pending.query, "action movies");
        assert_eq!(pending.token, RequestToken::new(1));
        assert!(controller.is_loading());
    }

    #[test]
    fn test_submit_clears_previous_results_from_view() {
        let mut controller = SearchController::new();
        let first = controller.submit("heist").unwrap();
        controller.resolve(first.token, SearchOutcome::Found(vec![die_hard()]));

        controller.submit("drama").unwrap();
        assert_eq!(controller.state(), &RequestState::Loading);
        assert!(controller.state().movies().is_none());
    }

    #[test]
    fn test_submit_clears_previous_error_from_view() {
        let mut controller = SearchController::new();
        let first = controller.submit("xyz").unwrap();
        controller.resolve(first.token, SearchOutcome::Failed("No matches found".to_string()));

        controller.submit("abc").unwrap();
        assert!(controller.state().error().is_none());
    }

    #[test]
    fn test_resolve_success() {
        let mut controller = SearchController::new();
        let pending = controller.submit("action movies").unwrap();

        let resolution = controller.resolve(pending.token, SearchOutcome::Found(vec![die_hard()]));

        assert_eq!(resolution, Resolution::Succeeded);
        assert_eq!(controller.state().movies().unwrap()[0].title, "Die Hard");
    }

    #[test]
    fn test_empty_list_is_success_not_failure() {
        let mut controller = SearchController::new();
        let pending = controller.submit("nothing").unwrap();

        controller.resolve(pending.token, SearchOutcome::Found(vec![]));

        assert_eq!(controller.state(), &RequestState::Success(vec![]));
    }

    #[test]
    fn test_latest_issued_wins_over_latest_resolved() {
        let mut controller = SearchController::new();
        let comedy = controller.submit("comedy").unwrap();
        let drama = controller.submit("drama").unwrap();

        let drama_movies = vec![MovieSummary::new("The Godfather", "1972")];
        let comedy_movies = vec![MovieSummary::new("Airplane!", "1980")];

        assert_eq!(
            controller.resolve(drama.token, SearchOutcome::Found(drama_movies.clone())),
            Resolution::Succeeded
        );
        assert_eq!(
            controller.resolve(comedy.token, SearchOutcome::Found(comedy_movies)),
            Resolution::Stale
        );
        assert_eq!(controller.state(), &RequestState::Success(drama_movies));
    }

    #[test]
    fn test_stale_result_does_not_end_newer_loading() {
        let mut controller = SearchController::new();
        let first = controller.submit("comedy").unwrap();
        controller.submit("drama").unwrap();

        controller.resolve(first.token, SearchOutcome::Failed("late".to_string()));

        assert!(controller.is_loading());
    }

    #[test]
    fn test_duplicate_resolution_is_ignored() {
        let mut controller = SearchController::new();
        let pending = controller.submit("heist").unwrap();
        controller.resolve(pending.token, SearchOutcome::Found(vec![die_hard()]));

        let again = controller.resolve(pending.token, SearchOutcome::Failed("late".to_string()));

        assert_eq!(again, Resolution::Stale);
        assert!(controller.state().movies().is_some());
    }

    #[test]
    fn test_suggestion_overwrites_query() {
        let mut controller = SearchController::new();
        controller.set_query("half typed");

        let pending = controller.activate_suggestion("romantic comedies").unwrap();

        assert_eq!(controller.query(), "romantic comedies");
        assert_eq!(pending.query, "romantic comedies");
    }

    #[test]
    fn test_query_editing() {
        let mut controller = SearchController::new();
        "noir".chars().for_each(|c| controller.push_char(c));
        controller.pop_char();
        assert_eq!(controller.query(), "noi");
        controller.clear_query();
        assert_eq!(controller.query(), "");
    }

    #[tokio::test]
    async fn test_execute_success_scenario() {
        let mut provider = MockRecommendationProvider::new();
        provider
            .expect_recommend()
            .withf(|query| query == "action movies")
            .times(1)
            .returning(|_| Ok(vec![die_hard()]));

        let mut controller = SearchController::new();
        let pending = controller.submit("action movies").unwrap();
        let outcome = SearchController::execute(&provider, &pending).await;
        controller.resolve(pending.token, outcome);

        let movies = controller.state().movies().unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].rating(), Some("8.2"));
    }

    #[tokio::test]
    async fn test_execute_backend_error_scenario() {
        let mut provider = MockRecommendationProvider::new();
        provider
            .expect_recommend()
            .returning(|_| Err(AppError::Backend("No matches found".to_string())));

        let mut controller = SearchController::new();
        let pending = controller.submit("xyz").unwrap();
        let outcome = SearchController::execute(&provider, &pending).await;
        controller.resolve(pending.token, outcome);

        assert_eq!(controller.state().error(), Some("No matches found"));
        assert!(controller.state().movies().is_none());
    }

    #[tokio::test]
    async fn test_execute_transport_error_scenario() {
        let mut provider = MockRecommendationProvider::new();
        provider
            .expect_recommend()
            .returning(|_| Err(AppError::Decode("connection refused".to_string())));

        let mut controller = SearchController::new();
        let pending = controller.submit("anything").unwrap();
        let outcome = SearchController::execute(&provider, &pending).await;
        controller.resolve(pending.token, outcome);

        assert_eq!(controller.state().error(), Some(CONNECTION_ERROR_MESSAGE));
    }

    proptest! {
        #[test]
        fn prop_blank_query_issues_nothing(query in "[ \t\n\r]{0,12}") {
            let mut provider = MockRecommendationProvider::new();
            provider.expect_recommend().never();

            let mut controller = SearchController::new();
            let before = controller.state().clone();

            let pending = controller.submit(&query);
            if let Some(pending) = &pending {
                tokio_test::block_on(SearchController::execute(&provider, pending));
            }

            prop_assert!(pending.is_none());
            prop_assert_eq!(controller.state(), &before);
            prop_assert_eq!(controller.latest_token(), None);
        }
    }
}
