/// Recommendation backend abstraction
///
/// The search lifecycle only depends on this trait, so tests swap in a mock
/// and the binary plugs in the HTTP implementation.
use crate::{error::AppResult, models::MovieSummary};

pub mod http;

/// Trait for recommendation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Ask the backend for movies matching a free-text preference
    ///
    /// `query` is already trimmed and non-empty. A backend-signaled failure
    /// comes back as `AppError::Backend`; everything else that goes wrong is
    /// a transport error.
    async fn recommend(&self, query: &str) -> AppResult<Vec<MovieSummary>>;

    /// Check that the backend is up
    async fn health_check(&self) -> AppResult<()>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
