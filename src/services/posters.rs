/// Poster availability probing
///
/// A terminal can't draw the poster itself, so "loading" a poster means
/// fetching its headers. A failed probe only switches that card to the
/// placeholder glyph; it never touches the search state.
use reqwest::Client as HttpClient;

#[async_trait::async_trait]
pub trait PosterLoader: Send + Sync {
    /// Whether the poster at `url` can be loaded
    async fn load(&self, url: &str) -> bool;
}

#[derive(Clone, Default)]
pub struct HttpPosterLoader {
    http_client: HttpClient,
}

impl HttpPosterLoader {
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
        }
    }
}

#[async_trait::async_trait]
impl PosterLoader for HttpPosterLoader {
    async fn load(&self, url: &str) -> bool {
        match self.http_client.head(url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::debug!(url = %url, status = %response.status(), "Poster unavailable");
                false
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Poster load failed");
                false
            }
        }
    }
}
