/// HTTP recommendation backend
///
/// POSTs `{"text": query}` as JSON to the configured endpoint and decodes the
/// `movie_details` / `error` envelope.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{MovieSummary, RecommendationRequest, RecommendationResponse},
    services::{
        providers::RecommendationProvider,
        request_id::{backend_span, RequestId, REQUEST_ID_HEADER},
    },
};
use reqwest::Client as HttpClient;
use tracing::Instrument;

#[derive(Clone)]
pub struct HttpRecommendationProvider {
    http_client: HttpClient,
    endpoint_url: String,
    health_url: String,
}

impl HttpRecommendationProvider {
    pub fn new(endpoint_url: String, health_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            endpoint_url,
            health_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint_url(), config.health_url())
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    async fn post_query(
        &self,
        request_id: &RequestId,
        query: &str,
    ) -> AppResult<Vec<MovieSummary>> {
        tracing::info!(query = %query, "Requesting recommendations");

        let response = self
            .http_client
            .post(&self.endpoint_url)
            .header(REQUEST_ID_HEADER, request_id.as_str())
            .json(&RecommendationRequest { text: query })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Backend unreachable");
                AppError::from(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Backend returned failure status");
            return Err(AppError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!(response = %body, "Raw backend response");

        let movies = Self::decode(&body)?;

        tracing::info!(
            query = %query,
            results = movies.len(),
            provider = self.name(),
            "Recommendations received"
        );

        Ok(movies)
    }

    fn decode(body: &str) -> AppResult<Vec<MovieSummary>> {
        let response: RecommendationResponse = serde_json::from_str(body).map_err(|e| {
            tracing::error!(error = %e, "Failed to deserialize backend response");
            AppError::Decode(e.to_string())
        })?;
        response.into_result()
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for HttpRecommendationProvider {
    async fn recommend(&self, query: &str) -> AppResult<Vec<MovieSummary>> {
        let request_id = RequestId::new();
        let span = backend_span(&request_id, &self.endpoint_url);

        self.post_query(&request_id, query).instrument(span).await
    }

    async fn health_check(&self) -> AppResult<()> {
        let response = self.http_client.get(&self.health_url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::Status(response.status().as_u16()));
        }

        tracing::info!(url = %self.health_url, "Backend is healthy");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
