use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

pub mod movie;

pub use movie::{MovieSummary, NOT_AVAILABLE};

/// Body of the POST to the recommendation endpoint
#[derive(Debug, Serialize)]
pub struct RecommendationRequest<'a> {
    pub text: &'a str,
}

/// Raw response from the recommendation endpoint
///
/// The backend also echoes `user_input`, `movie_names` and `poster_urls`;
/// those are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub movie_details: Option<Vec<MovieSummary>>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub error: Option<String>,
}

/// `error` counts only when truthy: `null`, `false`, `0` and `""` mean no
/// error. Other non-string values are reported as their JSON text.
fn falsy_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(other) => Some(other.to_string()),
    })
}

impl RecommendationResponse {
    /// A non-empty `error` wins over any movies; an absent movie list is an
    /// empty one.
    pub fn into_result(self) -> AppResult<Vec<MovieSummary>> {
        match self.error {
            Some(message) if !message.is_empty() => Err(AppError::Backend(message)),
            _ => Ok(self.movie_details.unwrap_or_default()),
        }
    }
}
