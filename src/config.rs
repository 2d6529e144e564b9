use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Prefix for every environment variable read into [`Config`]
pub const ENV_PREFIX: &str = "POPCORN_";

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Recommendation backend base URL
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Path of the recommendation endpoint on the backend
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,

    /// Log file; stdout belongs to the terminal UI
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Probe poster URLs after a search and fall back to a placeholder when
    /// they cannot be loaded
    #[serde(default = "default_poster_check")]
    pub poster_check: bool,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_endpoint_path() -> String {
    "/get-movies".to_string()
}

fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("popcorn-picks.log")
}

fn default_poster_check() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            endpoint_path: default_endpoint_path(),
            log_file: default_log_file(),
            poster_check: default_poster_check(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of `(name, value)` pairs
    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(
        mut self,
        backend_url: Option<String>,
        log_file: Option<PathBuf>,
        no_posters: bool,
    ) -> Self {
        if let Some(url) = backend_url {
            self.backend_url = url;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        if no_posters {
            self.poster_check = false;
        }
        self
    }

    /// Full URL of the recommendation endpoint
    pub fn endpoint_url(&self) -> String {
        join_url(&self.backend_url, &self.endpoint_path)
    }

    /// Full URL of the backend health check
    pub fn health_url(&self) -> String {
        join_url(&self.backend_url, "/health")
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
