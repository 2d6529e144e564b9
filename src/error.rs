/// Message shown whenever the backend could not be reached or answered with
/// something other than a well-formed 2xx response.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Connection error. Make sure the backend server is running on port 8000.";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Backend returned status {0}")]
    Status(u16),

    #[error("Invalid backend response: {0}")]
    Decode(String),

    /// Well-formed response that carried an `error` field
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Text surfaced to the user when a search ends in this error.
    ///
    /// Backend-signaled failures are shown verbatim; every transport-level
    /// failure collapses into [`CONNECTION_ERROR_MESSAGE`] so raw client
    /// errors never reach the screen.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Backend(msg) => msg.clone(),
            _ => CONNECTION_ERROR_MESSAGE.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_is_shown_verbatim() {
        let err = AppError::Backend("No matches found".to_string());
        assert_eq!(err.user_message(), "No matches found");
    }

    #[test]
    fn test_transport_errors_use_connection_message() {
        assert_eq!(AppError::Status(500).user_message(), CONNECTION_ERROR_MESSAGE);
        assert_eq!(
            AppError::Decode("expected value at line 1".to_string()).user_message(),
            CONNECTION_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_display_keeps_detail_for_logs() {
        let err = AppError::Status(503);
        assert_eq!(err.to_string(), "Backend returned status 503");
    }
}
