use uuid::Uuid;

/// HTTP header carrying the request ID on outbound calls
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlates one outbound backend call across client and server logs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Creates a new random request ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the UUID as a string
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Span wrapping one backend call
pub fn backend_span(request_id: &RequestId, url: &str) -> tracing::Span {
    tracing::info_span!(
        "backend_request",
        request_id = %request_id,
        url = %url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn test_display_matches_header_value() {
        let id = RequestId::new();
        assert_eq!(format!("{}", id), id.as_str());
        assert!(Uuid::parse_str(&id.as_str()).is_ok());
    }
}
