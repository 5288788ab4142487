//! Feed API-specific error types.

/// Errors that can occur while loading from the article API.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Host unreachable, connection reset or timeout
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Response { status: u16, message: String },

    /// Body could not be read as the expected JSON shape
    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FeedError {
    /// Short label for the failure class, used in log lines.
    ///
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Network(_) => "network",
            FeedError::Response { .. } => "response",
            FeedError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_response() {
        let error = FeedError::Response {
            status: 404,
            message: "Not found".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Not found"));
        assert_eq!(error.kind(), "response");
    }

    #[test]
    fn test_feed_error_parse() {
        let source = serde_json::from_str::<u64>("not json").unwrap_err();
        let error: FeedError = source.into();
        assert!(error.to_string().contains("Failed to parse"));
        assert_eq!(error.kind(), "parse");
    }
}
