use thiserror::Error;

/// Fallback used when the search endpoint rejects a request without a message.
pub const UNEXPECTED_RESPONSE: &str = "Unexpected response format from server";

/// Failures of a single search submission. The `Display` text is what the
/// form shows in its error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Invalid or empty response from server")]
    InvalidResponse,
    #[error("{0}")]
    Rejected(String),
    #[error("Search is not configured: {0}")]
    NotConfigured(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Reasons the results page cannot show the route's result set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultsError {
    #[error("No results found. Please try searching again.")]
    NoResults,
    #[error("Stored results do not match the current page. Please try searching again.")]
    Mismatch { stored: String, requested: String },
    #[error("An error occurred while loading the results. Please try searching again.")]
    Corrupt(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Session storage is unavailable")]
    Unavailable,
    #[error("Failed to access session storage: {0}")]
    Access(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("use_app_state must be used within an AppStateProvider")]
    MissingProvider,
}

/// Rejections produced when a query string does not describe a valid search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing query parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Date range starts after it ends ({from} > {to})")]
    ReversedRange { from: String, to: String },
    #[error("Unknown time slot '{0}'")]
    UnknownTimeSlot(String),
    #[error("At least one time slot must be selected")]
    NoTimeSlots,
    #[error("Consecutive slots must be 2, 3 or 4, got '{0}'")]
    InvalidConsecutiveSlots(String),
    #[error("allLocations must be 'true' or 'false', got '{0}'")]
    InvalidAllLocations(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display() {
        assert_eq!(SearchError::Http(502).to_string(), "HTTP error! status: 502");
        assert_eq!(
            SearchError::InvalidResponse.to_string(),
            "Invalid or empty response from server"
        );
        assert_eq!(
            SearchError::Rejected("No venues".to_string()).to_string(),
            "No venues"
        );
        assert_eq!(
            SearchError::from(StorageError::Unavailable).to_string(),
            "Session storage is unavailable"
        );
    }

    #[test]
    fn test_results_error_display() {
        assert_eq!(
            ResultsError::NoResults.to_string(),
            "No results found. Please try searching again."
        );
        let err = ResultsError::Mismatch {
            stored: "old".to_string(),
            requested: "new".to_string(),
        };
        assert!(err.to_string().starts_with("Stored results do not match"));
    }
}
