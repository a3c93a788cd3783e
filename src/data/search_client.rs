use leptos::logging::{error, log};
use reqwest::StatusCode;
use serde_json::Value;

use super::result_store::ResultStore;
use super::search_config::SearchConfig;
use crate::error::{SearchError, UNEXPECTED_RESPONSE};

/// Issues booking searches against the configured endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn request_url(&self, config: &SearchConfig) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.endpoint, separator, config.query_string())
    }

    /// Runs one search and persists the response. Returns the `resultId` to
    /// navigate to.
    pub async fn submit(
        &self,
        config: &SearchConfig,
        store: &impl ResultStore,
    ) -> Result<String, SearchError> {
        let url = self.request_url(config);
        log!("Searching {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let outcome = accept_response(status, &body, store);
        if let Err(err) = &outcome {
            error!("Search failed: {}", err);
        }
        outcome
    }
}

/// Makes a relative endpoint such as `/api/mock-search` absolute against the
/// page origin.
pub fn resolve_endpoint(endpoint: &str, origin: Option<&str>) -> String {
    match origin {
        Some(origin) if endpoint.starts_with('/') => {
            format!("{}{}", origin.trim_end_matches('/'), endpoint)
        }
        _ => endpoint.to_string(),
    }
}

/// Checks a search response and stores the body verbatim when it describes a
/// successful search. Nothing is stored on failure.
pub fn accept_response(
    status: StatusCode,
    body: &str,
    store: &impl ResultStore,
) -> Result<String, SearchError> {
    if !status.is_success() {
        return Err(SearchError::Http(status.as_u16()));
    }

    let payload: Value = serde_json::from_str(body).map_err(|_| SearchError::InvalidResponse)?;
    let object = match payload.as_object() {
        Some(object) if !object.is_empty() => object,
        _ => return Err(SearchError::InvalidResponse),
    };

    let succeeded = object.get("success").is_some_and(is_truthy);
    let result_id = object.get("resultId").and_then(result_id_of);

    let result_id = match (succeeded, result_id) {
        (true, Some(result_id)) => result_id,
        _ => {
            let message = object
                .get("message")
                .and_then(message_of)
                .unwrap_or_else(|| UNEXPECTED_RESPONSE.to_string());
            return Err(SearchError::Rejected(message));
        }
    };

    store.save(body)?;
    Ok(result_id)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Any truthy scalar is shown as the rejection message.
fn message_of(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn result_id_of(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::result_store::MemoryResultStore;
    use crate::data::search_config::TimeOfDay;

    #[test]
    fn test_success_persists_body_and_returns_id() {
        let store = MemoryResultStore::new();
        let body = r#"{"success": true, "resultId": "abc123", "slots": []}"#;

        let result_id = accept_response(StatusCode::OK, body, &store).unwrap();
        assert_eq!(result_id, "abc123");

        let stored: Value = serde_json::from_str(&store.load().unwrap().unwrap()).unwrap();
        assert_eq!(stored["resultId"], "abc123");
        assert_eq!(store.load().unwrap().as_deref(), Some(body));
    }

    #[test]
    fn test_http_failure_checked_first() {
        let store = MemoryResultStore::new();
        let body = r#"{"success": true, "resultId": "abc123"}"#;
        assert_eq!(
            accept_response(StatusCode::SERVICE_UNAVAILABLE, body, &store),
            Err(SearchError::Http(503))
        );
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_empty_or_non_object_body_is_invalid() {
        let store = MemoryResultStore::new();
        for body in ["", "{}", "[]", "null", "\"ok\"", "42", "not json"] {
            assert_eq!(
                accept_response(StatusCode::OK, body, &store),
                Err(SearchError::InvalidResponse),
                "{:?}",
                body
            );
        }
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_missing_success_uses_server_message() {
        let store = MemoryResultStore::new();
        let body = r#"{"resultId": "abc123", "message": "No venues match"}"#;
        assert_eq!(
            accept_response(StatusCode::OK, body, &store),
            Err(SearchError::Rejected("No venues match".to_string()))
        );
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_scalar_message_is_stringified() {
        let store = MemoryResultStore::new();
        let body = r#"{"success": false, "message": 429}"#;
        assert_eq!(
            accept_response(StatusCode::OK, body, &store),
            Err(SearchError::Rejected("429".to_string()))
        );

        let body = r#"{"success": false, "message": {"code": 429}}"#;
        assert_eq!(
            accept_response(StatusCode::OK, body, &store),
            Err(SearchError::Rejected(UNEXPECTED_RESPONSE.to_string()))
        );
    }

    #[test]
    fn test_missing_result_id_uses_fallback_message() {
        let store = MemoryResultStore::with_payload(r#"{"resultId":"previous"}"#);
        for body in [
            r#"{"success": true}"#,
            r#"{"success": true, "resultId": ""}"#,
            r#"{"success": false, "resultId": "abc"}"#,
            r#"{"success": 0, "resultId": "abc", "message": ""}"#,
        ] {
            assert_eq!(
                accept_response(StatusCode::OK, body, &store),
                Err(SearchError::Rejected(UNEXPECTED_RESPONSE.to_string())),
                "{}",
                body
            );
        }
        assert_eq!(store.load().unwrap().as_deref(), Some(r#"{"resultId":"previous"}"#));
    }

    #[test]
    fn test_truthy_success_and_numeric_id() {
        let store = MemoryResultStore::new();
        let body = r#"{"success": "yes", "resultId": 981}"#;
        assert_eq!(accept_response(StatusCode::OK, body, &store), Ok("981".to_string()));
    }

    #[test]
    fn test_request_url_appends_query() {
        let mut config = SearchConfig::default_for(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        config.toggle_time_slot(TimeOfDay::Morning);

        let client = SearchClient::new("https://search.example.com/api");
        assert_eq!(
            client.request_url(&config),
            "https://search.example.com/api?from=2026-10-16&to=2026-10-22&timeSlots=morning&consecutiveSlots=4&allLocations=false"
        );

        let client = SearchClient::new("https://search.example.com/api?key=1");
        assert!(client.request_url(&config).starts_with("https://search.example.com/api?key=1&from="));
    }

    #[test]
    fn test_resolve_endpoint() {
        assert_eq!(
            resolve_endpoint("/api/mock-search", Some("http://127.0.0.1:3000/")),
            "http://127.0.0.1:3000/api/mock-search"
        );
        assert_eq!(
            resolve_endpoint("https://search.example.com", Some("http://127.0.0.1:3000")),
            "https://search.example.com"
        );
        assert_eq!(resolve_endpoint("/api/mock-search", None), "/api/mock-search");
    }
}
