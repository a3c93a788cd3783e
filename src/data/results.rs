use leptos::logging::error;

use super::result_store::ResultStore;
use super::search_result::SearchResult;
use crate::error::ResultsError;

/// Loads the stored search payload for the results route `route_id`.
///
/// Only the payload written by the most recent successful search exists; a
/// route pointing at any other result (stale tab, back navigation) is a
/// mismatch rather than a fetch.
pub fn load_results(store: &impl ResultStore, route_id: &str) -> Result<SearchResult, ResultsError> {
    let raw = store.load()?.ok_or(ResultsError::NoResults)?;

    let result: SearchResult = serde_json::from_str(&raw).map_err(|e| {
        error!("Error parsing stored results: {}", e);
        ResultsError::Corrupt(e.to_string())
    })?;

    if result.result_id != route_id {
        return Err(ResultsError::Mismatch {
            stored: result.result_id,
            requested: route_id.to_string(),
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::result_store::MemoryResultStore;
    use crate::data::search_config::TimeOfDay;

    const PAYLOAD: &str = r#"{
        "success": true,
        "resultId": "abc123",
        "config": {
            "selectedTimeSlots": ["evening"],
            "dateRange": {"from": "2026-10-16", "to": "2026-10-22"},
            "consecutiveSlots": "2",
            "allLocations": false
        },
        "slots": [
            {"startTime": "19:00", "endTime": "20:00", "location": "Venue B", "distance": 2.5,
             "price": 9.0, "organization": "GLL", "date": "2026-10-17", "otherSlots": []},
            {"startTime": "18:00", "endTime": "19:00", "location": "Venue A", "distance": 0.4,
             "price": 14.0, "organization": "Better", "date": "2026-10-16", "otherSlots": []},
            {"startTime": "20:00", "endTime": "21:00", "location": "Venue C", "distance": 1.1,
             "price": 11.0, "organization": "Everyone Active", "date": "2026-10-18", "otherSlots": []}
        ]
    }"#;

    #[test]
    fn test_no_stored_payload() {
        let store = MemoryResultStore::new();
        assert_eq!(load_results(&store, "abc123"), Err(ResultsError::NoResults));
    }

    #[test]
    fn test_mismatched_result_id() {
        let store = MemoryResultStore::with_payload(PAYLOAD);
        assert_eq!(
            load_results(&store, "zzz999"),
            Err(ResultsError::Mismatch {
                stored: "abc123".to_string(),
                requested: "zzz999".to_string(),
            })
        );
    }

    #[test]
    fn test_matching_payload_keeps_slot_order() {
        let store = MemoryResultStore::with_payload(PAYLOAD);
        let result = load_results(&store, "abc123").unwrap();

        let venues: Vec<&str> = result.slots.iter().map(|s| s.location.as_str()).collect();
        assert_eq!(venues, vec!["Venue B", "Venue A", "Venue C"]);

        let config = result.config.unwrap();
        assert_eq!(config.selected_time_slots, vec![TimeOfDay::Evening]);
    }

    #[test]
    fn test_corrupt_payload() {
        let store = MemoryResultStore::with_payload("{not json");
        assert!(matches!(load_results(&store, "abc123"), Err(ResultsError::Corrupt(_))));
    }
}
