use std::collections::HashMap;
use std::sync::OnceLock;

use axum::extract::Query;
use axum::Json;
use chrono::Days;
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};

use super::search_config::{SearchConfig, TimeOfDay};
use super::search_result::{BookingSlot, OtherSlot};

const DEFAULT_VENUES: &str = include_str!("../../assets/mock_venues.csv");
const RESULT_ID_LEN: usize = 8;

static VENUES: OnceLock<Vec<Venue>> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
pub struct Venue {
    pub name: String,
    pub organization: String,
    pub distance: f64,
    pub hourly_price: f64,
    pub favourite: bool,
}

pub fn parse_venues(csv_text: &str) -> Result<Vec<Venue>, csv::Error> {
    csv::Reader::from_reader(csv_text.as_bytes())
        .deserialize()
        .collect()
}

/// Loads the venue catalogue once, from `path` or the bundled list.
pub fn init_venues(path: Option<&str>) -> Result<usize, Box<dyn std::error::Error>> {
    let venues = match path {
        Some(path) => parse_venues(&std::fs::read_to_string(path)?)?,
        None => parse_venues(DEFAULT_VENUES)?,
    };
    let count = venues.len();
    if VENUES.set(venues).is_err() {
        log::warn!("Mock venues already initialised, keeping the first catalogue");
    }
    Ok(count)
}

fn venues() -> &'static [Venue] {
    VENUES.get().map(Vec::as_slice).unwrap_or_default()
}

fn window_hours(slot: TimeOfDay) -> (u32, u32) {
    match slot {
        TimeOfDay::Morning => (6, 12),
        TimeOfDay::Afternoon => (12, 18),
        TimeOfDay::Evening => (18, 22),
    }
}

fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

fn rejection(message: impl Into<String>) -> Value {
    json!({ "success": false, "message": message.into() })
}

/// Builds the search response for `config`: one ranked slot per venue in scope.
pub fn build_response(config: &SearchConfig, venues: &[Venue], rng: &mut impl Rng) -> Value {
    let in_scope: Vec<&Venue> = venues
        .iter()
        .filter(|venue| config.all_locations || venue.favourite)
        .collect();
    if in_scope.is_empty() {
        return rejection("No venues match your search");
    }
    if !config.has_time_slots() {
        return rejection("At least one time slot must be selected");
    }

    let run = config.consecutive_slots.as_str().parse::<u32>().unwrap_or(1);
    let mut slots = Vec::with_capacity(in_scope.len());

    for venue in in_scope {
        let window = config.selected_time_slots[rng.random_range(0..config.selected_time_slots.len())];
        let (open, close) = window_hours(window);
        let latest_start = close.saturating_sub(run).max(open);
        let start = rng.random_range(open..=latest_start);

        let day_offset = rng.random_range(0..config.date_range.days().max(1)) as u64;
        let date = config
            .date_range
            .from()
            .checked_add_days(Days::new(day_offset))
            .unwrap_or(config.date_range.from());

        let other_slots = (open..close)
            .filter(|hour| *hour != start)
            .map(|hour| OtherSlot {
                time: hour_label(hour),
                available: rng.random_bool(0.6),
            })
            .collect();

        let price = venue.hourly_price * run as f64 * rng.random_range(0.9..1.1);

        slots.push(BookingSlot {
            start_time: hour_label(start),
            end_time: hour_label(start + run),
            location: venue.name.clone(),
            distance: venue.distance,
            price: (price * 100.0).round() / 100.0,
            organization: venue.organization.clone(),
            date,
            other_slots,
        });
    }

    slots.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let result_id: String = (0..RESULT_ID_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();

    json!({
        "success": true,
        "resultId": result_id,
        "config": config,
        "slots": slots,
    })
}

pub async fn mock_search_handler(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let config = match SearchConfig::from_query(|key| params.get(key).map(String::as_str)) {
        Ok(config) => config,
        Err(err) => {
            log::info!("Rejected mock search: {}", err);
            return Json(rejection(err.to_string()));
        }
    };

    let response = build_response(&config, venues(), &mut rand::rng());
    log::info!(
        "Mock search {} -> {}",
        config.query_string(),
        response["resultId"].as_str().unwrap_or("rejected")
    );
    Json(response)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use reqwest::StatusCode;

    use super::*;
    use crate::data::result_store::MemoryResultStore;
    use crate::data::results::load_results;
    use crate::data::search_client::accept_response;
    use crate::data::search_config::ConsecutiveSlots;

    fn config(all_locations: bool) -> SearchConfig {
        let mut config = SearchConfig::default_for(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        config.toggle_time_slot(TimeOfDay::Evening);
        config.consecutive_slots = ConsecutiveSlots::Three;
        config.all_locations = all_locations;
        config
    }

    fn catalogue() -> Vec<Venue> {
        parse_venues(DEFAULT_VENUES).unwrap()
    }

    #[test]
    fn test_bundled_catalogue_parses() {
        let venues = catalogue();
        assert_eq!(venues.len(), 10);
        assert!(venues.iter().any(|v| v.favourite));
        assert!(venues.iter().any(|v| !v.favourite));
    }

    #[test]
    fn test_favourites_scope() {
        let mut rng = StdRng::seed_from_u64(7);
        let venues = catalogue();
        let favourites = venues.iter().filter(|v| v.favourite).count();

        let response = build_response(&config(false), &venues, &mut rng);
        assert_eq!(response["slots"].as_array().unwrap().len(), favourites);

        let response = build_response(&config(true), &venues, &mut rng);
        assert_eq!(response["slots"].as_array().unwrap().len(), venues.len());
    }

    #[test]
    fn test_slots_fit_window_and_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let cfg = config(true);
        let response = build_response(&cfg, &catalogue(), &mut rng);

        let slots: Vec<BookingSlot> = serde_json::from_value(response["slots"].clone()).unwrap();
        let mut last_distance = 0.0;
        for slot in &slots {
            let start: u32 = slot.start_time[..2].parse().unwrap();
            let end: u32 = slot.end_time[..2].parse().unwrap();
            assert!((18..=19).contains(&start), "{}", slot.start_time);
            assert_eq!(end, start + 3);
            assert!(slot.date >= cfg.date_range.from() && slot.date <= cfg.date_range.to());
            assert!(slot.distance >= last_distance);
            last_distance = slot.distance;
        }
    }

    #[test]
    fn test_empty_scope_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let venues: Vec<Venue> = catalogue().into_iter().filter(|v| !v.favourite).collect();
        let response = build_response(&config(false), &venues, &mut rng);
        assert_eq!(response["success"], false);
        assert_eq!(response["message"], "No venues match your search");
    }

    #[test]
    fn test_response_flows_through_form_and_results_page() {
        let mut rng = StdRng::seed_from_u64(99);
        let cfg = config(false);
        let body = build_response(&cfg, &catalogue(), &mut rng).to_string();

        let store = MemoryResultStore::new();
        let result_id = accept_response(StatusCode::OK, &body, &store).unwrap();
        assert_eq!(result_id.len(), RESULT_ID_LEN);

        let result = load_results(&store, &result_id).unwrap();
        assert_eq!(result.config, Some(cfg));
    }
}
