use chrono::NaiveDate;

use super::app_state::AppState;
use super::search_config::{ConsecutiveSlots, DateRange, SearchConfig, TimeOfDay};
use crate::error::SearchError;

pub fn results_path(result_id: &str) -> String {
    format!("/book/results/{}", urlencoding::encode(result_id))
}

/// Where to go once a search settles. Failed searches stay on the form, so
/// neither the overlay close nor navigation happens for them.
pub fn results_route(outcome: &Result<String, SearchError>) -> Option<String> {
    outcome.as_deref().ok().map(results_path)
}

/// Local state of one mounted booking form.
///
/// Every edit that changes the committed config returns the new config so the
/// caller can write it through to the shared store straight away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingFormState {
    config: SearchConfig,
    pending_start: Option<NaiveDate>,
    picker_open: bool,
    in_flight: bool,
    error: Option<String>,
}

/// Picks the config a form opens with: a store the user already edited, then the
/// caller's initial config, then the defaults.
pub fn resolve_initial_config(
    shared: &AppState,
    initial: Option<&SearchConfig>,
    today: NaiveDate,
) -> SearchConfig {
    if shared.touched {
        return shared.config.clone();
    }
    match initial {
        Some(config) => config.clone(),
        None => SearchConfig::default_for(today),
    }
}

impl BookingFormState {
    pub fn initialize(shared: &AppState, initial: Option<&SearchConfig>, today: NaiveDate) -> Self {
        Self {
            config: resolve_initial_config(shared, initial, today),
            pending_start: None,
            picker_open: false,
            in_flight: false,
            error: None,
        }
    }

    /// Re-applies precedence after the store or initial config changed, keeping
    /// picker, request and error state.
    pub fn resync(&mut self, shared: &AppState, initial: Option<&SearchConfig>, today: NaiveDate) {
        let config = resolve_initial_config(shared, initial, today);
        if config != self.config {
            self.config = config;
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn toggle_time_slot(&mut self, slot: TimeOfDay) -> SearchConfig {
        self.config.toggle_time_slot(slot);
        self.config.clone()
    }

    pub fn set_consecutive_slots(&mut self, count: ConsecutiveSlots) -> SearchConfig {
        self.config.consecutive_slots = count;
        self.config.clone()
    }

    pub fn set_all_locations(&mut self, all_locations: bool) -> SearchConfig {
        self.config.all_locations = all_locations;
        self.config.clone()
    }

    /// First pick holds a start date locally; the second completes the range and
    /// commits it.
    pub fn pick_date(&mut self, date: NaiveDate) -> Option<SearchConfig> {
        match self.pending_start.take() {
            None => {
                self.pending_start = Some(date);
                None
            }
            Some(start) => {
                self.config.date_range = DateRange::spanning(start, date);
                Some(self.config.clone())
            }
        }
    }

    pub fn pending_start(&self) -> Option<NaiveDate> {
        self.pending_start
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    /// Closing the picker drops a half-chosen range.
    pub fn set_picker_open(&mut self, open: bool) {
        self.picker_open = open;
        if !open {
            self.pending_start = None;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.config.has_time_slots() && !self.picker_open && !self.in_flight
    }

    /// Marks a request as in flight and hands back the config to send, or
    /// `None` while submitting is disabled.
    pub fn begin_submit(&mut self) -> Option<SearchConfig> {
        if !self.can_submit() {
            return None;
        }
        self.in_flight = true;
        self.error = None;
        Some(self.config.clone())
    }

    pub fn finish_submit<T>(&mut self, outcome: &Result<T, SearchError>) {
        self.in_flight = false;
        if let Err(err) = outcome {
            self.error = Some(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(16)
    }

    fn seeded() -> SearchConfig {
        let mut config = SearchConfig::default_for(date(20));
        config.toggle_time_slot(TimeOfDay::Afternoon);
        config.all_locations = true;
        config
    }

    #[test]
    fn test_precedence_touched_store_wins() {
        let mut edited = SearchConfig::default_for(today());
        edited.toggle_time_slot(TimeOfDay::Morning);
        let shared = AppState::with_config(edited.clone());

        let form = BookingFormState::initialize(&shared, Some(&seeded()), today());
        assert_eq!(form.config(), &edited);
    }

    #[test]
    fn test_precedence_initial_config_over_defaults() {
        let shared = AppState::new(today());
        let form = BookingFormState::initialize(&shared, Some(&seeded()), today());
        assert_eq!(form.config(), &seeded());

        let form = BookingFormState::initialize(&shared, None, today());
        assert_eq!(form.config(), &SearchConfig::default_for(today()));
    }

    #[test]
    fn test_submit_disabled_without_time_slots() {
        let mut form = BookingFormState::initialize(&AppState::new(today()), None, today());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), None);
        assert!(!form.is_submitting());

        let written = form.toggle_time_slot(TimeOfDay::Evening);
        assert_eq!(written.selected_time_slots, vec![TimeOfDay::Evening]);
        assert!(form.can_submit());

        form.toggle_time_slot(TimeOfDay::Evening);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_submit_disabled_while_picker_open() {
        let mut form = BookingFormState::initialize(&AppState::new(today()), Some(&seeded()), today());
        form.set_picker_open(true);
        assert_eq!(form.begin_submit(), None);
        form.set_picker_open(false);
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_half_chosen_range_is_not_committed() {
        let mut form = BookingFormState::initialize(&AppState::new(today()), None, today());
        let committed = form.config().date_range;

        form.set_picker_open(true);
        assert_eq!(form.pick_date(date(25)), None);
        assert_eq!(form.pending_start(), Some(date(25)));
        assert_eq!(form.config().date_range, committed);

        form.set_picker_open(false);
        assert_eq!(form.pending_start(), None);
        assert_eq!(form.config().date_range, committed);
    }

    #[test]
    fn test_second_pick_commits_ordered_range() {
        let mut form = BookingFormState::initialize(&AppState::new(today()), None, today());
        form.set_picker_open(true);
        form.pick_date(date(28));
        let written = form.pick_date(date(24)).unwrap();

        assert_eq!(written.date_range.from(), date(24));
        assert_eq!(written.date_range.to(), date(28));
        assert_eq!(form.pending_start(), None);
    }

    #[test]
    fn test_in_flight_blocks_second_submit_and_always_clears() {
        let mut form = BookingFormState::initialize(&AppState::new(today()), Some(&seeded()), today());
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), None);

        form.finish_submit(&Err::<String, _>(SearchError::Http(500)));
        assert!(!form.is_submitting());
        assert_eq!(form.error(), Some("HTTP error! status: 500"));
        assert_eq!(form.config(), &seeded());

        assert!(form.begin_submit().is_some());
        assert_eq!(form.error(), None);
        form.finish_submit(&Ok::<_, SearchError>("abc123".to_string()));
        assert!(!form.is_submitting());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_results_path() {
        assert_eq!(results_path("abc123"), "/book/results/abc123");
        assert_eq!(results_path("a b/c"), "/book/results/a%20b%2Fc");
    }

    #[test]
    fn test_only_successful_search_navigates() {
        let mut form = BookingFormState::initialize(&AppState::new(today()), Some(&seeded()), today());

        for failure in [
            SearchError::Http(502),
            SearchError::InvalidResponse,
            SearchError::Rejected("No venues match".to_string()),
        ] {
            assert!(form.begin_submit().is_some());
            let outcome = Err(failure);
            form.finish_submit(&outcome);
            assert_eq!(results_route(&outcome), None);
            assert!(form.error().is_some());
        }

        assert!(form.begin_submit().is_some());
        let outcome = Ok("abc123".to_string());
        form.finish_submit(&outcome);
        assert_eq!(results_route(&outcome).as_deref(), Some("/book/results/abc123"));
    }

    #[test]
    fn test_resync_keeps_request_state() {
        let mut form = BookingFormState::initialize(&AppState::new(today()), None, today());
        form.set_picker_open(true);

        let shared = AppState::with_config(seeded());
        form.resync(&shared, None, today());
        assert_eq!(form.config(), &seeded());
        assert!(form.picker_open());
    }
}
