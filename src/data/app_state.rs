use chrono::NaiveDate;
use leptos::prelude::*;

use super::search_config::SearchConfig;
use crate::error::StateError;

/// The search the user is currently putting together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub config: SearchConfig,
    /// Set once the form writes anything after the last reset.
    pub touched: bool,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            config: SearchConfig::default_for(today),
            touched: false,
        }
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            touched: true,
        }
    }
}

/// Handle to the one shared `AppState` of the running app.
#[derive(Debug, Clone, Copy)]
pub struct AppStateStore {
    state: RwSignal<AppState>,
}

impl AppStateStore {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            state: RwSignal::new(AppState::new(today)),
        }
    }

    /// Creates the store and makes it available to every descendant component.
    pub fn provide(today: NaiveDate) -> Self {
        let store = Self::new(today);
        provide_context(store);
        store
    }

    pub fn get(&self) -> AppState {
        self.state.get()
    }

    pub fn get_untracked(&self) -> AppState {
        self.state.get_untracked()
    }

    pub fn set(&self, state: AppState) {
        self.state.set(state);
    }

    pub fn update(&self, f: impl FnOnce(&mut AppState)) {
        self.state.update(f);
    }

    pub fn write_config(&self, config: SearchConfig) {
        self.update(|state| {
            state.config = config;
            state.touched = true;
        });
    }

    pub fn reset(&self, today: NaiveDate) {
        self.set(AppState::new(today));
    }
}

pub fn try_use_app_state() -> Result<AppStateStore, StateError> {
    use_context::<AppStateStore>().ok_or(StateError::MissingProvider)
}

/// Panics outside the `App` subtree, where no store exists.
pub fn use_app_state() -> AppStateStore {
    match try_use_app_state() {
        Ok(store) => store,
        Err(err) => panic!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::search_config::{ConsecutiveSlots, DateRange, TimeOfDay};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_missing_provider_is_an_error() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(try_use_app_state().unwrap_err(), StateError::MissingProvider);
        });
    }

    #[test]
    #[should_panic(expected = "must be used within an AppStateProvider")]
    fn test_use_app_state_panics_without_provider() {
        let owner = Owner::new();
        owner.with(|| {
            use_app_state();
        });
    }

    #[test]
    fn test_provided_store_is_shared() {
        let owner = Owner::new();
        owner.with(|| {
            let provided = AppStateStore::provide(today());
            let store = try_use_app_state().unwrap();

            let mut config = SearchConfig::default_for(today());
            config.toggle_time_slot(TimeOfDay::Evening);
            store.write_config(config.clone());

            assert_eq!(provided.get_untracked().config, config);
            assert!(provided.get_untracked().touched);
        });
    }

    #[test]
    fn test_updater_sees_previous_state() {
        let owner = Owner::new();
        owner.with(|| {
            let store = AppStateStore::new(today());
            store.update(|state| state.config.all_locations = true);
            store.update(|state| state.config.all_locations = !state.config.all_locations);
            assert!(!store.get_untracked().config.all_locations);
        });
    }

    #[test]
    fn test_reset_restores_defaults() {
        let owner = Owner::new();
        owner.with(|| {
            let store = AppStateStore::new(today());
            let mut config = SearchConfig::default_for(today());
            config.toggle_time_slot(TimeOfDay::Morning);
            config.consecutive_slots = ConsecutiveSlots::Two;
            config.all_locations = true;
            store.write_config(config);

            store.reset(today());
            let state = store.get_untracked();
            assert!(state.config.selected_time_slots.is_empty());
            assert_eq!(state.config.consecutive_slots, ConsecutiveSlots::Four);
            assert!(!state.config.all_locations);
            assert_eq!(state.config.date_range, DateRange::default_for(today()));
            assert!(!state.touched);
        });
    }
}
