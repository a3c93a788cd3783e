pub mod app_state;
pub mod booking_form;
#[cfg(feature = "ssr")]
pub mod mock_search;
pub mod result_store;
pub mod results;
pub mod search_client;
pub mod search_config;
pub mod search_result;
