pub mod book;
pub mod booking_form;
pub mod date_range_picker;
pub mod drawer;
pub mod header;
pub mod landing;
pub mod login_modal;
pub mod results;
pub mod search_summary;
pub mod slot_card;
pub mod sport_drawer;
