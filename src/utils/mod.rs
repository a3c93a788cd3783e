pub mod date;
pub mod postcode;
