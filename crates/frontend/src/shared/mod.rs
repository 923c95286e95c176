pub mod config;
pub mod popup;
pub mod validation;
