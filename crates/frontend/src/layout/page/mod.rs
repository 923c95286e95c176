//! Gallery page
//!
//! MVVM split:
//! - view_model.rs: reactive wrapper over `contracts::page::PageModel`
//!   plus the window Escape listener slot
//! - view.rs: the page component wiring profile, cards and popups
//! - form_inputs.rs: validated inputs of a popup form

mod form_inputs;
mod view;
mod view_model;

pub use form_inputs::{FormInputs, InputMarkup};
pub use view::Page;
pub use view_model::{use_page, PageViewModel};
