//! Shared model of the Mesto gallery page.
//!
//! Everything here is DOM-free: records, the gallery, form validation
//! decisions, the popup state machine and the page orchestration model.
//! The `frontend` crate binds these to Leptos components.

pub mod domain;
pub mod page;
pub mod shared;
