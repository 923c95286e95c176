//! Form validation decisions.
//!
//! `rules` answers "is this value acceptable and if not, what do we say",
//! `form` keeps per-form field state and the submit-button decision,
//! `settings` names the CSS hooks the UI uses to present both.

pub mod form;
pub mod rules;
pub mod settings;

pub use form::{check_input_validity, toggle_button_state, FieldState, FormKind, FormValidation};
pub use rules::{FieldError, FieldRules, InputKind};
pub use settings::ValidationSettings;
