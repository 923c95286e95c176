use crate::shared::validation::{FieldError, FormKind};
use thiserror::Error;

/// Why a form submission was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form `{}` is not open", .0.form_name())]
    NotOpen(FormKind),
    #[error("field `{field}` of `{}` is invalid: {source}", .form.form_name())]
    InvalidField {
        form: FormKind,
        field: String,
        source: FieldError,
    },
    #[error("card rejected: {0}")]
    InvalidCard(String),
}
