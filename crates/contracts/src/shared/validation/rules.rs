use thiserror::Error;

/// Тип поля ввода, влияющий на проверку формата
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Url,
}

impl InputKind {
    /// Value of the `type` attribute
    pub fn as_html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Url => "url",
        }
    }
}

/// Reason a value fails its field's constraints.
///
/// Display text follows the wording browsers use for the same constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please fill out this field.")]
    ValueMissing,
    #[error("Please enter a URL.")]
    TypeMismatch,
    #[error(
        "Please shorten this text to {max} characters or less (you are currently using {current} {}).",
        characters(.current)
    )]
    TooLong { max: usize, current: usize },
    #[error(
        "Please lengthen this text to {min} characters or more (you are currently using {current} {}).",
        characters(.current)
    )]
    TooShort { min: usize, current: usize },
}

fn characters(n: &usize) -> &'static str {
    if *n == 1 {
        "character"
    } else {
        "characters"
    }
}

/// Constraints of a single input: the set the markup declares through
/// `required`, `minlength`, `maxlength` and `type`, plus `not_blank`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub name: String,
    pub kind: InputKind,
    pub required: bool,
    /// A required value made of whitespace only counts as missing.
    pub not_blank: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldRules {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Text,
            required: false,
            not_blank: false,
            min_length: None,
            max_length: None,
        }
    }

    pub fn url(name: impl Into<String>) -> Self {
        Self {
            kind: InputKind::Url,
            ..Self::text(name)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn not_blank(mut self) -> Self {
        self.not_blank = true;
        self
    }

    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    /// Check a value the user typed.
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        self.check_value(value, true)
    }

    /// Check `value` against the constraints.
    ///
    /// An empty optional field is always valid; length is counted in chars.
    /// Like the browser, length limits only apply to `edited` values, not
    /// to values filled in by code.
    pub fn check_value(&self, value: &str, edited: bool) -> Result<(), FieldError> {
        let blank = value.is_empty() || (self.not_blank && value.trim().is_empty());
        if blank {
            return if self.required {
                Err(FieldError::ValueMissing)
            } else {
                Ok(())
            };
        }

        if self.kind == InputKind::Url && url::Url::parse(value).is_err() {
            return Err(FieldError::TypeMismatch);
        }

        if !edited {
            return Ok(());
        }

        let current = value.chars().count();
        if let Some(max) = self.max_length {
            if current > max {
                return Err(FieldError::TooLong { max, current });
            }
        }
        if let Some(min) = self.min_length {
            if current < min {
                return Err(FieldError::TooShort { min, current });
            }
        }

        Ok(())
    }
}
