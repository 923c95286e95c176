use super::rules::{FieldError, FieldRules};

/// Формы страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    EditProfile,
    NewPlace,
}

impl FormKind {
    /// Value of the form's `name` attribute
    pub fn form_name(&self) -> &'static str {
        match self {
            FormKind::EditProfile => "edit-profile",
            FormKind::NewPlace => "new-place",
        }
    }

    /// Constraints of the inputs the form carries
    pub fn field_rules(&self) -> Vec<FieldRules> {
        match self {
            FormKind::EditProfile => vec![
                FieldRules::text("name").required().not_blank().length(2, 40),
                FieldRules::text("description")
                    .required()
                    .not_blank()
                    .length(2, 200),
            ],
            FormKind::NewPlace => vec![
                FieldRules::text("place-name")
                    .required()
                    .not_blank()
                    .length(2, 30),
                FieldRules::url("link").required(),
            ],
        }
    }
}

/// Current value of one input and the error shown under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub rules: FieldRules,
    pub value: String,
    /// Visible error. Only set by [`check_input_validity`], so a field the
    /// user has not touched yet shows nothing even when it is invalid.
    pub error: Option<FieldError>,
    /// Set once the user typed into the input; values filled in by code are
    /// not held to the length limits, as in the browser.
    pub edited: bool,
}

impl FieldState {
    pub fn new(rules: FieldRules) -> Self {
        Self {
            rules,
            value: String::new(),
            error: None,
            edited: false,
        }
    }

    pub fn check(&self) -> Result<(), FieldError> {
        self.rules.check_value(&self.value, self.edited)
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

/// Show or clear the error of `field` according to its current value.
pub fn check_input_validity(field: &mut FieldState) {
    field.error = field.check().err();
}

/// `true` when the submit control should be enabled: every input is valid.
pub fn toggle_button_state(fields: &[FieldState]) -> bool {
    fields.iter().all(FieldState::is_valid)
}

/// Validation state of one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    kind: FormKind,
    fields: Vec<FieldState>,
    submit_enabled: bool,
}

impl FormValidation {
    /// Attach validation to the inputs of `kind`; computes the initial
    /// submit state right away.
    pub fn new(kind: FormKind) -> Self {
        Self::with_rules(kind, kind.field_rules())
    }

    pub fn with_rules(kind: FormKind, rules: Vec<FieldRules>) -> Self {
        let fields: Vec<FieldState> = rules.into_iter().map(FieldState::new).collect();
        let submit_enabled = toggle_button_state(&fields);
        Self {
            kind,
            fields,
            submit_enabled,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.rules.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or_default()
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.field(name).and_then(|f| f.error.as_ref())
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// First invalid field with its error, if any.
    pub fn first_invalid(&self) -> Option<(&str, FieldError)> {
        self.fields
            .iter()
            .find_map(|f| f.check().err().map(|e| (f.rules.name.as_str(), e)))
    }

    /// User typed into `name`: revalidate that input and the submit button.
    ///
    /// Returns `false` for an input the form does not have.
    pub fn input(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(field) = self.fields.iter_mut().find(|f| f.rules.name == name) else {
            return false;
        };
        field.value = value.into();
        field.edited = true;
        check_input_validity(field);
        self.submit_enabled = toggle_button_state(&self.fields);
        true
    }

    /// Fill inputs programmatically, e.g. from the displayed profile.
    ///
    /// Stale errors are cleared and the button state is recomputed.
    pub fn prefill<'a>(&mut self, values: impl IntoIterator<Item = (&'a str, String)>) {
        for (name, value) in values {
            if let Some(field) = self.fields.iter_mut().find(|f| f.rules.name == name) {
                field.value = value;
                field.error = None;
                field.edited = false;
            }
        }
        self.submit_enabled = toggle_button_state(&self.fields);
    }

    /// Clear every input and every error.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
            field.edited = false;
        }
        self.submit_enabled = toggle_button_state(&self.fields);
    }
}
