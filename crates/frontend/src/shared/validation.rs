use contracts::shared::validation::{FieldRules, ValidationSettings};
use leptos::prelude::*;

/// Make `settings` available to every form on the page.
pub fn enable_validation(settings: ValidationSettings) {
    log::debug!(
        "validation enabled for {} ({})",
        settings.form_selector,
        settings.input_selector
    );
    provide_context(settings);
}

pub fn use_validation_settings() -> ValidationSettings {
    use_context::<ValidationSettings>()
        .expect("ValidationSettings not provided in context (call enable_validation in app root)")
}

/// Input with its `{id}-error` message element.
///
/// Constraint attributes are taken from `rules`; the error text and the
/// error classes follow `error`.
#[component]
pub fn ValidatedInput(
    rules: FieldRules,
    /// `id` of the input; the error element gets `{id}-error`
    #[prop(into)]
    input_id: String,
    /// Modifier class, e.g. `popup__input_type_name`
    #[prop(into)]
    class: String,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    /// Visible validation message
    #[prop(into)]
    error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let settings = use_validation_settings();
    let input_settings = settings.clone();
    let error_id = input_id.clone();

    view! {
        <input
            id=input_id
            name=rules.name.clone()
            type=rules.kind.as_html_type()
            class=move || input_settings.input_classes(&class, error.get().is_some())
            placeholder=move || placeholder.get().unwrap_or_default()
            required=rules.required
            minlength=rules.min_length.map(|n| n.to_string())
            maxlength=rules.max_length.map(|n| n.to_string())
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
        <span class=move || settings.error_classes(&error_id, error.get().is_some())>
            {move || error.get().unwrap_or_default()}
        </span>
    }
}

/// Submit button of a validated form.
#[component]
pub fn SubmitButton(
    #[prop(into)]
    enabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let settings = use_validation_settings();

    view! {
        <button
            type="submit"
            class=move || settings.submit_classes(enabled.get())
            disabled=move || !enabled.get()
        >
            {children()}
        </button>
    }
}
