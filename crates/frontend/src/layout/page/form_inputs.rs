use super::view_model::use_page;
use crate::shared::validation::ValidatedInput;
use contracts::shared::validation::FormKind;
use leptos::prelude::*;

/// Markup details of one input: `id`, modifier class, placeholder.
pub type InputMarkup = (&'static str, &'static str, &'static str);

/// Validated inputs of `form`, bound to the page view model.
///
/// `markup` is matched to the form's rules by position.
#[component]
pub fn FormInputs(form: FormKind, markup: &'static [InputMarkup]) -> impl IntoView {
    let vm = use_page();

    form.field_rules()
        .into_iter()
        .zip(markup.iter().copied())
        .map(move |(rules, (input_id, class, placeholder))| {
            let name = rules.name.clone();
            let value_name = name.clone();
            let error_name = name.clone();
            view! {
                <ValidatedInput
                    rules=rules
                    input_id=input_id
                    class=class
                    placeholder=placeholder.to_string()
                    value=Signal::derive(move || vm.field_value(form, &value_name))
                    error=Signal::derive(move || vm.field_error(form, &error_name))
                    on_input=Callback::new(move |value| vm.input(form, &name, value))
                />
            }
        })
        .collect_view()
}
