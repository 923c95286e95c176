use crate::layout::page::{use_page, FormInputs, InputMarkup};
use crate::shared::popup::Popup;
use crate::shared::validation::{use_validation_settings, SubmitButton};
use contracts::shared::popup::PopupKind;
use contracts::shared::validation::FormKind;
use leptos::ev;
use leptos::prelude::*;

const INPUTS: [InputMarkup; 2] = [
    ("place-name-input", "popup__input_type_card-name", "Название"),
    ("link-input", "popup__input_type_url", "Ссылка на картинку"),
];

/// Попап добавления карточки (`new-place`)
#[component]
pub fn NewCardPopup() -> impl IntoView {
    let vm = use_page();
    let settings = use_validation_settings();
    let kind = PopupKind::NewCard;
    let form = FormKind::NewPlace;

    view! {
        <Popup
            kind=kind
            is_open=Signal::derive(move || vm.is_open(kind))
            on_press=Callback::new(move |target| vm.close_by_press(kind, target))
        >
            <h3 class="popup__title">"Новое место"</h3>
            <form
                class=settings.form_class().to_string()
                name=form.form_name()
                novalidate=true
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_new_card();
                }
            >
                <FormInputs form=form markup=&INPUTS />
                <SubmitButton enabled=Signal::derive(move || vm.submit_enabled(form))>
                    "Сохранить"
                </SubmitButton>
            </form>
        </Popup>
    }
}
