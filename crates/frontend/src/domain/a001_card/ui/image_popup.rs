use crate::layout::page::use_page;
use crate::shared::popup::Popup;
use contracts::shared::popup::PopupKind;
use leptos::prelude::*;

/// Увеличенная картинка карточки с подписью
#[component]
pub fn ImagePopup() -> impl IntoView {
    let vm = use_page();
    let kind = PopupKind::Image;

    let link = move || vm.preview().map(|r| r.link).unwrap_or_default();
    let name = move || vm.preview().map(|r| r.name).unwrap_or_default();

    view! {
        <Popup
            kind=kind
            is_open=Signal::derive(move || vm.is_open(kind))
            on_press=Callback::new(move |target| vm.close_by_press(kind, target))
            content_class="popup__content popup__content_content_image"
        >
            <img class="popup__image" src=link alt=name />
            <p class="popup__caption">{name}</p>
        </Popup>
    }
}
