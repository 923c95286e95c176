use super::view_model::use_page;
use crate::domain::a001_card::ui::{ImagePopup, NewCardPopup, PlacesList};
use crate::domain::a002_profile::ui::{EditProfilePopup, ProfileSection};
use leptos::prelude::*;

/// Страница галереи: профиль, карточки и три попапа
#[component]
pub fn Page() -> impl IntoView {
    let vm = use_page();

    view! {
        <div class="page">
            <main class="content">
                <ProfileSection
                    on_edit=Callback::new(move |_: ()| vm.open_profile_edit())
                    on_add=Callback::new(move |_: ()| vm.open_new_card())
                />
                <PlacesList />
            </main>

            <EditProfilePopup />
            <NewCardPopup />
            <ImagePopup />
        </div>
    }
}
