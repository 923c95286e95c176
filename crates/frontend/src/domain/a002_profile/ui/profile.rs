use crate::layout::page::use_page;
use leptos::prelude::*;

/// Шапка профиля с кнопками редактирования и добавления карточки
#[component]
pub fn ProfileSection(
    /// `.profile__edit-button` click
    on_edit: Callback<()>,
    /// `.profile__add-button` click
    on_add: Callback<()>,
) -> impl IntoView {
    let vm = use_page();

    view! {
        <section class="profile page__section">
            <div class="profile__info">
                <h1 class="profile__title">{move || vm.profile().name}</h1>
                <button
                    class="profile__edit-button"
                    type="button"
                    aria-label="Редактировать профиль"
                    on:click=move |_| on_edit.run(())
                ></button>
                <p class="profile__description">{move || vm.profile().description}</p>
            </div>
            <button
                class="profile__add-button"
                type="button"
                aria-label="Добавить место"
                on:click=move |_| on_add.run(())
            ></button>
        </section>
    }
}
