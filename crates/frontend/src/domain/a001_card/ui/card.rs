use contracts::domain::a001_card::{Card, CardId, CardRecord};
use leptos::prelude::*;

pub const LIKE_ACTIVE_CLASS: &str = "card__like-button_is-active";

/// Class list of a like button
pub fn like_button_classes(liked: bool) -> String {
    if liked {
        format!("card__like-button {LIKE_ACTIVE_CLASS}")
    } else {
        "card__like-button".to_string()
    }
}

/// Карточка места
///
/// Picture and title come from the record; the three controls only report
/// back through their callbacks.
#[component]
pub fn PlaceCard(
    card: Card,
    /// Current liked flag of this card
    #[prop(into)]
    liked: Signal<bool>,
    on_delete: Callback<CardId>,
    on_like: Callback<CardId>,
    on_open_image: Callback<CardRecord>,
) -> impl IntoView {
    let Card { id, record, .. } = card;
    let CardRecord { name, link } = record.clone();

    view! {
        <li class="places__item card">
            <img
                class="card__image"
                src=link
                alt=name.clone()
                on:click=move |_| on_open_image.run(record.clone())
            />
            <button
                type="button"
                class="card__delete-button"
                aria-label="Удалить"
                on:click=move |_| on_delete.run(id)
            ></button>
            <div class="card__description">
                <h2 class="card__title">{name}</h2>
                <button
                    type="button"
                    class=move || like_button_classes(liked.get())
                    aria-label="Нравится"
                    on:click=move |_| on_like.run(id)
                ></button>
            </div>
        </li>
    }
}
