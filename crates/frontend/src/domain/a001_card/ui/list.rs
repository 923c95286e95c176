use super::card::PlaceCard;
use crate::layout::page::use_page;
use leptos::prelude::*;

/// `.places__list`: every card of the gallery, first card first.
#[component]
pub fn PlacesList() -> impl IntoView {
    let vm = use_page();

    let on_delete = Callback::new(move |id| vm.delete_card(id));
    let on_like = Callback::new(move |id| vm.like_card(id));
    let on_open_image = Callback::new(move |record| vm.open_image(record));

    view! {
        <section class="places page__section">
            <ul class="places__list">
                <For
                    each=move || vm.cards()
                    key=|card| card.id
                    children=move |card| {
                        let id = card.id;
                        view! {
                            <PlaceCard
                                card=card
                                liked=Signal::derive(move || vm.is_liked(id))
                                on_delete=on_delete
                                on_like=on_like
                                on_open_image=on_open_image
                            />
                        }
                    }
                />
            </ul>
        </section>
    }
}
