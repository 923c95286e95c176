use crate::layout::page::{Page, PageViewModel};
use crate::shared::config::read_page_config;
use crate::shared::validation::enable_validation;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = read_page_config();

    // Validation hooks are shared by both popup forms.
    enable_validation(config.validation.clone());

    // Provide the page view model to every component via context.
    provide_context(PageViewModel::new(&config));

    view! {
        <Page />
    }
}
