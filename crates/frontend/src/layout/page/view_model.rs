use crate::shared::popup::WindowEscapeListener;
use contracts::domain::a001_card::{Card, CardId, CardRecord};
use contracts::domain::a002_profile::Profile;
use contracts::page::PageModel;
use contracts::shared::config::PageConfig;
use contracts::shared::popup::{EscapeListener, PopupKind, PressTarget};
use contracts::shared::validation::FormKind;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel of the gallery page
#[derive(Clone, Copy)]
pub struct PageViewModel {
    model: RwSignal<PageModel>,
    /// Window keydown subscription, present exactly while a popup is open
    escape: StoredValue<Option<WindowListenerHandle>, LocalStorage>,
}

pub fn use_page() -> PageViewModel {
    use_context::<PageViewModel>()
        .expect("PageViewModel not provided in context (provide it in app root)")
}

impl PageViewModel {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            model: RwSignal::new(PageModel::new(config)),
            escape: StoredValue::new_local(None),
        }
    }

    /// Run a model transition that may open or close popups, handing it
    /// the window Escape listener.
    fn transition<R>(
        &self,
        f: impl FnOnce(&mut PageModel, &mut dyn EscapeListener) -> R,
    ) -> Option<R> {
        let vm = *self;
        let model = self.model;
        let mut out = None;
        self.escape.update_value(|handle| {
            let mut window_listener = WindowEscapeListener::new(handle, move |key: String| {
                vm.close_by_escape(&key);
            });
            let listener: &mut dyn EscapeListener = &mut window_listener;
            model.update(|m| out = Some(f(m, listener)));
        });
        out
    }

    // ------------------------------------------------------------------
    // Reads (tracked)
    // ------------------------------------------------------------------

    pub fn profile(&self) -> Profile {
        self.model.with(|m| m.profile.clone())
    }

    pub fn cards(&self) -> Vec<Card> {
        self.model.with(|m| m.gallery.cards().to_vec())
    }

    pub fn is_liked(&self, id: CardId) -> bool {
        self.model
            .with(|m| m.gallery.get(id).map(|c| c.liked).unwrap_or_default())
    }

    pub fn is_open(&self, kind: PopupKind) -> bool {
        self.model.with(|m| m.popups.is_open(kind))
    }

    pub fn preview(&self) -> Option<CardRecord> {
        self.model.with(|m| m.preview.clone())
    }

    pub fn field_value(&self, form: FormKind, field: &str) -> String {
        self.model.with(|m| m.form(form).value(field).to_string())
    }

    pub fn field_error(&self, form: FormKind, field: &str) -> Option<String> {
        self.model
            .with(|m| m.form(form).error(field).map(ToString::to_string))
    }

    pub fn submit_enabled(&self, form: FormKind) -> bool {
        self.model.with(|m| m.form(form).submit_enabled())
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn input(&self, form: FormKind, field: &str, value: String) {
        self.model.update(|m| m.input(form, field, value));
    }

    pub fn open_profile_edit(&self) {
        self.transition(|m, l| m.open_profile_edit(l));
    }

    pub fn submit_profile(&self) {
        if let Some(Err(e)) = self.transition(|m, l| m.submit_profile(l)) {
            log::warn!("profile not saved: {}", e);
        }
    }

    pub fn open_new_card(&self) {
        self.transition(|m, l| m.open_new_card(l));
    }

    pub fn submit_new_card(&self) {
        match self.transition(|m, l| m.submit_new_card(l)) {
            Some(Ok(id)) => log::debug!("card {} added", id.0),
            Some(Err(e)) => log::warn!("card not added: {}", e),
            None => {}
        }
    }

    pub fn open_image(&self, record: CardRecord) {
        self.transition(|m, l| m.open_image(record, l));
    }

    /// Remove a card on the next tick.
    ///
    /// The click that asked for it is still being dispatched by the card's
    /// own button; unmounting it synchronously would drop that handler.
    pub fn delete_card(&self, id: CardId) {
        let model = self.model;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            model.update(|m| {
                m.delete_card(id);
            });
        });
    }

    pub fn like_card(&self, id: CardId) {
        self.model.update(|m| {
            m.like_card(id);
        });
    }

    pub fn close_by_escape(&self, key: &str) {
        self.transition(|m, l| m.close_by_escape(key, l));
    }

    pub fn close_by_press(&self, kind: PopupKind, target: PressTarget) {
        self.transition(|m, l| m.close_by_press(kind, target, l));
    }
}
