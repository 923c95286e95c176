use contracts::shared::popup::{popup_classes, EscapeListener, PopupKind, PressTarget, CLOSE_CLASS};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Escape subscription backed by a window `keydown` listener.
///
/// Borrows the slot that owns the listener handle, so whoever stores the
/// slot decides how long the subscription may live.
pub struct WindowEscapeListener<'a, F> {
    handle: &'a mut Option<WindowListenerHandle>,
    on_key: F,
}

impl<'a, F> WindowEscapeListener<'a, F>
where
    F: Fn(String) + Clone + 'static,
{
    pub fn new(handle: &'a mut Option<WindowListenerHandle>, on_key: F) -> Self {
        Self { handle, on_key }
    }
}

impl<F> EscapeListener for WindowEscapeListener<'_, F>
where
    F: Fn(String) + Clone + 'static,
{
    fn attach(&mut self) {
        if self.handle.is_some() {
            log::warn!("escape listener already attached");
            return;
        }
        let on_key = self.on_key.clone();
        *self.handle = Some(window_event_listener(ev::keydown, move |event| {
            on_key(event.key());
        }));
    }

    fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
        }
    }
}

/// Classify a mousedown inside a popup.
///
/// The popup element itself is the backdrop; anything with `popup__close`
/// is a close control.
fn press_target(event: &ev::MouseEvent) -> PressTarget {
    match (event.target(), event.current_target()) {
        (Some(target), Some(current)) if target == current => PressTarget::Backdrop,
        (Some(target), _) => match target.dyn_ref::<Element>() {
            Some(element) if element.class_list().contains(CLOSE_CLASS) => {
                PressTarget::CloseButton
            }
            _ => PressTarget::Content,
        },
        _ => PressTarget::Content,
    }
}

/// Popup shell: backdrop, dialog container and close button.
///
/// Always mounted; visibility is the `popup_is-opened` class.
#[component]
pub fn Popup(
    kind: PopupKind,
    /// Whether this popup is the open one
    #[prop(into)]
    is_open: Signal<bool>,
    /// Called with every mousedown inside the popup
    on_press: Callback<PressTarget>,
    /// Extra class of the dialog container (default: `popup__content`)
    #[prop(optional, into)]
    content_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let content_class = content_class.unwrap_or_else(|| "popup__content".to_string());

    view! {
        <div
            class=move || popup_classes(kind, is_open.get())
            on:mousedown=move |event: ev::MouseEvent| on_press.run(press_target(&event))
        >
            <div class=content_class>
                <button type="button" class=CLOSE_CLASS aria-label="Закрыть"></button>
                {children()}
            </div>
        </div>
    }
}
