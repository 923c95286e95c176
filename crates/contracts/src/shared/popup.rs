//! Popup lifecycle.
//!
//! At most one popup is open at a time. While one is open a document-level
//! Escape listener is subscribed; it is unsubscribed on every close, so the
//! listener and the open popup always come and go together.

/// Попапы страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupKind {
    EditProfile,
    NewCard,
    Image,
}

impl PopupKind {
    /// Modifier class of the popup element
    pub fn type_class(&self) -> &'static str {
        match self {
            PopupKind::EditProfile => "popup_type_edit",
            PopupKind::NewCard => "popup_type_new-card",
            PopupKind::Image => "popup_type_image",
        }
    }
}

pub const POPUP_CLASS: &str = "popup";
pub const OPENED_CLASS: &str = "popup_is-opened";
pub const ANIMATED_CLASS: &str = "popup_is-animated";
pub const CLOSE_CLASS: &str = "popup__close";

/// Class list of a popup element
pub fn popup_classes(kind: PopupKind, is_open: bool) -> String {
    let mut classes = format!("{POPUP_CLASS} {} {ANIMATED_CLASS}", kind.type_class());
    if is_open {
        classes.push(' ');
        classes.push_str(OPENED_CLASS);
    }
    classes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PopupState {
    #[default]
    Closed,
    Open(PopupKind),
}

/// What a pointer press inside a popup landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The popup element itself, i.e. the dimmed area around the dialog
    Backdrop,
    /// An element carrying `popup__close`
    CloseButton,
    /// Anything inside the dialog
    Content,
}

/// Document-level Escape key subscription.
///
/// The controller calls `attach` on every Closed→Open transition and
/// `detach` on every Open→Closed transition.
pub trait EscapeListener {
    fn attach(&mut self);
    fn detach(&mut self);
}

/// Модальные окна: одно открытое окно и подписка на Escape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupController {
    state: PopupState,
}

impl PopupController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Option<PopupKind> {
        match self.state {
            PopupState::Open(kind) => Some(kind),
            PopupState::Closed => None,
        }
    }

    pub fn is_open(&self, kind: PopupKind) -> bool {
        self.state == PopupState::Open(kind)
    }

    /// Open `kind`. Another open popup is closed first; reopening the
    /// open popup changes nothing.
    pub fn open_modal<L: EscapeListener + ?Sized>(&mut self, kind: PopupKind, listener: &mut L) {
        match self.state {
            PopupState::Open(current) if current == kind => return,
            PopupState::Open(current) => {
                self.close_modal(current, listener);
            }
            PopupState::Closed => {}
        }
        log::debug!("open popup {:?}", kind);
        self.state = PopupState::Open(kind);
        listener.attach();
    }

    /// Close `kind` if it is the open popup. Returns whether it closed.
    pub fn close_modal<L: EscapeListener + ?Sized>(&mut self, kind: PopupKind, listener: &mut L) -> bool {
        if self.state != PopupState::Open(kind) {
            return false;
        }
        log::debug!("close popup {:?}", kind);
        self.state = PopupState::Closed;
        listener.detach();
        true
    }

    /// Keydown handler: Escape closes the open popup, anything else is ignored.
    pub fn close_by_escape<L: EscapeListener + ?Sized>(&mut self, key: &str, listener: &mut L) -> bool {
        if key != "Escape" {
            return false;
        }
        match self.opened() {
            Some(kind) => self.close_modal(kind, listener),
            None => false,
        }
    }

    /// Mousedown handler of a popup: backdrop and close controls close it.
    pub fn close_by_press<L: EscapeListener + ?Sized>(
        &mut self,
        kind: PopupKind,
        target: PressTarget,
        listener: &mut L,
    ) -> bool {
        match target {
            PressTarget::Backdrop | PressTarget::CloseButton => self.close_modal(kind, listener),
            PressTarget::Content => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::CountingListener;

    #[test]
    fn test_open_then_close() {
        let mut popups = PopupController::new();
        let mut listener = CountingListener::default();

        popups.open_modal(PopupKind::EditProfile, &mut listener);
        assert!(popups.is_open(PopupKind::EditProfile));
        assert_eq!(listener.active(), 1);

        assert!(popups.close_modal(PopupKind::EditProfile, &mut listener));
        assert_eq!(popups.opened(), None);
        assert_eq!(listener.active(), 0);
    }

    #[test]
    fn test_second_open_replaces_first() {
        let mut popups = PopupController::new();
        let mut listener = CountingListener::default();

        popups.open_modal(PopupKind::EditProfile, &mut listener);
        popups.open_modal(PopupKind::NewCard, &mut listener);

        assert_eq!(popups.opened(), Some(PopupKind::NewCard));
        assert!(!popups.is_open(PopupKind::EditProfile));
        assert_eq!(listener.active(), 1);
        assert_eq!(listener.attached, 2);
    }

    #[test]
    fn test_reopen_is_noop() {
        let mut popups = PopupController::new();
        let mut listener = CountingListener::default();

        popups.open_modal(PopupKind::Image, &mut listener);
        popups.open_modal(PopupKind::Image, &mut listener);
        assert_eq!(listener.attached, 1);
        assert_eq!(listener.active(), 1);
    }

    #[test]
    fn test_close_not_open_is_noop() {
        let mut popups = PopupController::new();
        let mut listener = CountingListener::default();

        assert!(!popups.close_modal(PopupKind::Image, &mut listener));
        popups.open_modal(PopupKind::NewCard, &mut listener);
        assert!(!popups.close_modal(PopupKind::Image, &mut listener));
        assert!(popups.is_open(PopupKind::NewCard));
        assert_eq!(listener.detached, 0);
    }

    #[test]
    fn test_escape() {
        let mut popups = PopupController::new();
        let mut listener = CountingListener::default();

        // nothing open
        assert!(!popups.close_by_escape("Escape", &mut listener));
        assert_eq!(listener, CountingListener::default());

        popups.open_modal(PopupKind::NewCard, &mut listener);
        assert!(!popups.close_by_escape("Enter", &mut listener));
        assert!(popups.is_open(PopupKind::NewCard));

        assert!(popups.close_by_escape("Escape", &mut listener));
        assert_eq!(popups.opened(), None);
        assert_eq!(listener.active(), 0);
    }

    #[test]
    fn test_press_targets() {
        let mut popups = PopupController::new();
        let mut listener = CountingListener::default();

        popups.open_modal(PopupKind::Image, &mut listener);
        assert!(!popups.close_by_press(PopupKind::Image, PressTarget::Content, &mut listener));
        assert!(popups.close_by_press(PopupKind::Image, PressTarget::Backdrop, &mut listener));

        popups.open_modal(PopupKind::EditProfile, &mut listener);
        assert!(popups.close_by_press(
            PopupKind::EditProfile,
            PressTarget::CloseButton,
            &mut listener
        ));
        assert_eq!(listener.active(), 0);
    }

    #[test]
    fn test_popup_classes() {
        assert_eq!(
            popup_classes(PopupKind::Image, false),
            "popup popup_type_image popup_is-animated"
        );
        assert_eq!(
            popup_classes(PopupKind::NewCard, true),
            "popup popup_type_new-card popup_is-animated popup_is-opened"
        );
    }
}
