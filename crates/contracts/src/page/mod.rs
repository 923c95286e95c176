//! Page orchestration model.
//!
//! Holds everything the page shows and implements the user flows on top of
//! the gallery, the profile, both forms and the popup controller. Popup
//! transitions take the Escape listener as an argument so the browser
//! binding can subscribe a real `keydown` handler.

mod error;

pub use error::SubmitError;

use crate::domain::a001_card::{CardId, CardRecord, Gallery};
use crate::domain::a002_profile::{Profile, ProfileDto};
use crate::shared::config::PageConfig;
use crate::shared::popup::{EscapeListener, PopupController, PopupKind, PressTarget};
use crate::shared::validation::{FormKind, FormValidation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub profile: Profile,
    pub gallery: Gallery,
    pub popups: PopupController,
    pub profile_form: FormValidation,
    pub card_form: FormValidation,
    /// Card shown by the image popup
    pub preview: Option<CardRecord>,
}

impl PageModel {
    /// Build the page from its configuration: validation is enabled on
    /// both forms and the seed cards are rendered.
    pub fn new(config: &PageConfig) -> Self {
        let gallery = Gallery::from_seed(&config.initial_cards);
        if gallery.is_empty() {
            log::warn!("no initial cards configured");
        } else {
            log::info!("rendered {} initial cards", gallery.len());
        }
        Self {
            profile: config.profile.clone(),
            gallery,
            popups: PopupController::new(),
            profile_form: FormValidation::new(FormKind::EditProfile),
            card_form: FormValidation::new(FormKind::NewPlace),
            preview: None,
        }
    }

    pub fn form(&self, kind: FormKind) -> &FormValidation {
        match kind {
            FormKind::EditProfile => &self.profile_form,
            FormKind::NewPlace => &self.card_form,
        }
    }

    pub fn form_mut(&mut self, kind: FormKind) -> &mut FormValidation {
        match kind {
            FormKind::EditProfile => &mut self.profile_form,
            FormKind::NewPlace => &mut self.card_form,
        }
    }

    /// Input event of a form field
    pub fn input(&mut self, kind: FormKind, field: &str, value: String) {
        if !self.form_mut(kind).input(field, value) {
            log::warn!("{} has no input `{}`", kind.form_name(), field);
        }
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    /// Edit button: copy the displayed profile into the form and open it.
    pub fn open_profile_edit<L: EscapeListener + ?Sized>(&mut self, listener: &mut L) {
        let ProfileDto { name, description } = self.profile.to_dto();
        self.profile_form
            .prefill([("name", name), ("description", description)]);
        self.popups.open_modal(PopupKind::EditProfile, listener);
    }

    pub fn submit_profile<L: EscapeListener + ?Sized>(&mut self, listener: &mut L) -> Result<(), SubmitError> {
        if !self.popups.is_open(PopupKind::EditProfile) {
            return Err(SubmitError::NotOpen(FormKind::EditProfile));
        }
        check_form(&self.profile_form)?;

        let dto = ProfileDto {
            name: self.profile_form.value("name").to_string(),
            description: self.profile_form.value("description").to_string(),
        };
        self.profile.update(&dto);
        self.popups.close_modal(PopupKind::EditProfile, listener);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Cards
    // ------------------------------------------------------------------

    /// Add button: clear the form and open it.
    pub fn open_new_card<L: EscapeListener + ?Sized>(&mut self, listener: &mut L) {
        self.card_form.reset();
        self.popups.open_modal(PopupKind::NewCard, listener);
    }

    /// Render the entered card at the front, close the popup, clear the form.
    pub fn submit_new_card<L: EscapeListener + ?Sized>(
        &mut self,
        listener: &mut L,
    ) -> Result<CardId, SubmitError> {
        if !self.popups.is_open(PopupKind::NewCard) {
            return Err(SubmitError::NotOpen(FormKind::NewPlace));
        }
        check_form(&self.card_form)?;

        let record = CardRecord::new(self.card_form.value("place-name"), self.card_form.value("link"));
        record.validate().map_err(SubmitError::InvalidCard)?;

        let id = self.gallery.render(record);
        self.popups.close_modal(PopupKind::NewCard, listener);
        self.card_form.reset();
        Ok(id)
    }

    /// Image click: show the card's picture and caption enlarged.
    pub fn open_image<L: EscapeListener + ?Sized>(&mut self, record: CardRecord, listener: &mut L) {
        self.preview = Some(record);
        self.popups.open_modal(PopupKind::Image, listener);
    }

    pub fn delete_card(&mut self, id: CardId) -> bool {
        self.gallery.delete(id).is_some()
    }

    pub fn like_card(&mut self, id: CardId) -> Option<bool> {
        self.gallery.toggle_like(id)
    }

    // ------------------------------------------------------------------
    // Popups
    // ------------------------------------------------------------------

    pub fn close_popup<L: EscapeListener + ?Sized>(&mut self, kind: PopupKind, listener: &mut L) -> bool {
        self.popups.close_modal(kind, listener)
    }

    pub fn close_by_escape<L: EscapeListener + ?Sized>(&mut self, key: &str, listener: &mut L) -> bool {
        self.popups.close_by_escape(key, listener)
    }

    pub fn close_by_press<L: EscapeListener + ?Sized>(
        &mut self,
        kind: PopupKind,
        target: PressTarget,
        listener: &mut L,
    ) -> bool {
        self.popups.close_by_press(kind, target, listener)
    }
}

fn check_form(form: &FormValidation) -> Result<(), SubmitError> {
    match form.first_invalid() {
        Some((field, source)) => Err(SubmitError::InvalidField {
            form: form.kind(),
            field: field.to_string(),
            source,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{parse_config, DEFAULT_CONFIG};
    use crate::shared::test_support::CountingListener;
    use crate::shared::validation::FieldError;
    use pretty_assertions::assert_eq;

    fn page() -> (PageModel, CountingListener) {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        (PageModel::new(&config), CountingListener::default())
    }

    fn names(page: &PageModel) -> Vec<String> {
        page.gallery
            .cards()
            .iter()
            .map(|c| c.record.name.clone())
            .collect()
    }

    #[test]
    fn test_initial_render_last_seed_first() {
        let (page, _) = page();
        assert_eq!(
            names(&page),
            vec![
                "Байкал",
                "Холмогорский район",
                "Камчатка",
                "Иваново",
                "Челябинская область",
                "Архыз",
            ]
        );
        assert_eq!(page.popups.opened(), None);
    }

    #[test]
    fn test_new_card_flow() {
        let (mut page, mut listener) = page();
        let before = page.gallery.len();

        page.open_new_card(&mut listener);
        assert!(!page.card_form.submit_enabled());

        page.input(FormKind::NewPlace, "place-name", "Mountain".into());
        page.input(FormKind::NewPlace, "link", "https://example.com/m.jpg".into());
        assert!(page.card_form.submit_enabled());

        let id = page.submit_new_card(&mut listener).unwrap();

        let first = &page.gallery.cards()[0];
        assert_eq!(first.id, id);
        assert_eq!(
            first.record,
            CardRecord::new("Mountain", "https://example.com/m.jpg")
        );
        assert_eq!(page.gallery.len(), before + 1);
        assert_eq!(page.popups.opened(), None);
        assert_eq!(page.card_form.value("place-name"), "");
        assert_eq!(page.card_form.value("link"), "");
        assert_eq!(listener.active(), 0);
    }

    #[test]
    fn test_open_new_card_resets_leftovers() {
        let (mut page, mut listener) = page();
        page.open_new_card(&mut listener);
        page.input(FormKind::NewPlace, "place-name", "Half typed".into());
        page.close_by_escape("Escape", &mut listener);

        page.open_new_card(&mut listener);
        assert_eq!(page.card_form.value("place-name"), "");
    }

    #[test]
    fn test_invalid_new_card_is_rejected() {
        let (mut page, mut listener) = page();
        let before = page.gallery.len();

        page.open_new_card(&mut listener);
        page.input(FormKind::NewPlace, "place-name", "Mountain".into());
        page.input(FormKind::NewPlace, "link", "not a link".into());

        let err = page.submit_new_card(&mut listener).unwrap_err();
        assert_eq!(
            err,
            SubmitError::InvalidField {
                form: FormKind::NewPlace,
                field: "link".into(),
                source: FieldError::TypeMismatch,
            }
        );
        assert_eq!(page.gallery.len(), before);
        assert!(page.popups.is_open(PopupKind::NewCard));
    }

    #[test]
    fn test_whitespace_place_name_is_rejected_inline() {
        let (mut page, mut listener) = page();
        let before = page.gallery.len();

        page.open_new_card(&mut listener);
        page.input(FormKind::NewPlace, "place-name", "  ".into());
        page.input(FormKind::NewPlace, "link", "https://example.com/m.jpg".into());

        assert_eq!(
            page.card_form.error("place-name"),
            Some(&FieldError::ValueMissing)
        );
        assert!(!page.card_form.submit_enabled());
        assert_eq!(
            page.submit_new_card(&mut listener),
            Err(SubmitError::InvalidField {
                form: FormKind::NewPlace,
                field: "place-name".into(),
                source: FieldError::ValueMissing,
            })
        );
        assert_eq!(page.gallery.len(), before);
    }

    #[test]
    fn test_long_profile_name_can_be_resubmitted() {
        let (mut page, mut listener) = page();
        let long = "A".repeat(41);
        page.profile = Profile::new(long.clone(), "Исследователь океана");

        page.open_profile_edit(&mut listener);
        assert!(page.profile_form.submit_enabled());
        assert_eq!(page.profile_form.error("name"), None);

        page.submit_profile(&mut listener).unwrap();
        assert_eq!(page.profile.name, long);
        assert_eq!(page.popups.opened(), None);
    }

    #[test]
    fn test_empty_seed() {
        let config = parse_config(r#"{ "initialCards": [] }"#).unwrap();
        let page = PageModel::new(&config);
        assert!(page.gallery.is_empty());
    }

    #[test]
    fn test_profile_flow() {
        let (mut page, mut listener) = page();

        page.open_profile_edit(&mut listener);
        assert_eq!(page.profile_form.value("name"), "Жак-Ив Кусто");
        assert_eq!(page.profile_form.value("description"), "Исследователь океана");
        assert!(page.profile_form.submit_enabled());

        page.input(FormKind::EditProfile, "name", "Ada".into());
        page.input(FormKind::EditProfile, "description", "Engineer".into());
        page.submit_profile(&mut listener).unwrap();

        assert_eq!(page.profile, Profile::new("Ada", "Engineer"));
        assert_eq!(page.popups.opened(), None);
        assert_eq!(listener.active(), 0);
    }

    #[test]
    fn test_submit_closed_form() {
        let (mut page, mut listener) = page();
        assert_eq!(
            page.submit_profile(&mut listener),
            Err(SubmitError::NotOpen(FormKind::EditProfile))
        );
        assert_eq!(
            page.submit_new_card(&mut listener),
            Err(SubmitError::NotOpen(FormKind::NewPlace))
        );
    }

    #[test]
    fn test_image_preview() {
        let (mut page, mut listener) = page();
        let card = page.gallery.cards()[2].clone();

        page.open_image(card.record.clone(), &mut listener);
        assert_eq!(page.preview, Some(card.record));
        assert!(page.popups.is_open(PopupKind::Image));

        assert!(page.close_by_press(PopupKind::Image, PressTarget::Backdrop, &mut listener));
        assert_eq!(listener.active(), 0);
    }

    #[test]
    fn test_delete_and_like() {
        let (mut page, _) = page();
        let id = page.gallery.cards()[3].id;
        let before = page.gallery.len();

        assert_eq!(page.like_card(id), Some(true));
        assert_eq!(page.like_card(id), Some(false));
        assert_eq!(page.like_card(id), Some(true));

        assert!(page.delete_card(id));
        assert!(!page.delete_card(id));
        assert_eq!(page.gallery.len(), before - 1);
        assert_eq!(page.like_card(id), None);
    }

    #[test]
    fn test_only_one_popup_open() {
        let (mut page, mut listener) = page();
        let record = page.gallery.cards()[0].record.clone();

        page.open_profile_edit(&mut listener);
        page.open_new_card(&mut listener);
        page.open_image(record, &mut listener);

        assert_eq!(page.popups.opened(), Some(PopupKind::Image));
        assert_eq!(listener.active(), 1);

        assert!(page.close_by_escape("Escape", &mut listener));
        assert!(!page.close_by_escape("Escape", &mut listener));
        assert_eq!(listener.active(), 0);
    }
}
