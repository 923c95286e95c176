use serde::{Deserialize, Serialize};

/// Селекторы и классы, которыми управляет валидация форм
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSettings {
    pub form_selector: String,
    pub input_selector: String,
    pub submit_button_selector: String,
    pub inactive_button_class: String,
    pub input_error_class: String,
    pub error_class: String,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            form_selector: ".popup__form".into(),
            input_selector: ".popup__input".into(),
            submit_button_selector: ".popup__button".into(),
            inactive_button_class: "popup__button_disabled".into(),
            input_error_class: "popup__input_type_error".into(),
            error_class: "popup__error_visible".into(),
        }
    }
}

impl ValidationSettings {
    pub fn form_class(&self) -> &str {
        class_of(&self.form_selector)
    }

    pub fn input_class(&self) -> &str {
        class_of(&self.input_selector)
    }

    pub fn submit_button_class(&self) -> &str {
        class_of(&self.submit_button_selector)
    }

    /// Full class list of an input in the given state
    pub fn input_classes(&self, base: &str, invalid: bool) -> String {
        join_classes(&[self.input_class(), base], invalid.then_some(self.input_error_class.as_str()))
    }

    /// Full class list of the `{input-id}-error` element
    pub fn error_classes(&self, input_id: &str, visible: bool) -> String {
        let own = format!("{input_id}-error");
        join_classes(&["popup__error", own.as_str()], visible.then_some(self.error_class.as_str()))
    }

    /// Full class list of the submit button
    pub fn submit_classes(&self, enabled: bool) -> String {
        join_classes(
            &[self.submit_button_class()],
            (!enabled).then_some(self.inactive_button_class.as_str()),
        )
    }
}

/// `.popup__form` -> `popup__form`; plain class names pass through.
fn class_of(selector: &str) -> &str {
    selector.strip_prefix('.').unwrap_or(selector)
}

fn join_classes(base: &[&str], modifier: Option<&str>) -> String {
    base.iter()
        .copied()
        .chain(modifier)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize_from_camel_case() {
        let json = r#"{
            "formSelector": ".popup__form",
            "inputSelector": ".popup__input",
            "submitButtonSelector": ".popup__button",
            "inactiveButtonClass": "popup__button_disabled",
            "inputErrorClass": "popup__input_type_error",
            "errorClass": "popup__error_visible"
        }"#;
        let parsed: ValidationSettings = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, ValidationSettings::default());
    }

    #[test]
    fn test_selector_to_class() {
        let s = ValidationSettings::default();
        assert_eq!(s.form_class(), "popup__form");
        assert_eq!(s.input_class(), "popup__input");
        assert_eq!(s.submit_button_class(), "popup__button");
    }

    #[test]
    fn test_state_classes() {
        let s = ValidationSettings::default();
        assert_eq!(
            s.input_classes("popup__input_type_name", false),
            "popup__input popup__input_type_name"
        );
        assert_eq!(
            s.input_classes("popup__input_type_name", true),
            "popup__input popup__input_type_name popup__input_type_error"
        );
        assert_eq!(s.error_classes("name-input", false), "popup__error name-input-error");
        assert_eq!(
            s.error_classes("name-input", true),
            "popup__error name-input-error popup__error_visible"
        );
        assert_eq!(s.submit_classes(true), "popup__button");
        assert_eq!(s.submit_classes(false), "popup__button popup__button_disabled");
    }
}
