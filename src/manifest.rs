//! The watchface's settings form.
//!
//! This is the form the phone-side renderer shows when the user opens the
//! watchface settings. Toggle message keys must stay in sync with
//! [`DEVICE_MESSAGE_KEYS`](crate::constants::DEVICE_MESSAGE_KEYS).

use crate::constants::KEY_INVERT_COLORS;
use crate::models::{Heading, Section, SettingsForm, Submit, Text, Toggle};

/// Attribution shown under the submit button.
pub const WEATHER_ATTRIBUTION: &str = "<a href='http://darksky.net/'>Powered by Dark Sky</a>";

/// Builds the settings form.
///
/// Always returns the same elements in the same order.
#[must_use]
pub fn settings_form() -> SettingsForm {
    SettingsForm::new([
        Heading::new("Settings").with_size(1).into(),
        Section::new([
            Heading::new("Color Selection").into(),
            Toggle::new(KEY_INVERT_COLORS, "Invert Colors", false).into(),
        ])
        .into(),
        Submit::new("Apply Settings").into(),
        Text::new(WEATHER_ATTRIBUTION).into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormElement;
    use std::collections::HashSet;

    #[test]
    fn test_has_four_top_level_elements_in_order() {
        let form = settings_form();
        let kinds: Vec<&str> = form.elements().iter().map(FormElement::kind).collect();

        assert_eq!(kinds, vec!["heading", "section", "submit", "text"]);
    }

    #[test]
    fn test_toggle_keys_are_present_and_unique() {
        let form = settings_form();
        let keys: Vec<&str> = form.message_keys().collect();
        let unique: HashSet<&str> = keys.iter().copied().collect();

        assert!(!keys.is_empty());
        assert!(keys.iter().all(|key| !key.is_empty()));
        assert_eq!(keys.len(), unique.len());
    }

    #[test]
    fn test_invert_colors_defaults_to_off() {
        let form = settings_form();
        let toggle = form.toggle(KEY_INVERT_COLORS).unwrap();

        assert!(!toggle.default_value);
        assert_eq!(toggle.label, "Invert Colors");
    }

    #[test]
    fn test_matches_renderer_schema() {
        let value = serde_json::to_value(settings_form()).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                { "type": "heading", "defaultValue": "Settings", "size": 1 },
                { "type": "section", "items": [
                    { "type": "heading", "defaultValue": "Color Selection" },
                    { "type": "toggle", "messageKey": "KEY_INVERT_COLORS",
                      "label": "Invert Colors", "defaultValue": false }
                ]},
                { "type": "submit", "defaultValue": "Apply Settings" },
                { "type": "text", "defaultValue": WEATHER_ATTRIBUTION }
            ])
        );
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(settings_form(), settings_form());
    }
}
