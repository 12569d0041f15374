//! Form element variants.
//!
//! Every element carries a `type` discriminant on the wire. Each variant is its
//! own struct so the fields a renderer requires are always present.

use serde::{Deserialize, Serialize};

/// One declarative unit of the settings UI.
///
/// Serialized as an object tagged by `type`:
///
/// ```
/// use watchface_config::models::{FormElement, Submit};
///
/// let element = FormElement::from(Submit::new("Apply Settings"));
/// let json = serde_json::to_string(&element).unwrap();
/// assert_eq!(json, r#"{"type":"submit","defaultValue":"Apply Settings"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormElement {
    /// Heading text
    Heading(Heading),
    /// Group of nested elements
    Section(Section),
    /// Boolean switch reported to the device
    Toggle(Toggle),
    /// Button that sends the form values
    Submit(Submit),
    /// Free text, may contain markup
    Text(Text),
}

impl FormElement {
    /// Returns the wire name of this element's type.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Heading(_) => "heading",
            Self::Section(_) => "section",
            Self::Toggle(_) => "toggle",
            Self::Submit(_) => "submit",
            Self::Text(_) => "text",
        }
    }

    /// Returns the nested items if this element is a section.
    #[must_use]
    pub fn children(&self) -> &[FormElement] {
        match self {
            Self::Section(section) => &section.items,
            _ => &[],
        }
    }

    /// Returns the toggle if this element is one.
    #[must_use]
    pub const fn as_toggle(&self) -> Option<&Toggle> {
        match self {
            Self::Toggle(toggle) => Some(toggle),
            _ => None,
        }
    }
}

/// Heading text with an optional level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    /// Display text
    pub default_value: String,
    /// Heading level (1 is largest); the renderer picks a default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

impl Heading {
    /// Creates a heading without an explicit level.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            default_value: text.into(),
            size: None,
        }
    }

    /// Sets the heading level.
    #[must_use]
    pub const fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }
}

/// Group of nested elements rendered together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Nested elements in rendered order
    pub items: Vec<FormElement>,
}

impl Section {
    /// Creates a section from its items.
    pub fn new(items: impl IntoIterator<Item = FormElement>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

/// Boolean switch whose value is reported to the device under `message_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toggle {
    /// Identifier the device firmware reads the value under
    pub message_key: String,
    /// Display label
    pub label: String,
    /// Initial state
    pub default_value: bool,
}

impl Toggle {
    /// Creates a toggle.
    pub fn new(message_key: impl Into<String>, label: impl Into<String>, default_value: bool) -> Self {
        Self {
            message_key: message_key.into(),
            label: label.into(),
            default_value,
        }
    }
}

/// Button that sends the current values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submit {
    /// Button label
    pub default_value: String,
}

impl Submit {
    /// Creates a submit button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            default_value: label.into(),
        }
    }
}

/// Free text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    /// Display text, may contain HTML markup
    pub default_value: String,
}

impl Text {
    /// Creates a text block.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            default_value: text.into(),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for FormElement {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(Heading, Section, Toggle, Submit, Text);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_heading_omits_missing_size() {
        let element = FormElement::from(Heading::new("Color Selection"));
        let value = serde_json::to_value(&element).unwrap();

        assert_eq!(
            value,
            json!({ "type": "heading", "defaultValue": "Color Selection" })
        );
    }

    #[test]
    fn test_heading_with_size() {
        let element = FormElement::from(Heading::new("Settings").with_size(1));
        let value = serde_json::to_value(&element).unwrap();

        assert_eq!(value["size"], 1);
    }

    #[test]
    fn test_toggle_uses_camel_case_fields() {
        let element = FormElement::from(Toggle::new("KEY_A", "A", true));
        let value = serde_json::to_value(&element).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "toggle",
                "messageKey": "KEY_A",
                "label": "A",
                "defaultValue": true
            })
        );
    }

    #[test]
    fn test_type_is_serialized_first() {
        let element = FormElement::from(Text::new("hello"));
        let json = serde_json::to_string(&element).unwrap();

        assert!(json.starts_with(r#"{"type":"text""#));
    }

    #[test]
    fn test_toggle_missing_message_key_is_rejected() {
        let result: Result<FormElement, _> =
            serde_json::from_value(json!({ "type": "toggle", "label": "A", "defaultValue": false }));

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<FormElement, _> =
            serde_json::from_value(json!({ "type": "slider", "defaultValue": 3 }));

        assert!(result.is_err());
    }

    #[test]
    fn test_children_only_for_sections() {
        let section = FormElement::from(Section::new([Text::new("a").into()]));
        let text = FormElement::from(Text::new("b"));

        assert_eq!(section.children().len(), 1);
        assert!(text.children().is_empty());
        assert_eq!(section.kind(), "section");
    }
}
