//! Ordered settings form.

use crate::models::element::{FormElement, Toggle};
use serde::{Deserialize, Serialize};

/// Ordered sequence of form elements.
///
/// Order is significant: it is the order the renderer draws the elements in.
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsForm {
    elements: Vec<FormElement>,
}

impl SettingsForm {
    /// Creates a form from its top-level elements.
    pub fn new(elements: impl IntoIterator<Item = FormElement>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Top-level elements in rendered order.
    #[must_use]
    pub fn elements(&self) -> &[FormElement] {
        &self.elements
    }

    /// Number of top-level elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the form has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Depth-first walk over every element, nested ones included.
    ///
    /// Each item is paired with its nesting depth (0 for top-level elements).
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.elements.iter().rev().map(|e| (e, 0)).collect(),
        }
    }

    /// Every toggle in rendered order.
    pub fn toggles(&self) -> impl Iterator<Item = &Toggle> {
        self.walk().filter_map(|(element, _)| element.as_toggle())
    }

    /// Every toggle's message key in rendered order.
    pub fn message_keys(&self) -> impl Iterator<Item = &str> {
        self.toggles().map(|toggle| toggle.message_key.as_str())
    }

    /// Finds the toggle reporting under `message_key`.
    #[must_use]
    pub fn toggle(&self, message_key: &str) -> Option<&Toggle> {
        self.toggles().find(|toggle| toggle.message_key == message_key)
    }
}

/// Depth-first iterator returned by [`SettingsForm::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(&'a FormElement, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a FormElement, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (element, depth) = self.stack.pop()?;
        self.stack
            .extend(element.children().iter().rev().map(|child| (child, depth + 1)));
        Some((element, depth))
    }
}
