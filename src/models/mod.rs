//! Data models for the settings form.
//!
//! This module contains the form element types and the ordered form container.
//! Models are independent of how the form is declared, rendered or validated.

pub mod element;
pub mod form;

// Re-export all model types
pub use element::{FormElement, Heading, Section, Submit, Text, Toggle};
pub use form::{SettingsForm, Walk};
