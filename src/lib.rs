//! Watchface Config Library
//!
//! This library provides the settings form shown by the phone companion of a
//! weather and health watchface: the typed form model, the declared form,
//! rendering and parsing in the renderer's schema, validation against the
//! firmware's message keys, and decoding of submitted values.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod device;
pub mod export;
pub mod manifest;
pub mod models;
pub mod parser;
pub mod validator;

pub use device::DeviceSettings;
pub use manifest::settings_form;
pub use models::{FormElement, SettingsForm};
