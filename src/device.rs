//! Device-side settings.
//!
//! When the user presses the submit button, the renderer reports each toggle's
//! value keyed by its message key. The watchface keeps the decoded values in a
//! small settings record and reads integers off the app message dictionary.

use crate::constants::KEY_INVERT_COLORS;
use crate::models::SettingsForm;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Settings the watchface keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSettings {
    /// Draw light content on dark background when false, the reverse when true
    pub invert_colors: bool,
}

impl DeviceSettings {
    /// Settings a freshly opened form submits unchanged.
    #[must_use]
    pub fn from_form(form: &SettingsForm) -> Self {
        let mut settings = Self::default();
        if let Some(toggle) = form.toggle(KEY_INVERT_COLORS) {
            settings.invert_colors = toggle.default_value;
        }
        settings
    }

    /// Applies a submit payload.
    ///
    /// Keys missing from the payload keep their current value, unknown keys
    /// are ignored.
    pub fn apply_response(&mut self, payload: &Value) -> Result<()> {
        let Some(entries) = payload.as_object() else {
            bail!("Settings payload must be a JSON object keyed by message key");
        };

        for (key, value) in entries {
            match key.as_str() {
                KEY_INVERT_COLORS => {
                    self.invert_colors = decode_flag(value)
                        .context(format!("Invalid value for {KEY_INVERT_COLORS}"))?;
                    debug!(invert_colors = self.invert_colors, "Decoded {KEY_INVERT_COLORS}");
                }
                other => debug!("Ignoring message key {other}"),
            }
        }

        Ok(())
    }

    /// Integer dictionary sent to the watch.
    #[must_use]
    pub fn to_app_message(&self) -> BTreeMap<&'static str, i32> {
        BTreeMap::from([(KEY_INVERT_COLORS, i32::from(self.invert_colors))])
    }
}

/// Decodes a toggle value.
///
/// Booleans pass through. Numbers follow the firmware's reading of an int32
/// tuple: only `1` means on. The renderer may also wrap the value as
/// `{ "value": ... }`.
fn decode_flag(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(int) => Ok(int == 1),
            None => bail!("expected an integer, got {number}"),
        },
        Value::String(text) => match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            digits => digits
                .parse::<i64>()
                .map(|int| int == 1)
                .context(format!("expected a boolean or integer, got {text:?}")),
        },
        Value::Object(wrapper) => decode_wrapped(wrapper),
        Value::Null | Value::Array(_) => bail!("expected a boolean or integer, got {value}"),
    }
}

fn decode_wrapped(wrapper: &Map<String, Value>) -> Result<bool> {
    match wrapper.get("value") {
        Some(Value::Object(_)) => bail!("nested value wrappers are not supported"),
        Some(inner) => decode_flag(inner),
        None => bail!("object value is missing the \"value\" field"),
    }
}
