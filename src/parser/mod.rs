//! Parsing settings forms from disk.
//!
//! Accepts the renderer's JSON schema, relaxed JSON (comments, trailing commas,
//! unquoted keys, single quotes) and the CommonJS module form
//! `module.exports = [...];`.

use crate::models::SettingsForm;
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

// Line and block comments are allowed around the assignment
static MODULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^\s*(?:(?://[^\n]*\n|/\*.*?\*/)\s*)*module\.exports\s*=\s*(\[.*?\])\s*;?\s*(?:(?://[^\n]*|/\*.*?\*/)\s*)*$",
    )
    .unwrap()
});

/// Parses a settings form from text.
pub fn parse_form(content: &str) -> Result<SettingsForm> {
    let body = strip_module_wrapper(content);

    match serde_json::from_str(body) {
        Ok(form) => Ok(form),
        Err(json_err) => {
            debug!("Strict JSON parse failed ({json_err}), retrying as JSON5");
            json5::from_str(body).context("Failed to parse settings form")
        }
    }
}

/// Reads and parses a settings form file.
pub fn load_form(path: &Path) -> Result<SettingsForm> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read settings form: {}", path.display()))?;

    parse_form(&content).context(format!("Invalid settings form: {}", path.display()))
}

/// Returns the array literal inside `module.exports = ...;`, or the input
/// unchanged when there is no module wrapper.
fn strip_module_wrapper(content: &str) -> &str {
    MODULE_REGEX
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map_or(content, |body| body.as_str())
}
