//! Rendering the settings form for the phone-side loader.
//!
//! The renderer consumes a JSON array of element objects. The same array can be
//! wrapped as a CommonJS module (the shape the phone-side loader `require`s) or
//! dumped as YAML for reading.

use crate::models::SettingsForm;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// Output format for a rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare JSON array
    #[default]
    Json,
    /// `module.exports = [...];`
    Js,
    /// YAML document
    Yaml,
}

impl OutputFormat {
    /// File extension conventionally used for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Js => "js",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Serializes the form to the renderer's JSON schema.
///
/// Output is stable: the same form always yields the same bytes.
pub fn to_json(form: &SettingsForm, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(form)
    } else {
        serde_json::to_string(form)
    };
    json.context("Failed to serialize settings form to JSON")
}

/// Wraps the form's JSON as a CommonJS module.
pub fn to_js_module(form: &SettingsForm, pretty: bool) -> Result<String> {
    Ok(format!("module.exports = {};\n", to_json(form, pretty)?))
}

/// Serializes the form to YAML.
pub fn to_yaml(form: &SettingsForm) -> Result<String> {
    serde_yml::to_string(form).context("Failed to serialize settings form to YAML")
}

/// Renders the form in `format`, always newline-terminated.
pub fn render(form: &SettingsForm, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", to_json(form, pretty)?)),
        OutputFormat::Js => to_js_module(form, pretty),
        OutputFormat::Yaml => to_yaml(form),
    }
}

/// Renders the form and writes it to `path`.
pub fn write_form(
    form: &SettingsForm,
    path: &Path,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    let rendered = render(form, format, pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(path, rendered)
        .context(format!("Failed to write settings form: {}", path.display()))?;

    info!(path = %path.display(), %format, "Wrote settings form");
    Ok(())
}
