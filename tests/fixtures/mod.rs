//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;
use watchface_config::config::Config;
use watchface_config::models::{Heading, Section, SettingsForm, Submit, Toggle};

/// Path to the watchface-config binary
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_watchface-config")
}

/// Runs the binary with `args`, using a config file inside `config_dir`.
pub fn run(config_dir: &TempDir, args: &[&str]) -> Output {
    let config_path = config_dir.path().join("config.toml");
    Command::new(bin())
        .arg("--config")
        .arg(&config_path)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Creates a temp directory holding a default `config.toml`.
pub fn temp_config() -> TempDir {
    temp_config_with(&Config::new())
}

/// Creates a temp directory holding `config` as `config.toml`.
pub fn temp_config_with(config: &Config) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    config
        .save(Some(temp_dir.path().join("config.toml").as_path()))
        .expect("Failed to write config");
    temp_dir
}

/// Writes `content` to `name` inside `dir`.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write file");
    path
}

/// A form whose two toggles share a message key.
pub fn form_with_duplicate_keys() -> SettingsForm {
    SettingsForm::new([
        Heading::new("Settings").with_size(1).into(),
        Section::new([
            Toggle::new("KEY_INVERT_COLORS", "Invert Colors", false).into(),
            Toggle::new("KEY_INVERT_COLORS", "Invert Again", true).into(),
        ])
        .into(),
        Submit::new("Apply Settings").into(),
    ])
}

/// A valid form without a submit button.
pub fn form_without_submit() -> SettingsForm {
    SettingsForm::new([
        Heading::new("Settings").into(),
        Toggle::new("KEY_INVERT_COLORS", "Invert Colors", false).into(),
    ])
}

/// Serializes `form` as JSON.
pub fn form_json(form: &SettingsForm) -> String {
    serde_json::to_string_pretty(form).expect("Failed to serialize form")
}

/// Stdout as UTF-8.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as UTF-8.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
