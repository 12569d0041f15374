//! End-to-end tests for `watchface-config config`.

mod fixtures;
use fixtures::*;
use watchface_config::config::Config;
use watchface_config::export::OutputFormat;

#[test]
fn test_config_show_json() {
    let config_dir = temp_config();
    let output = run(&config_dir, &["config", "show", "--json"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["output"]["format"], "json");
    assert_eq!(result["output"]["pretty"], true);
    assert_eq!(
        result["device"]["message_keys"],
        serde_json::json!(["KEY_TEMP", "KEY_ICON", "KEY_INVERT_COLORS"])
    );
}

#[test]
fn test_config_set_persists() {
    let config_dir = temp_config();
    let output = run(
        &config_dir,
        &[
            "config",
            "set",
            "--format",
            "js",
            "--pretty",
            "false",
            "--message-keys",
            "KEY_INVERT_COLORS, KEY_TEMP",
        ],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let config = Config::load(Some(config_dir.path().join("config.toml").as_path())).unwrap();
    assert_eq!(config.output.format, OutputFormat::Js);
    assert!(!config.output.pretty);
    assert_eq!(config.device.message_keys, vec!["KEY_INVERT_COLORS", "KEY_TEMP"]);
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = temp_config();
    let output = run(&config_dir, &["config", "set"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_rejects_unknown_format() {
    let config_dir = temp_config();
    let output = run(&config_dir, &["config", "set", "--format", "xml"]);

    // clap usage errors exit with 2
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_malformed_file_is_io_error() {
    let config_dir = temp_config();
    write_file(&config_dir, "config.toml", "[output\nformat=");

    let show = run(&config_dir, &["config", "show"]);
    assert_eq!(show.status.code(), Some(2));
    assert!(stderr(&show).contains("Failed to load configuration"));

    let set = run(&config_dir, &["config", "set", "--format", "yaml"]);
    assert_eq!(set.status.code(), Some(2));

    let validate = run(&config_dir, &["validate"]);
    assert_eq!(validate.status.code(), Some(2));
}
