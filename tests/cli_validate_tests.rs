//! End-to-end tests for `watchface-config validate`.

mod fixtures;
use fixtures::*;

#[test]
fn test_validate_built_in_form() {
    let config_dir = temp_config();
    let output = run(&config_dir, &["validate"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Built-in form should validate. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("✓ Validation passed (built-in)"));
}

#[test]
fn test_validate_built_in_form_json() {
    let config_dir = temp_config();
    let output = run(&config_dir, &["validate", "--json", "--strict"]);

    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");

    assert_eq!(result["valid"], true);
    assert_eq!(result["source"], "built-in");
    assert_eq!(result["errors"].as_array().unwrap().len(), 0);
    assert_eq!(result["checks"]["message_keys"], "passed");
    assert_eq!(result["checks"]["structure"], "passed");
}

#[test]
fn test_validate_duplicate_keys() {
    let config_dir = temp_config();
    let form_path = write_file(
        &config_dir,
        "form.json",
        &form_json(&form_with_duplicate_keys()),
    );

    let output = run(
        &config_dir,
        &["validate", "--input", form_path.to_str().unwrap(), "--json"],
    );

    assert_eq!(output.status.code(), Some(1));

    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["valid"], false);
    assert_eq!(result["checks"]["message_keys"], "failed");

    let errors = result["errors"].as_array().unwrap();
    assert!(errors
        .iter()
        .any(|e| e["kind"] == "Duplicate Message Key" && e["path"] == "[1].items[1]"));
}

#[test]
fn test_validate_warning_only_passes_unless_strict() {
    let config_dir = temp_config();
    let form_path = write_file(
        &config_dir,
        "form.json",
        &form_json(&form_without_submit()),
    );
    let path = form_path.to_str().unwrap();

    let relaxed = run(&config_dir, &["validate", "--input", path]);
    assert_eq!(relaxed.status.code(), Some(0));
    assert!(stdout(&relaxed).contains("⚠"));

    let strict = run(&config_dir, &["validate", "--input", path, "--strict"]);
    assert_eq!(strict.status.code(), Some(1));
    assert!(stderr(&strict).contains("strict mode"));
}

#[test]
fn test_validate_js_module_input() {
    let config_dir = temp_config();
    let module = format!(
        "module.exports = {};\n",
        form_json(&watchface_config::settings_form())
    );
    let form_path = write_file(&config_dir, "config.js", &module);

    let output = run(
        &config_dir,
        &["validate", "--input", form_path.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
}

#[test]
fn test_validate_unparseable_input() {
    let config_dir = temp_config();
    let form_path = write_file(&config_dir, "form.json", "[{\"type\": \"slider\"}]");

    let output = run(
        &config_dir,
        &["validate", "--input", form_path.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid settings form"));
}

#[test]
fn test_validate_missing_input_file() {
    let config_dir = temp_config();

    let output = run(&config_dir, &["validate", "--input", "/nonexistent/form.json"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_validate_oversized_heading_is_validation_error() {
    let config_dir = temp_config();
    let form_path = write_file(
        &config_dir,
        "form.json",
        r#"[{"type":"heading","defaultValue":"Huge","size":300},{"type":"submit","defaultValue":"Save"}]"#,
    );

    let output = run(
        &config_dir,
        &["validate", "--input", form_path.to_str().unwrap(), "--json"],
    );

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));

    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["checks"]["structure"], "failed");
    assert!(result["errors"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["kind"] == "Invalid Heading Size" && e["path"] == "[0]"));
}
