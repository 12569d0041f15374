//! Validation command for settings forms.

use crate::cli::common::{
    CliError, CliResult, ValidationChecks, ValidationMessage, ValidationResponse,
};
use crate::config::Config;
use crate::manifest::settings_form;
use crate::parser::load_form;
use crate::validator::{FormValidator, ValidationErrorKind};
use clap::Args;
use std::path::PathBuf;

/// Validate the built-in settings form or a form file
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Form file to validate (JSON, JSON5 or `module.exports = [...]`)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let (form, source) = match &self.input {
            Some(path) => (
                load_form(path).map_err(|e| CliError::io(format!("{e:#}")))?,
                path.display().to_string(),
            ),
            None => (settings_form(), "built-in".to_string()),
        };

        let report = FormValidator::new(&form, config.device.message_keys.iter()).validate();

        let mut checks = ValidationChecks::all_passed();
        let mut messages = Vec::new();

        for error in &report.errors {
            match error.kind {
                ValidationErrorKind::EmptyMessageKey
                | ValidationErrorKind::InvalidMessageKey
                | ValidationErrorKind::DuplicateMessageKey
                | ValidationErrorKind::UnknownMessageKey => {
                    checks.message_keys = "failed".to_string();
                }
                ValidationErrorKind::InvalidHeadingSize | ValidationErrorKind::EmptySection => {
                    checks.structure = "failed".to_string();
                }
            }

            messages.push(ValidationMessage {
                severity: "error".to_string(),
                kind: Some(error.kind.to_string()),
                message: error.message.clone(),
                path: error.path.clone(),
            });
        }

        for warning in &report.warnings {
            if checks.structure == "passed" {
                checks.structure = "warning".to_string();
            }

            messages.push(ValidationMessage {
                severity: "warning".to_string(),
                kind: None,
                message: warning.message.clone(),
                path: warning.path.clone(),
            });
        }

        let response = ValidationResponse {
            valid: report.is_valid(),
            source,
            errors: messages,
            checks,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ Validation passed ({})", response.source);
            } else {
                println!("✗ Validation failed ({})", response.source);
            }

            println!("\nChecks:");
            println!("  Message keys: {}", response.checks.message_keys);
            println!("  Structure:    {}", response.checks.structure);

            if !response.errors.is_empty() {
                println!("\nIssues:");
                for msg in &response.errors {
                    let prefix = if msg.severity == "error" {
                        "  ✗"
                    } else {
                        "  ⚠"
                    };
                    match &msg.path {
                        Some(path) => println!("{} {} {}", prefix, path, msg.message),
                        None => println!("{} {}", prefix, msg.message),
                    }
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && !response.errors.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
