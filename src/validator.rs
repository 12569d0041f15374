//! Settings form validation.
//!
//! Checks a form against the rules the renderer and the device firmware rely
//! on before the form is shipped.

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use crate::models::{FormElement, SettingsForm};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Heading levels the renderer supports.
pub const HEADING_SIZES: std::ops::RangeInclusive<i64> = 1..=6;

static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Problems that make the form unusable
    pub errors: Vec<ValidationError>,
    /// Non-critical warnings
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there are neither errors nor warnings.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if any error has the given kind.
    #[must_use]
    pub fn has_error(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|error| error.kind == kind)
    }

    /// Formats the report as a user-friendly error message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("❌ {} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("\n⚠️  {} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// Path of the offending element, e.g. `[1].items[1]`
    pub path: Option<String>,
    /// Human-readable error message
    pub message: String,
    /// Optional suggestion for fixing the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Sets the element path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets a suggestion for fixing the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{} {}: {}", path, self.kind, self.message)?;
        } else {
            write!(f, "{}: {}", self.kind, self.message)?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n    → {suggestion}")?;
        }

        Ok(())
    }
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Toggle has a blank message key
    EmptyMessageKey,
    /// Message key is not a valid identifier
    InvalidMessageKey,
    /// Message key used by more than one toggle
    DuplicateMessageKey,
    /// Message key the device firmware does not declare
    UnknownMessageKey,
    /// Heading level outside the supported range
    InvalidHeadingSize,
    /// Section contains no items
    EmptySection,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessageKey => write!(f, "Empty Message Key"),
            Self::InvalidMessageKey => write!(f, "Invalid Message Key"),
            Self::DuplicateMessageKey => write!(f, "Duplicate Message Key"),
            Self::UnknownMessageKey => write!(f, "Unknown Message Key"),
            Self::InvalidHeadingSize => write!(f, "Invalid Heading Size"),
            Self::EmptySection => write!(f, "Empty Section"),
        }
    }
}

/// Validation warning (non-blocking).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Path of the element the warning is about, if any
    pub path: Option<String>,
    /// Warning message
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: None,
            message: message.into(),
        }
    }

    /// Sets the element path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} {}", path, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Settings form validator.
pub struct FormValidator<'a> {
    form: &'a SettingsForm,
    device_keys: HashSet<String>,
}

impl<'a> FormValidator<'a> {
    /// Creates a validator checking message keys against `device_keys`.
    pub fn new<I>(form: &'a SettingsForm, device_keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            form,
            device_keys: device_keys
                .into_iter()
                .map(|key| key.as_ref().to_string())
                .collect(),
        }
    }

    /// Validates the form.
    ///
    /// Checks:
    /// - Toggle message keys are non-empty identifiers
    /// - Message keys are unique across the whole form
    /// - Message keys are declared by the device
    /// - Heading sizes are within range
    /// - Sections are not empty
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen_keys: HashMap<&str, String> = HashMap::new();
        let mut submit_count = 0;

        for (idx, element) in self.form.elements().iter().enumerate() {
            self.validate_element(
                &mut report,
                &mut seen_keys,
                &mut submit_count,
                element,
                format!("[{idx}]"),
                0,
            );
        }

        match submit_count {
            0 => report.add_warning(ValidationWarning::new(
                "Form has no submit button; values will never be sent to the device",
            )),
            1 => {}
            n => report.add_warning(ValidationWarning::new(format!(
                "Form has {n} submit buttons; the renderer only expects one"
            ))),
        }

        report
    }

    fn validate_element(
        &self,
        report: &mut ValidationReport,
        seen_keys: &mut HashMap<&'a str, String>,
        submit_count: &mut usize,
        element: &'a FormElement,
        path: String,
        depth: usize,
    ) {
        match element {
            FormElement::Heading(heading) => {
                if let Some(size) = heading.size {
                    if !HEADING_SIZES.contains(&size) {
                        report.add_error(
                            ValidationError::new(
                                ValidationErrorKind::InvalidHeadingSize,
                                format!("Heading size {size} is out of range"),
                            )
                            .with_path(&path)
                            .with_suggestion(format!(
                                "Use a size between {} and {}",
                                HEADING_SIZES.start(),
                                HEADING_SIZES.end()
                            )),
                        );
                    }
                }
                warn_if_blank(report, &heading.default_value, "Heading text", &path);
            }
            FormElement::Section(section) => {
                if section.items.is_empty() {
                    report.add_error(
                        ValidationError::new(
                            ValidationErrorKind::EmptySection,
                            "Section has no items",
                        )
                        .with_path(&path)
                        .with_suggestion("Add elements to the section or remove it"),
                    );
                }
                if depth > 0 {
                    report.add_warning(
                        ValidationWarning::new(
                            "Nested section; the renderer flattens sections inside sections",
                        )
                        .with_path(&path),
                    );
                }
                for (idx, item) in section.items.iter().enumerate() {
                    self.validate_element(
                        report,
                        seen_keys,
                        submit_count,
                        item,
                        format!("{path}.items[{idx}]"),
                        depth + 1,
                    );
                }
            }
            FormElement::Toggle(toggle) => {
                self.validate_message_key(report, seen_keys, &toggle.message_key, &path);
                warn_if_blank(report, &toggle.label, "Toggle label", &path);
            }
            FormElement::Submit(submit) => {
                *submit_count += 1;
                warn_if_blank(report, &submit.default_value, "Submit label", &path);
            }
            FormElement::Text(text) => {
                warn_if_blank(report, &text.default_value, "Text", &path);
            }
        }
    }

    /// Validates a single toggle's message key.
    fn validate_message_key(
        &self,
        report: &mut ValidationReport,
        seen_keys: &mut HashMap<&'a str, String>,
        key: &'a str,
        path: &str,
    ) {
        if key.trim().is_empty() {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::EmptyMessageKey,
                    "Toggle has an empty message key",
                )
                .with_path(path),
            );
            return;
        }

        if !KEY_REGEX.is_match(key) {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::InvalidMessageKey,
                    format!("Message key '{key}' is not a valid identifier"),
                )
                .with_path(path)
                .with_suggestion("Use letters, digits and underscores, not starting with a digit"),
            );
        }

        if let Some(first_path) = seen_keys.get(key) {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::DuplicateMessageKey,
                    format!("Message key '{key}' is already used at {first_path}"),
                )
                .with_path(path),
            );
        } else {
            seen_keys.insert(key, path.to_string());
        }

        if !self.device_keys.contains(key) {
            let mut known: Vec<&str> = self.device_keys.iter().map(String::as_str).collect();
            known.sort_unstable();
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::UnknownMessageKey,
                    format!("Message key '{key}' is not declared by the device"),
                )
                .with_path(path)
                .with_suggestion(format!("Known keys: {}", known.join(", "))),
            );
        }
    }
}

fn warn_if_blank(report: &mut ValidationReport, value: &str, what: &str, path: &str) {
    if value.trim().is_empty() {
        report.add_warning(ValidationWarning::new(format!("{what} is empty")).with_path(path));
    }
}

/// Validates `form` against the firmware's declared message keys.
#[must_use]
pub fn validate_form(form: &SettingsForm) -> ValidationReport {
    FormValidator::new(form, crate::constants::DEVICE_MESSAGE_KEYS).validate()
}
