//! Core validation interfaces

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Kind of problem found in a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCode {
    /// A required field is absent
    Required,
    /// A field has the wrong JSON type
    Type,
    /// A field's value is malformed
    Format,
    /// A field's value is outside its allowed set
    Enum,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Type => "type",
            Self::Format => "format",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    /// Path of the offending field, e.g. `parameters[0].name`
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(code: IssueCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} is required", field);
        Self::new(IssueCode::Required, field, message)
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &str) -> Self {
        Self::new(IssueCode::Type, field, format!("expected {}", expected))
    }

    pub fn format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(IssueCode::Format, field, message)
    }

    pub fn not_in(field: impl Into<String>, allowed: &[&str]) -> Self {
        Self::new(IssueCode::Enum, field, format!("must be one of: {}", allowed.join(", ")))
    }
}

/// Outcome of validating one definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// A passing report
    pub fn pass() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Valid exactly when `issues` is empty
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            valid: issues.is_empty(),
            errors: issues,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::pass()
    }
}

/// Checks a completed tool definition
pub trait DefinitionValidator: Send + Sync {
    /// Validate a definition given as raw JSON
    fn validate(&self, definition: &Value) -> ValidationReport;

    /// Human-readable name for logs
    fn name(&self) -> &str;
}
