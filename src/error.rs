//! Error types for ctpgen
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::validation::ValidationReport;

/// All error types that can occur while serving a request
#[derive(Debug, Error)]
pub enum CtpError {
    /// A required request argument was absent
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// An argument was present but unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation name not recognized by the dispatcher
    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    /// No template registered under the requested identifier
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Template source could not be parsed
    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    /// Template parsed but failed while rendering
    #[error("Render error: {0}")]
    Render(String),

    /// Definition rejected by the structural validator
    #[error("Validation failed: {} error(s)", .0.errors.len())]
    ValidationFailed(ValidationReport),

    /// Known-tools catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ctpgen operations
pub type Result<T> = std::result::Result<T, CtpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationIssue;

    #[test]
    fn test_missing_argument_error() {
        let err = CtpError::MissingArgument("description".to_string());
        assert_eq!(err.to_string(), "Missing required argument: description");
    }

    #[test]
    fn test_unknown_operation_error() {
        let err = CtpError::UnknownOperation("ctp_delete_tool".to_string());
        assert_eq!(err.to_string(), "Unknown tool: ctp_delete_tool");
    }

    #[test]
    fn test_template_not_found_error() {
        let err = CtpError::TemplateNotFound("server-implementation".to_string());
        assert_eq!(err.to_string(), "Template not found: server-implementation");
    }

    #[test]
    fn test_validation_failed_counts_errors() {
        let report = ValidationReport::from_issues(vec![
            ValidationIssue::required("id"),
            ValidationIssue::required("name"),
        ]);
        let err = CtpError::ValidationFailed(report);
        assert_eq!(err.to_string(), "Validation failed: 2 error(s)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CtpError = io_err.into();
        assert!(matches!(err, CtpError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: CtpError = json_err.into();
        assert!(matches!(err, CtpError::Json(_)));
    }
}
