//! Human-readable suggestions for validation issues

use super::traits::{IssueCode, ValidationIssue};

/// Suggestion for a single issue
pub fn suggestion(issue: &ValidationIssue) -> String {
    match issue.code {
        IssueCode::Required => format!("Add the required field: {}", issue.field),
        IssueCode::Type => format!("Fix type for {}: {}", issue.field, issue.message),
        _ => issue.message.clone(),
    }
}

/// One suggestion per issue, in order
pub fn suggestions(issues: &[ValidationIssue]) -> Vec<String> {
    issues.iter().map(suggestion).collect()
}
