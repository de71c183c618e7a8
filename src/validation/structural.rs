//! Structural validator for tool definitions
//!
//! Checks shape and types only: required fields, JSON types, the id format and
//! the enumerated fields. Every issue found is reported, not just the first.

use serde_json::{Map, Value};

use crate::casing;
use crate::domain::{Category, ExecutionMode, FieldType};

use super::traits::{DefinitionValidator, ValidationIssue, ValidationReport};

const METHODS: [&str; 2] = ["GET", "POST"];

/// Default [`DefinitionValidator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl StructuralValidator {
    pub fn new() -> Self {
        Self
    }
}

impl DefinitionValidator for StructuralValidator {
    fn validate(&self, definition: &Value) -> ValidationReport {
        let Some(object) = definition.as_object() else {
            return ValidationReport::from_issues(vec![ValidationIssue::type_mismatch("definition", "object")]);
        };

        let mut issues = Vec::new();

        for field in ["id", "name", "description", "category"] {
            require_string(object, field, field, &mut issues);
        }

        if let Some(id) = object.get("id").and_then(Value::as_str)
            && (id.is_empty() || casing::to_kebab_case(id) != id)
        {
            issues.push(ValidationIssue::format("id", "id must be kebab-case"));
        }

        if let Some(category) = object.get("category").and_then(Value::as_str)
            && !Category::ALL.iter().any(|c| c.as_str() == category)
        {
            let allowed: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
            issues.push(ValidationIssue::not_in("category", &allowed));
        }

        check_tags(object, &mut issues);
        check_optional_enum(object, "method", &METHODS, &mut issues);
        check_optional_enum(object, "executionMode", &execution_modes(), &mut issues);
        check_parameters(object, &mut issues);

        ValidationReport::from_issues(issues)
    }

    fn name(&self) -> &str {
        "structural"
    }
}

fn execution_modes() -> [&'static str; 3] {
    [ExecutionMode::Client, ExecutionMode::Server, ExecutionMode::Both].map(|m| m.as_str())
}

fn is_absent(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Require `key` to be a string, reporting under `path`
fn require_string(object: &Map<String, Value>, key: &str, path: &str, issues: &mut Vec<ValidationIssue>) {
    let value = object.get(key);
    if is_absent(value) {
        issues.push(ValidationIssue::required(path));
    } else if !value.is_some_and(Value::is_string) {
        issues.push(ValidationIssue::type_mismatch(path, "string"));
    }
}

fn check_tags(object: &Map<String, Value>, issues: &mut Vec<ValidationIssue>) {
    let Some(tags) = object.get("tags").filter(|v| !v.is_null()) else {
        return;
    };
    match tags.as_array() {
        Some(items) => {
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    issues.push(ValidationIssue::type_mismatch(format!("tags[{}]", i), "string"));
                }
            }
        }
        None => issues.push(ValidationIssue::type_mismatch("tags", "array")),
    }
}

fn check_optional_enum(object: &Map<String, Value>, key: &str, allowed: &[&str], issues: &mut Vec<ValidationIssue>) {
    match object.get(key) {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) if allowed.contains(&s.as_str()) => {}
        Some(Value::String(_)) => issues.push(ValidationIssue::not_in(key, allowed)),
        Some(_) => issues.push(ValidationIssue::type_mismatch(key, "string")),
    }
}

fn check_parameters(object: &Map<String, Value>, issues: &mut Vec<ValidationIssue>) {
    let value = object.get("parameters");
    if is_absent(value) {
        issues.push(ValidationIssue::required("parameters"));
        return;
    }
    let Some(parameters) = value.and_then(Value::as_array) else {
        issues.push(ValidationIssue::type_mismatch("parameters", "array"));
        return;
    };
    if parameters.is_empty() {
        issues.push(ValidationIssue::format("parameters", "at least one parameter is required"));
        return;
    }

    let mut seen: Vec<&str> = Vec::new();
    for (i, parameter) in parameters.iter().enumerate() {
        let path = format!("parameters[{}]", i);
        let Some(param) = parameter.as_object() else {
            issues.push(ValidationIssue::type_mismatch(path, "object"));
            continue;
        };

        require_string(param, "name", &format!("{}.name", path), issues);
        require_string(param, "label", &format!("{}.label", path), issues);

        let type_path = format!("{}.type", path);
        match param.get("type") {
            None | Some(Value::Null) => issues.push(ValidationIssue::required(type_path)),
            Some(Value::String(t)) if FieldType::parse(t).is_some() => {}
            Some(Value::String(_)) => {
                let allowed: Vec<&str> = FieldType::ALL.iter().map(|t| t.as_str()).collect();
                issues.push(ValidationIssue::not_in(type_path, &allowed));
            }
            Some(_) => issues.push(ValidationIssue::type_mismatch(type_path, "string")),
        }

        if param.get("required").is_some_and(|v| !v.is_null() && !v.is_boolean()) {
            issues.push(ValidationIssue::type_mismatch(format!("{}.required", path), "boolean"));
        }
        for key in ["description", "placeholder"] {
            if param.get(key).is_some_and(|v| !v.is_null() && !v.is_string()) {
                issues.push(ValidationIssue::type_mismatch(format!("{}.{}", path, key), "string"));
            }
        }

        if let Some(name) = param.get("name").and_then(Value::as_str) {
            if seen.contains(&name) {
                issues.push(ValidationIssue::format(
                    format!("{}.name", path),
                    format!("duplicate parameter name '{}'", name),
                ));
            }
            seen.push(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::IssueCode;
    use serde_json::json;

    fn valid_definition() -> Value {
        json!({
            "id": "hex-to-rgb",
            "name": "Hex To RGB",
            "description": "Convert hex colors to RGB",
            "category": "converters",
            "tags": ["converters", "color"],
            "method": "POST",
            "executionMode": "client",
            "parameters": [
                {"name": "input", "type": "textarea", "label": "Input", "required": true}
            ]
        })
    }

    fn fields(report: &ValidationReport) -> Vec<(&str, IssueCode)> {
        report.errors.iter().map(|e| (e.field.as_str(), e.code)).collect()
    }

    #[test]
    fn test_valid_definition_passes() {
        let report = StructuralValidator::new().validate(&valid_definition());
        assert!(report.valid, "{:?}", report.errors);
    }

    #[test]
    fn test_non_object_is_a_type_error() {
        let report = StructuralValidator::new().validate(&json!("hex-to-rgb"));
        assert_eq!(fields(&report), vec![("definition", IssueCode::Type)]);
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let report = StructuralValidator::new().validate(&json!({"name": "Only Name"}));
        assert!(!report.valid);
        assert_eq!(
            fields(&report),
            vec![
                ("id", IssueCode::Required),
                ("description", IssueCode::Required),
                ("category", IssueCode::Required),
                ("parameters", IssueCode::Required),
            ]
        );
    }

    #[test]
    fn test_wrong_types() {
        let mut definition = valid_definition();
        definition["name"] = json!(42);
        definition["tags"] = json!("color");
        let report = StructuralValidator::new().validate(&definition);
        assert_eq!(fields(&report), vec![("name", IssueCode::Type), ("tags", IssueCode::Type)]);
    }

    #[test]
    fn test_id_must_be_kebab_case() {
        let mut definition = valid_definition();
        definition["id"] = json!("HexToRgb");
        let report = StructuralValidator::new().validate(&definition);
        assert_eq!(fields(&report), vec![("id", IssueCode::Format)]);
    }

    #[test]
    fn test_enumerated_fields() {
        let mut definition = valid_definition();
        definition["category"] = json!("games");
        definition["method"] = json!("DELETE");
        definition["executionMode"] = json!("edge");
        let report = StructuralValidator::new().validate(&definition);
        assert_eq!(
            fields(&report),
            vec![
                ("category", IssueCode::Enum),
                ("method", IssueCode::Enum),
                ("executionMode", IssueCode::Enum),
            ]
        );
    }

    #[test]
    fn test_parameter_checks() {
        let mut definition = valid_definition();
        definition["parameters"] = json!([
            {"name": "input", "type": "textarea", "label": "Input"},
            {"name": "input", "type": "spinner", "label": "Again", "required": "yes"},
            "not an object"
        ]);
        let report = StructuralValidator::new().validate(&definition);
        assert_eq!(
            fields(&report),
            vec![
                ("parameters[1].type", IssueCode::Enum),
                ("parameters[1].required", IssueCode::Type),
                ("parameters[1].name", IssueCode::Format),
                ("parameters[2]", IssueCode::Type),
            ]
        );
    }

    #[test]
    fn test_empty_parameters() {
        let mut definition = valid_definition();
        definition["parameters"] = json!([]);
        let report = StructuralValidator::new().validate(&definition);
        assert_eq!(fields(&report), vec![("parameters", IssueCode::Format)]);
    }
}
