//! Parameter/Output Inferencer - derive a tool's schema from its category
//!
//! Rules are plain data: each binds a set of categories to the parameters and
//! output fields a tool of that kind gets. Categories without a rule fall back
//! to [`DEFAULT_RULE`].

use log::debug;

use crate::domain::{Category, FieldType, OutputField, Parameter};

struct ParameterSpec {
    name: &'static str,
    field_type: FieldType,
    label: &'static str,
    description: &'static str,
    placeholder: Option<&'static str>,
}

struct OutputSpec {
    name: &'static str,
    field_type: &'static str,
    placeholder: &'static str,
}

struct SchemaRule {
    categories: &'static [Category],
    parameters: &'static [ParameterSpec],
    outputs: &'static [OutputSpec],
}

const SCHEMA_RULES: &[SchemaRule] = &[SchemaRule {
    categories: &[Category::Converters, Category::Formatters],
    parameters: &[ParameterSpec {
        name: "input",
        field_type: FieldType::Textarea,
        label: "Input",
        description: "Input data to process",
        placeholder: Some("Enter your input here..."),
    }],
    outputs: &[
        OutputSpec { name: "output", field_type: "string", placeholder: "''" },
        OutputSpec { name: "inputLength", field_type: "number", placeholder: "0" },
        OutputSpec { name: "outputLength", field_type: "number", placeholder: "0" },
    ],
}];

static DEFAULT_RULE: SchemaRule = SchemaRule {
    categories: &[],
    parameters: &[ParameterSpec {
        name: "value",
        field_type: FieldType::Text,
        label: "Value",
        description: "Input value",
        placeholder: Some("Enter value..."),
    }],
    outputs: &[OutputSpec { name: "result", field_type: "unknown", placeholder: "null" }],
};

/// Parameters and output fields inferred for one tool
#[derive(Debug, Clone, PartialEq)]
pub struct InferredSchema {
    /// Never empty
    pub parameters: Vec<Parameter>,
    pub output_fields: Vec<OutputField>,
}

fn rule_for(category: &str) -> &'static SchemaRule {
    let parsed = Category::parse(category);
    SCHEMA_RULES
        .iter()
        .find(|rule| parsed.is_some_and(|c| rule.categories.contains(&c)))
        .unwrap_or(&DEFAULT_RULE)
}

/// Infer the full schema for a tool in `category`.
///
/// The description is accepted for future rules; current rules key on category alone.
pub fn infer(description: &str, category: &str) -> InferredSchema {
    let schema = InferredSchema {
        parameters: infer_parameters(description, category),
        output_fields: infer_output_fields(category),
    };
    debug!(
        "Inferred schema for category {:?}: {} parameter(s), {} output field(s)",
        category,
        schema.parameters.len(),
        schema.output_fields.len()
    );
    schema
}

/// Input parameters for a tool in `category`
pub fn infer_parameters(_description: &str, category: &str) -> Vec<Parameter> {
    rule_for(category)
        .parameters
        .iter()
        .map(|spec| Parameter {
            name: spec.name.to_string(),
            field_type: spec.field_type,
            label: spec.label.to_string(),
            description: spec.description.to_string(),
            required: true,
            placeholder: spec.placeholder.map(str::to_string),
        })
        .collect()
}

/// Output fields for a tool in `category`
pub fn infer_output_fields(category: &str) -> Vec<OutputField> {
    rule_for(category)
        .outputs
        .iter()
        .map(|spec| OutputField {
            name: spec.name.to_string(),
            field_type: spec.field_type.to_string(),
            placeholder: spec.placeholder.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_names(fields: &[OutputField]) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_text_processing_categories() {
        for category in ["converters", "formatters"] {
            let schema = infer("anything", category);
            assert_eq!(schema.parameters.len(), 1);
            assert_eq!(schema.parameters[0].name, "input");
            assert_eq!(schema.parameters[0].field_type, FieldType::Textarea);
            assert!(schema.parameters[0].required);
            assert_eq!(output_names(&schema.output_fields), vec!["output", "inputLength", "outputLength"]);
        }
    }

    #[test]
    fn test_text_processing_placeholders() {
        let fields = infer_output_fields("converters");
        let placeholders: Vec<&str> = fields.iter().map(|f| f.placeholder.as_str()).collect();
        assert_eq!(placeholders, vec!["''", "0", "0"]);
        let types: Vec<&str> = fields.iter().map(|f| f.field_type.as_str()).collect();
        assert_eq!(types, vec!["string", "number", "number"]);
    }

    #[test]
    fn test_other_categories_get_value_and_result() {
        for category in ["calculators", "generators", "validators", "encoders", "utilities", "widgets", ""] {
            let schema = infer("anything", category);
            assert_eq!(schema.parameters.len(), 1, "{category}");
            assert_eq!(schema.parameters[0].name, "value");
            assert_eq!(schema.parameters[0].field_type, FieldType::Text);
            assert!(schema.parameters[0].required);
            assert_eq!(output_names(&schema.output_fields), vec!["result"]);
            assert_eq!(schema.output_fields[0].placeholder, "null");
            assert_eq!(schema.output_fields[0].field_type, "unknown");
        }
    }

    #[test]
    fn test_category_lookup_is_case_insensitive() {
        assert_eq!(infer_parameters("", "Formatters")[0].name, "input");
    }

    #[test]
    fn test_parameters_carry_placeholders() {
        assert_eq!(
            infer_parameters("", "converters")[0].placeholder.as_deref(),
            Some("Enter your input here...")
        );
        assert_eq!(infer_parameters("", "encoders")[0].placeholder.as_deref(), Some("Enter value..."));
    }

    #[test]
    fn test_every_rule_has_parameters() {
        assert!(!DEFAULT_RULE.parameters.is_empty());
        for rule in SCHEMA_RULES {
            assert!(!rule.parameters.is_empty());
        }
    }
}
