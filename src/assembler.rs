//! Schema Assembler - combine analysis, inference and casing into `ToolData`
//!
//! Assembly is a pure function of its inputs: no clocks, no randomness, so the
//! same request always yields the same record.

use log::debug;
use serde_json::{Map, Value};

use crate::analyzer;
use crate::casing;
use crate::domain::{ExecutionMode, OutputField, Parameter, TOOL_METHOD, ToolData, ToolDefinition, ToolExample, ToolRequest};
use crate::inference;

/// Value used in the example input for parameters without a placeholder
pub const EXAMPLE_FALLBACK: &str = "example";

/// Assemble render data for a new tool from a create request.
///
/// Caller-supplied name and category win over analyzed ones; the id is always
/// the kebab case of the resolved name.
pub fn assemble(request: &ToolRequest) -> ToolData {
    let description = request.description.as_str();
    let analysis = analyzer::analyze(description);

    let name = non_blank(request.name.as_deref()).unwrap_or(&analysis.name).to_string();
    let category = non_blank(request.category.as_deref())
        .unwrap_or(analysis.category.as_str())
        .to_string();

    let tags = if category == analysis.category.as_str() {
        analysis.tags
    } else {
        analyzer::extract_tags(description, &category)
    };

    let schema = inference::infer(description, &category);
    let example = build_example(&name, &schema.parameters, &schema.output_fields);

    debug!("Assembled tool data for {:?} ({})", name, category);

    ToolData {
        id: casing::generate_tool_id(&name),
        description: description.to_string(),
        icon: analyzer::icon_for(&category).to_string(),
        category,
        tags,
        method: TOOL_METHOD.to_string(),
        execution_mode: request.execution_mode.unwrap_or_default(),
        parameters: schema.parameters,
        output_fields: schema.output_fields,
        output_description: output_description(&name),
        example,
        camel_case_name: casing::to_camel_case(&name),
        pascal_case_name: casing::to_pascal_case(&name),
        kebab_case_name: casing::to_kebab_case(&name),
        snake_case_name: casing::to_snake_case(&name),
        name,
    }
}

/// Build render data from a caller-supplied definition.
///
/// Output fields are re-inferred from the category. An explicit `mode` wins
/// over the definition's own execution mode.
pub fn from_definition(definition: &ToolDefinition, mode: Option<ExecutionMode>) -> ToolData {
    let name = definition.name.clone();
    let output_fields = inference::infer_output_fields(&definition.category);
    let example = definition
        .example
        .clone()
        .unwrap_or_else(|| build_example(&name, &definition.parameters, &output_fields));

    ToolData {
        id: definition.id.clone(),
        description: definition.description.clone(),
        category: definition.category.clone(),
        tags: definition.tags.clone(),
        icon: definition
            .icon
            .clone()
            .unwrap_or_else(|| analyzer::icon_for(&definition.category).to_string()),
        method: definition.method.clone().unwrap_or_else(|| TOOL_METHOD.to_string()),
        execution_mode: mode.or(definition.execution_mode).unwrap_or_default(),
        parameters: definition.parameters.clone(),
        output_fields,
        output_description: definition
            .output_description
            .clone()
            .unwrap_or_else(|| output_description(&name)),
        example,
        camel_case_name: casing::to_camel_case(&name),
        pascal_case_name: casing::to_pascal_case(&name),
        kebab_case_name: casing::to_kebab_case(&name),
        snake_case_name: casing::to_snake_case(&name),
        name,
    }
}

/// Example built from placeholders, keyed in parameter/field order
pub fn build_example(name: &str, parameters: &[Parameter], output_fields: &[OutputField]) -> ToolExample {
    ToolExample {
        name: format!("Example {}", name),
        input: example_input(parameters),
        output: example_output(output_fields),
    }
}

/// Each parameter mapped to its placeholder, or [`EXAMPLE_FALLBACK`]
pub fn example_input(parameters: &[Parameter]) -> Map<String, Value> {
    parameters
        .iter()
        .map(|p| {
            let value = non_blank(p.placeholder.as_deref()).unwrap_or(EXAMPLE_FALLBACK);
            (p.name.clone(), Value::String(value.to_string()))
        })
        .collect()
}

/// Each output field mapped to its placeholder source literal
pub fn example_output(output_fields: &[OutputField]) -> Map<String, Value> {
    output_fields
        .iter()
        .map(|f| (f.name.clone(), Value::String(f.placeholder.clone())))
        .collect()
}

fn output_description(name: &str) -> String {
    format!("Result of {} operation", name.to_lowercase())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
