//! Input parameters and output fields of a generated tool

use serde::{Deserialize, Serialize};

/// Form field type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text
    Text,
    /// Multi-line text
    Textarea,
    Number,
    Boolean,
    Select,
    Color,
    Date,
    File,
    Url,
    Json,
}

impl FieldType {
    pub const ALL: [FieldType; 10] = [
        Self::Text,
        Self::Textarea,
        Self::Number,
        Self::Boolean,
        Self::Select,
        Self::Color,
        Self::Date,
        Self::File,
        Self::Url,
        Self::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Select => "select",
            Self::Color => "color",
            Self::Date => "date",
            Self::File => "file",
            Self::Url => "url",
            Self::Json => "json",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// TypeScript type used for this field in generated source
    pub fn ts_type(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Json => "unknown",
            _ => "string",
        }
    }
}

/// An input parameter of a generated tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    /// Example value shown in the form and reused in the generated example
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// A field of the generated tool's result object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputField {
    pub name: String,
    /// Semantic type tag (`string`, `number`, `unknown`)
    #[serde(rename = "type")]
    pub field_type: String,
    /// Source literal spliced verbatim into generated code (`''`, `0`, `null`)
    pub placeholder: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_parse() {
        assert_eq!(FieldType::parse("textarea"), Some(FieldType::Textarea));
        assert_eq!(FieldType::parse("text"), Some(FieldType::Text));
        assert_eq!(FieldType::parse("slider"), None);
    }

    #[test]
    fn test_field_type_ts_type() {
        assert_eq!(FieldType::Textarea.ts_type(), "string");
        assert_eq!(FieldType::Number.ts_type(), "number");
        assert_eq!(FieldType::Boolean.ts_type(), "boolean");
        assert_eq!(FieldType::Json.ts_type(), "unknown");
    }

    #[test]
    fn test_parameter_serialization() {
        let param = Parameter {
            name: "input".to_string(),
            field_type: FieldType::Textarea,
            label: "Input".to_string(),
            description: "Input data to process".to_string(),
            required: true,
            placeholder: None,
        };

        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["type"], "textarea");
        assert_eq!(json["required"], true);
        assert!(json.get("placeholder").is_none());
    }

    #[test]
    fn test_parameter_deserialization_defaults() {
        let json = r#"{"name": "value", "type": "text", "label": "Value"}"#;
        let param: Parameter = serde_json::from_str(json).unwrap();
        assert_eq!(param.field_type, FieldType::Text);
        assert!(!param.required);
        assert!(param.description.is_empty());
        assert!(param.placeholder.is_none());
    }

    #[test]
    fn test_output_field_type_key() {
        let field = OutputField {
            name: "result".to_string(),
            field_type: "unknown".to_string(),
            placeholder: "null".to_string(),
        };
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r#"{"name":"result","type":"unknown","placeholder":"null"}"#);
    }
}
