//! Tool records: analysis output, assembled render data, hand-authored definitions
//!
//! `ToolData` is built fresh for every generation request and is only ever read
//! afterwards; every template renders from it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::category::Category;
use super::parameter::{OutputField, Parameter};

/// HTTP method every generated tool is invoked with
pub const TOOL_METHOD: &str = "POST";

/// Where a generated tool runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Client,
    Server,
    Both,
}

impl Default for ExecutionMode {
    fn default() -> Self {
        Self::Client
    }
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
            Self::Both => "both",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "client" => Some(Self::Client),
            "server" => Some(Self::Server),
            "both" => Some(Self::Both),
            _ => None,
        }
    }
}

/// Metadata derived from a free-text description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptionAnalysis {
    pub name: String,
    pub category: Category,
    /// Category first, then matched keywords; at most five entries
    pub tags: Vec<String>,
    pub icon: String,
}

/// Example invocation, built from parameter and output-field placeholders
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolExample {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub input: Map<String, Value>,
    #[serde(default)]
    pub output: Map<String, Value>,
}

/// A create-tool request after argument extraction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolRequest {
    pub description: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub execution_mode: Option<ExecutionMode>,
}

impl ToolRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = Some(mode);
        self
    }
}

/// The unified record every template renders from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolData {
    //=== Identity ===
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub icon: String,

    //=== Invocation ===
    pub method: String,
    pub execution_mode: ExecutionMode,

    //=== Schema ===
    pub parameters: Vec<Parameter>,
    pub output_fields: Vec<OutputField>,
    pub output_description: String,
    pub example: ToolExample,

    //=== Casings of `name` ===
    pub camel_case_name: String,
    pub pascal_case_name: String,
    pub kebab_case_name: String,
    pub snake_case_name: String,
}

/// A tool definition as supplied by a caller (for example, a previously generated one)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub execution_mode: Option<ExecutionMode>,
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub output_description: Option<String>,
    #[serde(default)]
    pub example: Option<ToolExample>,
}
