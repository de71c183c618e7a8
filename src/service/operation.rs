//! Operation names and descriptors
//!
//! Every operation answers to its protocol name (`ctp_create_tool`) and to a
//! short form (`create-tool`).

use std::fmt;

use serde_json::{Value, json};

/// An operation the service can dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateTool,
    ValidateTool,
    GenerateImplementation,
    GenerateTests,
    SearchDuplicates,
    ListOperations,
}

const EXECUTION_MODES: [&str; 3] = ["client", "server", "both"];

impl Operation {
    /// Operations advertised by `tools/list`
    pub const TOOLS: [Operation; 5] = [
        Self::CreateTool,
        Self::ValidateTool,
        Self::GenerateImplementation,
        Self::GenerateTests,
        Self::SearchDuplicates,
    ];

    /// Protocol name
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateTool => "ctp_create_tool",
            Self::ValidateTool => "ctp_validate_tool",
            Self::GenerateImplementation => "ctp_generate_implementation",
            Self::GenerateTests => "ctp_generate_tests",
            Self::SearchDuplicates => "ctp_search_duplicates",
            Self::ListOperations => "tools/list",
        }
    }

    /// Short name
    pub fn alias(&self) -> &'static str {
        match self {
            Self::CreateTool => "create-tool",
            Self::ValidateTool => "validate-tool",
            Self::GenerateImplementation => "generate-implementation",
            Self::GenerateTests => "generate-tests",
            Self::SearchDuplicates => "search-duplicates",
            Self::ListOperations => "list-operations",
        }
    }

    /// Resolve a method name; either form is accepted
    pub fn parse(method: &str) -> Option<Self> {
        Self::TOOLS
            .into_iter()
            .chain([Self::ListOperations])
            .find(|op| op.name() == method || op.alias() == method)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::CreateTool => {
                "Generate a complete CTP tool from a natural language description. Creates tool definition, implementation, and tests."
            }
            Self::ValidateTool => "Validate a tool definition against the CTP schema",
            Self::GenerateImplementation => "Generate implementation code from a tool definition",
            Self::GenerateTests => "Generate test suite for a CTP tool",
            Self::SearchDuplicates => "Search for existing tools with similar functionality",
            Self::ListOperations => "List the available operations",
        }
    }

    /// JSON schema of the operation's argument object
    pub fn input_schema(&self) -> Value {
        match self {
            Self::CreateTool => json!({
                "type": "object",
                "properties": {
                    "description": {"type": "string", "description": "Natural language description of what the tool should do"},
                    "name": {"type": "string", "description": "Tool name (optional - will be auto-generated if not provided)"},
                    "category": {"type": "string", "description": "Tool category (e.g., \"converters\", \"calculators\", \"generators\")"},
                    "executionMode": {"type": "string", "enum": EXECUTION_MODES, "description": "Where the tool should execute (default: client)"}
                },
                "required": ["description"]
            }),
            Self::ValidateTool => json!({
                "type": "object",
                "properties": {
                    "definition": {"type": "object", "description": "The tool definition to validate"}
                },
                "required": ["definition"]
            }),
            Self::GenerateImplementation => json!({
                "type": "object",
                "properties": {
                    "definition": {"type": "object", "description": "The tool definition"},
                    "executionMode": {"type": "string", "enum": EXECUTION_MODES, "description": "Execution mode (default: client)"}
                },
                "required": ["definition"]
            }),
            Self::GenerateTests => json!({
                "type": "object",
                "properties": {
                    "definition": {"type": "object", "description": "The tool definition"},
                    "implementation": {"type": "string", "description": "The tool implementation code"}
                },
                "required": ["definition"]
            }),
            Self::SearchDuplicates => json!({
                "type": "object",
                "properties": {
                    "description": {"type": "string", "description": "Description of the tool to search for"},
                    "category": {"type": "string", "description": "Optional category to narrow search"}
                },
                "required": ["description"]
            }),
            Self::ListOperations => json!({"type": "object", "properties": {}}),
        }
    }

    /// Name, description and input schema
    pub fn descriptor(&self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        })
    }

    /// Descriptors of every advertised operation
    pub fn descriptors() -> Vec<Value> {
        Self::TOOLS.iter().map(Operation::descriptor).collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
