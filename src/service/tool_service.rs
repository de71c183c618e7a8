//! Tool service - the five operations and the uniform result payload
//!
//! The service owns the read-only assets (templates, catalog) and the
//! validator. Every call is independent; nothing is mutated after construction.

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::assembler;
use crate::catalog::{DuplicateMatch, ToolCatalog};
use crate::domain::{ArtifactLayout, ExecutionMode, GeneratedArtifact, TestCase, ToolData, ToolDefinition, ToolRequest};
use crate::error::{CtpError, Result};
use crate::template::{TemplateId, TemplateRenderer};
use crate::validation::{DefinitionValidator, StructuralValidator, suggestions};

use super::args;
use super::operation::Operation;

/// Tests every generated suite contains besides its test cases
pub const BASE_TEST_COUNT: usize = 4;

/// Next steps reported after creating a tool
pub const DEFAULT_NEXT_STEPS: [&str; 4] = [
    "1. Review the generated code",
    "2. Implement the actual logic in the implementation file",
    "3. Run tests: npm test",
    "4. Register the tool in your registry",
];

const VALID_MESSAGE: &str = "Tool definition is valid";
const NO_MATCH_MESSAGE: &str = "No similar tools found. This appears to be a unique tool.";

/// Identity of a created tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub execution_mode: ExecutionMode,
}

/// Result of create-tool
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTool {
    pub tool: ToolSummary,
    /// Definition, implementation, test suite; in that order
    pub files: Vec<GeneratedArtifact>,
    pub next_steps: Vec<String>,
}

/// Summary of a definition that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub parameter_count: usize,
}

/// Result of generate-implementation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationOutput {
    pub code: String,
    pub execution_mode: ExecutionMode,
    pub filename: String,
}

/// Result of generate-tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuiteOutput {
    pub code: String,
    pub filename: String,
    pub test_count: usize,
}

/// Result of search-duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSearch {
    pub matches: Vec<DuplicateMatch>,
}

impl DuplicateSearch {
    pub fn found(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn message(&self) -> String {
        if self.found() {
            format!(
                "Found {} similar tool(s). Consider reviewing these before creating a new one.",
                self.matches.len()
            )
        } else {
            NO_MATCH_MESSAGE.to_string()
        }
    }
}

/// Render data of the test-suite template
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TestSuiteData<'a> {
    #[serde(flatten)]
    tool: &'a ToolData,
    test_cases: &'a [TestCase],
}

/// Serves the tool-scaffolding operations
pub struct ToolService {
    renderer: TemplateRenderer,
    catalog: ToolCatalog,
    validator: Box<dyn DefinitionValidator>,
    layout: ArtifactLayout,
    next_steps: Vec<String>,
}

impl ToolService {
    /// Service over the given assets with the structural validator and default layout
    pub fn new(renderer: TemplateRenderer, catalog: ToolCatalog) -> Self {
        Self {
            renderer,
            catalog,
            validator: Box::new(StructuralValidator::new()),
            layout: ArtifactLayout::default(),
            next_steps: DEFAULT_NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-in templates and catalog
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(TemplateRenderer::builtin(), ToolCatalog::builtin()?))
    }

    pub fn with_validator(mut self, validator: impl DefinitionValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn with_layout(mut self, layout: ArtifactLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the next steps; an empty list keeps the defaults
    pub fn with_next_steps(mut self, next_steps: Vec<String>) -> Self {
        if !next_steps.is_empty() {
            self.next_steps = next_steps;
        }
        self
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    //=== Operations ===

    /// Analyze, infer, assemble and render the three artifacts of a new tool.
    ///
    /// Either all three artifacts are returned or none are.
    pub fn create_tool(&self, request: &ToolRequest) -> Result<CreatedTool> {
        let data = assembler::assemble(request);

        let mut test_case = TestCase::succeeds("should handle valid input", data.example.input.clone());
        if let Some(first) = data.output_fields.first() {
            test_case = test_case.assert_ok(first.name.as_str(), "result should exist");
        }

        let definition = self.renderer.render(TemplateId::ToolDefinition, &data)?;
        let implementation = self.renderer.render(TemplateId::ClientImplementation, &data)?;
        let tests = self.render_test_suite(&data, &[test_case])?;

        let kebab = data.kebab_case_name.as_str();
        let files = vec![
            GeneratedArtifact::new(
                self.layout.definition_path(kebab),
                definition,
                "Tool definition following the CTP schema",
            ),
            GeneratedArtifact::new(self.layout.implementation_path(kebab), implementation, "Tool implementation"),
            GeneratedArtifact::new(self.layout.test_path(kebab), tests, "Test suite"),
        ];

        info!("Created tool '{}' ({}, {} file(s))", data.id, data.category, files.len());

        Ok(CreatedTool {
            tool: ToolSummary {
                id: data.id,
                name: data.name,
                category: data.category,
                execution_mode: data.execution_mode,
            },
            files,
            next_steps: self.next_steps.clone(),
        })
    }

    /// Validate a definition given as raw JSON.
    ///
    /// An invalid definition is reported as [`CtpError::ValidationFailed`].
    pub fn validate_tool(&self, definition: &Value) -> Result<DefinitionSummary> {
        let report = self.validator.validate(definition);
        debug!(
            "Validator '{}' reported {} issue(s)",
            self.validator.name(),
            report.error_count()
        );
        if !report.valid {
            return Err(CtpError::ValidationFailed(report));
        }

        let text = |key: &str| definition.get(key).and_then(Value::as_str).unwrap_or_default().to_string();
        Ok(DefinitionSummary {
            id: text("id"),
            name: text("name"),
            category: text("category"),
            parameter_count: definition
                .get("parameters")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
        })
    }

    /// Render the implementation stub for an existing definition
    pub fn generate_implementation(
        &self,
        definition: &ToolDefinition,
        mode: Option<ExecutionMode>,
    ) -> Result<ImplementationOutput> {
        let data = assembler::from_definition(definition, mode);
        let code = self.renderer.render(TemplateId::ClientImplementation, &data)?;

        Ok(ImplementationOutput {
            code,
            execution_mode: data.execution_mode,
            filename: ArtifactLayout::implementation_filename(&data.kebab_case_name),
        })
    }

    /// Render a test suite for an existing definition
    pub fn generate_tests(&self, definition: &ToolDefinition) -> Result<TestSuiteOutput> {
        let data = assembler::from_definition(definition, None);
        let test_cases = [
            TestCase::succeeds("should process example input correctly", data.example.input.clone()),
            TestCase::fails("should validate required parameters", Map::new(), "required"),
        ];
        let code = self.render_test_suite(&data, &test_cases)?;

        Ok(TestSuiteOutput {
            code,
            filename: ArtifactLayout::test_filename(&data.kebab_case_name),
            test_count: test_cases.len() + BASE_TEST_COUNT,
        })
    }

    /// Known tools similar to `description`
    pub fn search_duplicates(&self, description: &str, category: Option<&str>) -> DuplicateSearch {
        DuplicateSearch {
            matches: self.catalog.search(description, category),
        }
    }

    /// Descriptors of every operation
    pub fn list_operations(&self) -> Vec<Value> {
        Operation::descriptors()
    }

    //=== Boundary ===

    /// Run `method` with `params` and fold the outcome into the result payload.
    ///
    /// Never fails: errors become `{success: false, ...}`.
    pub fn dispatch(&self, method: &str, params: &Value) -> Value {
        match self.call(method, params) {
            Ok(payload) => {
                info!("Handled {}", method);
                payload
            }
            Err(e) => {
                warn!("{} failed: {}", method, e);
                failure_payload(&e)
            }
        }
    }

    /// Run `method` with `params`, returning the success payload
    pub fn call(&self, method: &str, params: &Value) -> Result<Value> {
        let operation = Operation::parse(method).ok_or_else(|| CtpError::UnknownOperation(method.to_string()))?;

        match operation {
            Operation::CreateTool => {
                let mut request = ToolRequest::new(args::required_str(params, "description")?);
                request.name = args::optional_str(params, "name")?.map(str::to_string);
                request.category = args::optional_str(params, "category")?.map(str::to_string);
                request.execution_mode = args::execution_mode(params)?;
                success_payload(&self.create_tool(&request)?)
            }
            Operation::ValidateTool => {
                let summary = self.validate_tool(args::required_value(params, "definition")?)?;
                success_payload(&json!({
                    "valid": true,
                    "message": VALID_MESSAGE,
                    "definition": summary,
                }))
            }
            Operation::GenerateImplementation => {
                let definition = parse_definition(params)?;
                let mode = args::execution_mode(params)?;
                let implementation = self.generate_implementation(&definition, mode)?;
                success_payload(&json!({ "implementation": implementation }))
            }
            Operation::GenerateTests => {
                let definition = parse_definition(params)?;
                // Accepted for compatibility; generation does not read it
                let _implementation = args::optional_str(params, "implementation")?;
                let tests = self.generate_tests(&definition)?;
                success_payload(&json!({ "tests": tests }))
            }
            Operation::SearchDuplicates => {
                let description = args::required_str(params, "description")?;
                let category = args::optional_str(params, "category")?;
                let search = self.search_duplicates(description, category);
                let body = if search.found() {
                    json!({
                        "found": true,
                        "matches": search.matches,
                        "message": search.message(),
                        "canProceed": true,
                    })
                } else {
                    json!({
                        "found": false,
                        "message": search.message(),
                        "canProceed": true,
                    })
                };
                success_payload(&body)
            }
            Operation::ListOperations => success_payload(&json!({ "tools": self.list_operations() })),
        }
    }

    fn render_test_suite(&self, data: &ToolData, test_cases: &[TestCase]) -> Result<String> {
        let suite = TestSuiteData { tool: data, test_cases };
        self.renderer.render(TemplateId::TestSuite, &suite)
    }
}

fn parse_definition(params: &Value) -> Result<ToolDefinition> {
    let value = args::required_value(params, "definition")?;
    serde_json::from_value(value.clone()).map_err(|e| CtpError::InvalidArgument(format!("Invalid definition: {}", e)))
}

/// `{success: true, ...body}`
fn success_payload<T: Serialize>(body: &T) -> Result<Value> {
    let mut payload = Map::new();
    payload.insert("success".to_string(), Value::Bool(true));
    match serde_json::to_value(body)? {
        Value::Object(fields) => payload.extend(fields),
        other => {
            payload.insert("data".to_string(), other);
        }
    }
    Ok(Value::Object(payload))
}

/// The failure payload for an error
pub fn failure_payload(error: &CtpError) -> Value {
    match error {
        CtpError::ValidationFailed(report) => json!({
            "success": false,
            "valid": false,
            "errors": report.errors,
            "suggestions": suggestions(&report.errors),
        }),
        other => json!({
            "success": false,
            "error": other.to_string(),
        }),
    }
}
