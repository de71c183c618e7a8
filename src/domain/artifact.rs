//! Generated artifacts and the test cases rendered into test suites

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One rendered source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// Location relative to the target project root
    pub path: String,
    pub content: String,
    pub description: String,
}

impl GeneratedArtifact {
    pub fn new(path: impl Into<String>, content: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            description: description.into(),
        }
    }
}

/// Where the three artifacts of a tool are placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactLayout {
    pub tools_dir: String,
    pub tests_dir: String,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self {
            tools_dir: "src/tools".to_string(),
            tests_dir: "src/tools/__tests__".to_string(),
        }
    }
}

impl ArtifactLayout {
    pub fn definition_path(&self, kebab_name: &str) -> String {
        format!("{}/{}-definition.ts", self.tools_dir, kebab_name)
    }

    pub fn implementation_path(&self, kebab_name: &str) -> String {
        format!("{}/{}", self.tools_dir, Self::implementation_filename(kebab_name))
    }

    pub fn test_path(&self, kebab_name: &str) -> String {
        format!("{}/{}", self.tests_dir, Self::test_filename(kebab_name))
    }

    pub fn implementation_filename(kebab_name: &str) -> String {
        format!("{}.ts", kebab_name)
    }

    pub fn test_filename(kebab_name: &str) -> String {
        format!("{}.test.ts", kebab_name)
    }
}

/// A single assertion inside a generated test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAssertion {
    pub assert_type: String,
    pub field: String,
    pub expected: String,
}

/// A generated test case
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub description: String,
    pub input: Map<String, Value>,
    pub expected_success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_error: Option<String>,
    pub assertions: Vec<TestAssertion>,
}

impl TestCase {
    /// A case that expects the tool to succeed on `input`
    pub fn succeeds(description: impl Into<String>, input: Map<String, Value>) -> Self {
        Self {
            description: description.into(),
            input,
            expected_success: true,
            expected_error: None,
            assertions: Vec::new(),
        }
    }

    /// A case that expects the tool to fail with an error mentioning `error`
    pub fn fails(description: impl Into<String>, input: Map<String, Value>, error: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            input,
            expected_success: false,
            expected_error: Some(error.into()),
            assertions: Vec::new(),
        }
    }

    /// Assert that `field` of the result is truthy
    pub fn assert_ok(mut self, field: impl Into<String>, expected: impl Into<String>) -> Self {
        self.assertions.push(TestAssertion {
            assert_type: "ok".to_string(),
            field: field.into(),
            expected: expected.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_paths() {
        let layout = ArtifactLayout::default();
        assert_eq!(layout.definition_path("hex-to-rgb"), "src/tools/hex-to-rgb-definition.ts");
        assert_eq!(layout.implementation_path("hex-to-rgb"), "src/tools/hex-to-rgb.ts");
        assert_eq!(layout.test_path("hex-to-rgb"), "src/tools/__tests__/hex-to-rgb.test.ts");
    }

    #[test]
    fn test_custom_layout_paths() {
        let layout = ArtifactLayout {
            tools_dir: "lib/ctp".to_string(),
            tests_dir: "test".to_string(),
        };
        assert_eq!(layout.implementation_path("slugify"), "lib/ctp/slugify.ts");
        assert_eq!(layout.test_path("slugify"), "test/slugify.test.ts");
    }

    #[test]
    fn test_test_case_builders() {
        let case = TestCase::succeeds("should handle valid input", Map::new()).assert_ok("output", "result should exist");
        assert!(case.expected_success);
        assert_eq!(case.assertions.len(), 1);
        assert_eq!(case.assertions[0].assert_type, "ok");

        let case = TestCase::fails("should validate required parameters", Map::new(), "required");
        assert!(!case.expected_success);
        assert_eq!(case.expected_error.as_deref(), Some("required"));
    }

    #[test]
    fn test_test_case_serialization() {
        let case = TestCase::succeeds("works", Map::new());
        let json = serde_json::to_value(&case).unwrap();
        assert_eq!(json["expectedSuccess"], true);
        assert!(json.get("expectedError").is_none());
    }
}
