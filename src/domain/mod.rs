//! Domain types for ctpgen
//!
//! - Category: the fixed tool taxonomy
//! - Parameter / OutputField: the inferred input and output schema
//! - ToolData: the assembled record templates render from
//! - ToolDefinition: a caller-supplied definition
//! - GeneratedArtifact / TestCase: what rendering produces

pub mod artifact;
pub mod category;
pub mod parameter;
pub mod tool;

pub use artifact::{ArtifactLayout, GeneratedArtifact, TestAssertion, TestCase};
pub use category::Category;
pub use parameter::{FieldType, OutputField, Parameter};
pub use tool::{ExecutionMode, TOOL_METHOD, ToolData, ToolDefinition, ToolDescriptionAnalysis, ToolExample, ToolRequest};
