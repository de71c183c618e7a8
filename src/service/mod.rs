//! Operation dispatch
//!
//! - operation: operation names, aliases and descriptors
//! - args: argument extraction from request parameters
//! - tool_service: the operations themselves and the result payload

pub mod args;
pub mod operation;
pub mod tool_service;

pub use operation::Operation;
pub use tool_service::{
    BASE_TEST_COUNT, CreatedTool, DEFAULT_NEXT_STEPS, DefinitionSummary, DuplicateSearch, ImplementationOutput,
    TestSuiteOutput, ToolService, ToolSummary, failure_payload,
};
