//! Definition validation
//!
//! The validator is a collaborator behind the [`DefinitionValidator`] trait:
//! it reports validity and structured issues, and the boundary turns issues into
//! human-readable suggestions with [`suggestions`].

pub mod feedback;
pub mod structural;
pub mod traits;

pub use feedback::{suggestion, suggestions};
pub use structural::StructuralValidator;
pub use traits::{DefinitionValidator, IssueCode, ValidationIssue, ValidationReport};
