//! ctpgen - scaffold ConveniencePro Tool Protocol (CTP) tools
//!
//! A plain-language description is classified, given an inferred parameter and
//! output schema, and rendered into a tool definition, an implementation stub
//! and a test suite that all agree on names and example values.

pub mod analyzer;
pub mod assembler;
pub mod casing;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod inference;
pub mod ipc;
pub mod service;
pub mod template;
pub mod validation;

pub use error::{CtpError, Result};
