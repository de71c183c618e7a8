//! Argument extraction from request parameter objects

use serde_json::Value;

use crate::domain::ExecutionMode;
use crate::error::{CtpError, Result};

/// A string argument that must be present
pub fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str> {
    match params.get(key) {
        None | Some(Value::Null) => Err(CtpError::MissingArgument(key.to_string())),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(CtpError::InvalidArgument(format!("'{}' must be a string", key))),
    }
}

/// A string argument that may be absent or null
pub fn optional_str<'a>(params: &'a Value, key: &str) -> Result<Option<&'a str>> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(CtpError::InvalidArgument(format!("'{}' must be a string", key))),
    }
}

/// Any JSON value that must be present
pub fn required_value<'a>(params: &'a Value, key: &str) -> Result<&'a Value> {
    match params.get(key) {
        None | Some(Value::Null) => Err(CtpError::MissingArgument(key.to_string())),
        Some(value) => Ok(value),
    }
}

/// The optional `executionMode` argument
pub fn execution_mode(params: &Value) -> Result<Option<ExecutionMode>> {
    optional_str(params, "executionMode")?
        .map(|s| {
            ExecutionMode::parse(s).ok_or_else(|| {
                CtpError::InvalidArgument(format!("executionMode must be one of client, server, both (got '{}')", s))
            })
        })
        .transpose()
}
