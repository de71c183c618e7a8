//! Protocol message types.
//!
//! Uses JSON Lines (newline-delimited JSON) over stdin/stdout.
//! Every request gets exactly one response carrying the operation payload.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Request read from the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Echoed back in the response; any JSON value.
    #[serde(default)]
    pub id: Value,
    /// Operation name (e.g., "ctp_create_tool", "create-tool", "tools/list").
    pub method: String,
    /// Operation arguments.
    #[serde(default)]
    pub params: Value,
}

impl Request {
    /// Create a new request with the given method and params.
    pub fn new(id: impl Into<Value>, method: impl Into<String>, params: Value) -> Self {
        Self {
            id: id.into(),
            method: method.into(),
            params,
        }
    }
}

/// Response written back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Id of the request this answers, or null if it could not be read.
    pub id: Value,
    /// The operation payload, `{success, ...}`.
    pub result: Value,
}

impl Response {
    pub fn new(id: Value, result: Value) -> Self {
        Self { id, result }
    }

    /// Response to a line that could not be decoded.
    pub fn parse_error(id: Value, error: impl std::fmt::Display) -> Self {
        Self::new(
            id,
            json!({
                "success": false,
                "error": format!("Parse error: {}", error),
            }),
        )
    }

    /// Failure response carrying `error` for request `id`.
    pub fn error(id: Value, error: impl std::fmt::Display) -> Self {
        Self::new(
            id,
            json!({
                "success": false,
                "error": error.to_string(),
            }),
        )
    }

    /// Check if the payload reports success.
    pub fn is_success(&self) -> bool {
        self.result.get("success").and_then(Value::as_bool).unwrap_or(false)
    }
}
