//! IPC Layer - newline-delimited JSON over stdio
//!
//! This module provides:
//! - Message types for requests and responses
//! - A codec that survives malformed lines
//! - The serve loop that feeds requests to the tool service

pub mod codec;
pub mod messages;
pub mod server;

pub use codec::{DEFAULT_MAX_LENGTH, Frame, NdJsonCodec};
pub use messages::{Request, Response};
pub use server::{ServeStats, serve, serve_stdio};
