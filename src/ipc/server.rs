//! IPC Server - serve the tool service over a byte stream
//!
//! Requests are read one line at a time and answered in order. A line that
//! cannot be decoded gets a parse-error response; the loop keeps going. A
//! reply too large to frame is replaced by an error reply for the same id.
//! The loop ends cleanly at end of input.

use futures::{SinkExt, StreamExt};
use std::io::ErrorKind;
use log::{debug, info, warn};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite};

use crate::error::Result;
use crate::service::ToolService;

use super::codec::{Frame, NdJsonCodec};
use super::messages::{Request, Response};

/// Counters for one serve session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    /// Well-formed requests answered
    pub requests: u64,
    /// Lines answered with a parse error
    pub malformed: u64,
}

/// Serve requests from `reader`, writing responses to `writer`, until EOF
pub async fn serve<R, W>(service: &ToolService, reader: R, writer: W, max_length: usize) -> Result<ServeStats>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut requests = FramedRead::new(reader, NdJsonCodec::<Request>::with_max_length(max_length));
    let mut responses = FramedWrite::new(writer, NdJsonCodec::<Response>::with_max_length(max_length));
    let mut stats = ServeStats::default();

    while let Some(frame) = requests.next().await {
        let response = match frame? {
            Frame::Message(request) => {
                stats.requests += 1;
                debug!("Request {} {}", request.id, request.method);
                let result = service.dispatch(&request.method, &request.params);
                Response::new(request.id, result)
            }
            Frame::Malformed { id, error } => {
                stats.malformed += 1;
                warn!("Malformed request: {}", error);
                Response::parse_error(id, error)
            }
        };
        let id = response.id.clone();
        if let Err(e) = responses.send(response).await {
            // Encoding rejects the frame before anything is buffered
            if e.kind() != ErrorKind::InvalidData {
                return Err(e.into());
            }
            warn!("Reply to {} dropped: {}", id, e);
            responses
                .send(Response::error(id, format!("Response too large: {}", e)))
                .await?;
        }
    }

    info!(
        "Input closed after {} request(s), {} malformed",
        stats.requests, stats.malformed
    );
    Ok(stats)
}

/// Serve over the process's stdin and stdout
pub async fn serve_stdio(service: &ToolService, max_length: usize) -> Result<ServeStats> {
    serve(service, tokio::io::stdin(), tokio::io::stdout(), max_length).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::codec::DEFAULT_MAX_LENGTH;
    use serde_json::{Value, json};

    async fn run(input: &str) -> (ServeStats, Vec<Value>) {
        run_with_limit(input, DEFAULT_MAX_LENGTH).await
    }

    async fn run_with_limit(input: &str, max_length: usize) -> (ServeStats, Vec<Value>) {
        let service = ToolService::builtin().unwrap();
        let mut output = Vec::new();
        let stats = serve(&service, input.as_bytes(), &mut output, max_length).await.unwrap();
        let responses = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (stats, responses)
    }

    #[tokio::test]
    async fn test_serve_answers_in_order() {
        let input = concat!(
            r#"{"id": 1, "method": "search-duplicates", "params": {"description": "encode text to base64"}}"#,
            "\n",
            r#"{"id": "two", "method": "ctp_create_tool", "params": {"description": "Convert hexadecimal color codes to RGB values"}}"#,
            "\n",
        );
        let (stats, responses) = run(input).await;

        assert_eq!(stats, ServeStats { requests: 2, malformed: 0 });
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["found"], true);
        assert_eq!(responses[1]["id"], "two");
        assert_eq!(responses[1]["result"]["tool"]["category"], "converters");
    }

    #[tokio::test]
    async fn test_malformed_line_gets_parse_error_and_serving_continues() {
        let input = "{not json\n{\"id\": 3, \"method\": \"tools/list\"}\n";
        let (stats, responses) = run(input).await;

        assert_eq!(stats, ServeStats { requests: 1, malformed: 1 });
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[0]["result"]["success"], false);
        assert!(responses[0]["result"]["error"].as_str().unwrap().starts_with("Parse error: "));
        assert_eq!(responses[1]["id"], 3);
        assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_request_failures_are_payloads() {
        let input = "{\"id\": 4, \"method\": \"ctp_delete_tool\", \"params\": {}}\n{\"id\": 5, \"method\": \"create-tool\"}";
        let (_, responses) = run(input).await;

        assert_eq!(responses[0]["result"], json!({"success": false, "error": "Unknown tool: ctp_delete_tool"}));
        assert_eq!(responses[1]["id"], 5);
        assert_eq!(responses[1]["result"]["error"], "Missing required argument: description");
    }

    #[tokio::test]
    async fn test_empty_input() {
        let (stats, responses) = run("").await;
        assert_eq!(stats, ServeStats::default());
        assert!(responses.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_reply_becomes_error_and_serving_continues() {
        let input = concat!(
            r#"{"id": 1, "method": "create-tool", "params": {"description": "Convert hexadecimal color codes to RGB values"}}"#,
            "\n",
            r#"{"id": 2, "method": "search-duplicates", "params": {"description": "encode text to base64"}}"#,
            "\n",
        );
        let (stats, responses) = run_with_limit(input, 1024).await;

        assert_eq!(stats.requests, 2);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["success"], false);
        assert!(responses[0]["result"]["error"].as_str().unwrap().starts_with("Response too large: "));
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[1]["result"]["found"], true);
    }
}
