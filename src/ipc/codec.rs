//! Newline-delimited JSON codec.
//!
//! One JSON object per line. A line that does not parse is handed up as
//! [`Frame::Malformed`] instead of failing the stream, so one bad request never
//! ends the session.

use bytes::{Buf, BufMut, BytesMut};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::marker::PhantomData;
use tokio_util::codec::{Decoder, Encoder};

/// Default maximum line length (16 MB).
pub const DEFAULT_MAX_LENGTH: usize = 16 * 1024 * 1024;

/// One decoded line.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame<T> {
    /// A well-formed message.
    Message(T),
    /// A line that could not be decoded.
    Malformed {
        /// The line's `id`, when the line was JSON with one.
        id: Value,
        error: String,
    },
}

/// Newline-delimited JSON codec.
#[derive(Debug)]
pub struct NdJsonCodec<T> {
    _phantom: PhantomData<T>,
    max_length: usize,
    /// Dropping the rest of an oversized line
    discarding: bool,
}

impl<T> NdJsonCodec<T> {
    /// Create a new codec with default max length.
    pub fn new() -> Self {
        Self::with_max_length(DEFAULT_MAX_LENGTH)
    }

    /// Create a new codec with custom max length.
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            _phantom: PhantomData,
            max_length,
            discarding: false,
        }
    }

    /// Get the max message length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl<T> Default for NdJsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NdJsonCodec<T> {
    fn clone(&self) -> Self {
        Self::with_max_length(self.max_length)
    }
}

fn too_large<T>(length: usize, max: usize) -> Frame<T> {
    Frame::Malformed {
        id: Value::Null,
        error: format!("Message too large: {} > {}", length, max),
    }
}

impl<T: DeserializeOwned> NdJsonCodec<T> {
    fn parse_line(line: &[u8]) -> Frame<T> {
        match serde_json::from_slice::<T>(line) {
            Ok(message) => Frame::Message(message),
            Err(e) => {
                let id = serde_json::from_slice::<Value>(line)
                    .ok()
                    .and_then(|v| v.get("id").cloned())
                    .unwrap_or(Value::Null);
                Frame::Malformed { id, error: e.to_string() }
            }
        }
    }
}

impl<T: DeserializeOwned> Decoder for NdJsonCodec<T> {
    type Item = Frame<T>;
    type Error = std::io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> std::result::Result<Option<Self::Item>, Self::Error> {
        loop {
            let newline_pos = src.iter().position(|&b| b == b'\n');

            if self.discarding {
                match newline_pos {
                    Some(pos) => {
                        src.advance(pos + 1);
                        self.discarding = false;
                        continue;
                    }
                    None => {
                        src.clear();
                        return Ok(None);
                    }
                }
            }

            let Some(pos) = newline_pos else {
                if src.len() > self.max_length {
                    let length = src.len();
                    src.clear();
                    self.discarding = true;
                    return Ok(Some(too_large(length, self.max_length)));
                }
                return Ok(None);
            };

            // Take the line, then skip the newline
            let line = src.split_to(pos);
            src.advance(1);

            if line.len() > self.max_length {
                return Ok(Some(too_large(line.len(), self.max_length)));
            }

            let line = line.strip_suffix(b"\r").unwrap_or(&line[..]);
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            return Ok(Some(Self::parse_line(line)));
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> std::result::Result<Option<Self::Item>, Self::Error> {
        if let Some(frame) = self.decode(src)? {
            return Ok(Some(frame));
        }
        // A final line without a trailing newline
        if src.is_empty() || self.discarding {
            src.clear();
            return Ok(None);
        }
        let line = src.split();
        if line.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(Self::parse_line(&line)))
    }
}

impl<T: Serialize> Encoder<T> for NdJsonCodec<T> {
    type Error = std::io::Error;

    fn encode(&mut self, item: T, dst: &mut BytesMut) -> std::result::Result<(), Self::Error> {
        // Serialize to JSON (compact, no newlines)
        let json = serde_json::to_vec(&item)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, format!("JSON error: {}", e)))?;

        // Check max length
        if json.len() > self.max_length {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Message too large: {} > {}", json.len(), self.max_length),
            ));
        }

        // Write data and newline
        dst.reserve(json.len() + 1);
        dst.put_slice(&json);
        dst.put_u8(b'\n');

        Ok(())
    }
}
