//! Line-based codec for tokio.
//!
//! Reads and writes newline-terminated UTF-8 lines, the transport framing
//! underneath [`Frame`](crate::Frame). Decoded lines have their terminator
//! stripped; encoded lines get a `\n` appended.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error::LineCodecError;

/// Default maximum line length in bytes, terminator included.
pub const DEFAULT_MAX_LINE_LEN: usize = 1024;

/// Codec for newline-terminated protocol lines.
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
}

impl LineCodec {
    /// Create a codec with the default line length limit.
    pub fn new() -> Self {
        Self {
            next_index: 0,
            max_len: DEFAULT_MAX_LINE_LEN,
        }
    }

    /// Create a codec with a custom max line length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = LineCodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>, LineCodecError> {
        // Look for newline starting from where we left off
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') {
            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if line.len() > self.max_len {
                return Err(LineCodecError::LineTooLong {
                    actual: line.len(),
                    limit: self.max_len,
                });
            }

            let data = String::from_utf8(line.to_vec()).map_err(|e| {
                LineCodecError::InvalidUtf8 {
                    byte_pos: e.utf8_error().valid_up_to(),
                    details: e.utf8_error().to_string(),
                }
            })?;

            Ok(Some(data.trim_end_matches(&['\r', '\n'][..]).to_string()))
        } else {
            // No complete line yet - remember where we stopped
            self.next_index = src.len();

            // Check if partial line already exceeds limit
            if src.len() > self.max_len {
                return Err(LineCodecError::LineTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }

            Ok(None)
        }
    }
}

impl Encoder<String> for LineCodec {
    type Error = LineCodecError;

    fn encode(&mut self, msg: String, dst: &mut BytesMut) -> Result<(), LineCodecError> {
        dst.extend(msg.into_bytes());
        dst.extend_from_slice(b"\n");
        Ok(())
    }
}
