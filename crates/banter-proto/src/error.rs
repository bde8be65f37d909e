//! Error types for the banter wire protocol.
//!
//! Parsers in this crate report failure as a value rather than panicking, so
//! a read loop can log a bad line and keep going.

use thiserror::Error;

/// Convenience type alias for Results using [`PayloadError`].
pub type Result<T, E = PayloadError> = std::result::Result<T, E>;

/// Errors produced while parsing or constructing protocol payloads.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PayloadError {
    /// No declared tag is a prefix of the line.
    #[error("no known tag prefixes the line")]
    UnknownTag,

    /// A user name was empty.
    #[error("user name is empty")]
    EmptyName,

    /// A user name exceeded the length limit.
    #[error("user name too long: {actual} bytes (limit: {limit})")]
    NameTooLong {
        /// Actual name length in bytes.
        actual: usize,
        /// Maximum allowed length in bytes.
        limit: usize,
    },

    /// A user name contained whitespace or a control character.
    #[error("illegal character {0:?} in user name")]
    IllegalNameChar(char),

    /// A chat message body was empty.
    #[error("message text is empty")]
    EmptyText,

    /// A chat message body contained a line terminator.
    #[error("message text contains a line terminator")]
    TextContainsLineBreak,

    /// A message payload had no `" :"` separator between sender and text.
    #[error("message payload has no sender/text separator")]
    MissingSeparator,
}

/// Errors produced by the line codec.
#[cfg(feature = "tokio")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LineCodecError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Line exceeded the maximum allowed length.
    #[error("line too long: {actual} bytes (limit: {limit})")]
    LineTooLong {
        /// Actual line length.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },

    /// Invalid UTF-8 bytes in a received line.
    #[error("invalid UTF-8 in line at byte {byte_pos}: {details}")]
    InvalidUtf8 {
        /// Byte position where UTF-8 validation failed.
        byte_pos: usize,
        /// Detailed error message from the UTF-8 decoder.
        details: String,
    },
}
