//! # banter-proto
//!
//! The wire protocol spoken by the banter chat client.
//!
//! The protocol is text based and line oriented: one complete message per
//! newline-terminated UTF-8 line. Every line starts with exactly one tag
//! identifying its kind, immediately followed by the payload:
//!
//! | Tag               | Payload                     | Meaning            |
//! |-------------------|-----------------------------|--------------------|
//! | `$(CONNECTED)`    | serialized [`ChatUser`]     | a user joined      |
//! | `$(DISCONNECTED)` | serialized [`ChatUser`]     | a user left        |
//! | `$(MESSAGE)`      | serialized [`ChatMessage`]  | a chat message     |
//!
//! ## Payload formats
//!
//! A [`ChatUser`] payload is the user's name. Names contain no whitespace
//! and no control characters, which keeps the [`ChatMessage`] payload
//! unambiguous: it is `<from> :<text>`, where the first `" :"` is the field
//! separator and everything after it is the message body, verbatim. The body
//! may contain spaces, colons, even tag substrings; because tags are only
//! recognized at line start, embedded tag text is carried through untouched.
//! Tags themselves have no escaping on the wire (known limitation).
//!
//! Message timestamps are not carried on the wire; each receiver stamps
//! messages with its own local clock on parse.
//!
//! ## Quick start
//!
//! ```rust
//! use banter_proto::{ChatMessage, Frame};
//!
//! let msg = ChatMessage::new("bob", "hi there :)").unwrap();
//! let line = Frame::Message(msg).to_string();
//! assert_eq!(line, "$(MESSAGE)bob :hi there :)");
//!
//! match Frame::parse(&line).unwrap() {
//!     Frame::Message(m) => assert_eq!(m.text(), "hi there :)"),
//!     other => panic!("unexpected frame: {other:?}"),
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod frame;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;
pub mod user;

pub use error::PayloadError;
pub use frame::{Frame, FrameKind};
#[cfg(feature = "tokio")]
pub use line::LineCodec;
pub use message::ChatMessage;
pub use user::ChatUser;
