//! Inbound line dispatch.
//!
//! The client-side half of the frame registry: a successfully parsed frame
//! maps to exactly one listener callback. Malformed and unrecognized lines
//! are logged and dropped; the remote peer is never told (no protocol-level
//! NACK), and the read loop keeps going.

use banter_proto::{Frame, PayloadError};
use tracing::warn;

use crate::listener::ServerListener;

/// Dispatch one received line to the listener.
///
/// Invokes exactly one callback when the line parses; otherwise logs and
/// returns. Never panics, never propagates an error.
pub fn dispatch_line(line: &str, listener: &dyn ServerListener) {
    match Frame::parse(line) {
        Ok(Frame::Connected(user)) => listener.on_player_joined(&user),
        Ok(Frame::Disconnected(user)) => listener.on_player_left(&user),
        Ok(Frame::Message(message)) => listener.on_chat_message(&message),
        Err(PayloadError::UnknownTag) => {
            warn!(line, "dropping line with unrecognized tag");
        }
        Err(error) => {
            warn!(line, %error, "dropping malformed payload");
        }
    }
}
