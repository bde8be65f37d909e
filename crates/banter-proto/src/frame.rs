//! Tagged wire frames.
//!
//! Every protocol line is one frame: a fixed tag prefix followed by a
//! payload. The set of tags is closed and ordered; identification scans the
//! declared order and takes the first tag that prefixes the line. Tags are
//! chosen so that none is a prefix of another, which makes the scan order
//! immaterial in practice.

use std::fmt;

use crate::error::{PayloadError, Result};
use crate::message::ChatMessage;
use crate::user::ChatUser;

/// The kind of a wire frame, i.e. its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// A user joined (or, outbound, announces ourselves on connect).
    Connected,
    /// A user left (or, outbound, announces our departure).
    Disconnected,
    /// A chat message.
    Message,
}

impl FrameKind {
    /// All frame kinds, in declared tag-scan order.
    pub const ALL: [FrameKind; 3] = [
        FrameKind::Connected,
        FrameKind::Disconnected,
        FrameKind::Message,
    ];

    /// The tag string that prefixes every line of this kind.
    pub const fn tag(self) -> &'static str {
        match self {
            FrameKind::Connected => "$(CONNECTED)",
            FrameKind::Disconnected => "$(DISCONNECTED)",
            FrameKind::Message => "$(MESSAGE)",
        }
    }

    /// Identify a line by tag prefix.
    ///
    /// Returns the first kind (in [`FrameKind::ALL`] order) whose tag
    /// prefixes `line`, with the remainder of the line after the tag.
    /// Returns `None` when no tag matches.
    pub fn identify(line: &str) -> Option<(FrameKind, &str)> {
        FrameKind::ALL
            .iter()
            .find_map(|kind| line.strip_prefix(kind.tag()).map(|rest| (*kind, rest)))
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A fully parsed wire frame: tag plus payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// `$(CONNECTED)` carrying the joining user.
    Connected(ChatUser),
    /// `$(DISCONNECTED)` carrying the leaving user.
    Disconnected(ChatUser),
    /// `$(MESSAGE)` carrying a chat message.
    Message(ChatMessage),
}

impl Frame {
    /// Parse one complete line (without its terminator) into a frame.
    ///
    /// Fails with [`PayloadError::UnknownTag`] when no tag prefixes the
    /// line, or with the payload parser's error when the tag matched but
    /// the remainder is malformed. Never panics.
    pub fn parse(line: &str) -> Result<Frame> {
        let (kind, payload) = FrameKind::identify(line).ok_or(PayloadError::UnknownTag)?;
        match kind {
            FrameKind::Connected => Ok(Frame::Connected(payload.parse()?)),
            FrameKind::Disconnected => Ok(Frame::Disconnected(payload.parse()?)),
            FrameKind::Message => Ok(Frame::Message(payload.parse()?)),
        }
    }

    /// The kind (tag) of this frame.
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Connected(_) => FrameKind::Connected,
            Frame::Disconnected(_) => FrameKind::Disconnected,
            Frame::Message(_) => FrameKind::Message,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Connected(user) => write!(f, "{}{}", self.kind(), user),
            Frame::Disconnected(user) => write!(f, "{}{}", self.kind(), user),
            Frame::Message(msg) => write!(f, "{}{}", self.kind(), msg),
        }
    }
}
