//! Chat message payloads.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};

use crate::error::{PayloadError, Result};
use crate::user::ChatUser;

/// Separator between the sender name and the message body on the wire.
const SEPARATOR: &str = " :";

/// One chat message: who said what, and when it was seen locally.
///
/// Wire payload is `<from> :<text>`. The text is the last field and greedy,
/// so it may freely contain spaces and colons; the first `" :"` is always
/// the separator because sender names contain no whitespace.
///
/// The timestamp never travels on the wire. It is captured from the local
/// clock at construction (i.e. on parse for inbound messages), which is why
/// equality ignores it.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    from: String,
    text: String,
    sent_at: DateTime<Local>,
}

impl ChatMessage {
    /// Create a message, validating sender and text.
    ///
    /// The text must be non-empty and must not contain a line terminator.
    pub fn new(from: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let from = ChatUser::new(from)?;
        let text = text.into();
        if text.is_empty() {
            return Err(PayloadError::EmptyText);
        }
        if text.contains(&['\r', '\n'][..]) {
            return Err(PayloadError::TextContainsLineBreak);
        }
        Ok(Self {
            from: from.name().to_string(),
            text,
            sent_at: Local::now(),
        })
    }

    /// The sender's name.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When this message was created locally.
    pub fn sent_at(&self) -> DateTime<Local> {
        self.sent_at
    }

    /// The local timestamp formatted for display, e.g. `03:07 PM`.
    pub fn display_time(&self) -> String {
        self.sent_at.format("%I:%M %p").to_string()
    }
}

impl FromStr for ChatMessage {
    type Err = PayloadError;

    /// Parse a `<from> :<text>` payload. Splits on the first `" :"` only;
    /// the remainder is the body, verbatim.
    fn from_str(s: &str) -> Result<Self> {
        let (from, text) = s.split_once(SEPARATOR).ok_or(PayloadError::MissingSeparator)?;
        Self::new(from, text)
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, SEPARATOR, self.text)
    }
}

/// Timestamps are receiver-local, so they are excluded from equality.
impl PartialEq for ChatMessage {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.text == other.text
    }
}

impl Eq for ChatMessage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let msg = ChatMessage::new("bob", "hello world").unwrap();
        let parsed: ChatMessage = msg.to_string().parse().unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_round_trip_with_separator_in_text() {
        let msg = ChatMessage::new("bob", "a :b : c ::").unwrap();
        assert_eq!(msg.to_string(), "bob :a :b : c ::");
        let parsed: ChatMessage = msg.to_string().parse().unwrap();
        assert_eq!(parsed.text(), "a :b : c ::");
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_tag_substring_in_text_is_carried_verbatim() {
        let msg = ChatMessage::new("bob", "try $(MESSAGE) as text").unwrap();
        let parsed: ChatMessage = msg.to_string().parse().unwrap();
        assert_eq!(parsed.text(), "try $(MESSAGE) as text");
    }

    #[test]
    fn test_empty_text_rejected() {
        assert_eq!(ChatMessage::new("bob", ""), Err(PayloadError::EmptyText));
    }

    #[test]
    fn test_line_break_rejected() {
        assert_eq!(
            ChatMessage::new("bob", "two\nlines"),
            Err(PayloadError::TextContainsLineBreak)
        );
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            "no-separator-here".parse::<ChatMessage>(),
            Err(PayloadError::MissingSeparator)
        );
    }

    #[test]
    fn test_invalid_sender_rejected() {
        // "bad name" has a space before the separator, so the split yields
        // an invalid sender.
        assert_eq!(
            "bad name :hi".parse::<ChatMessage>(),
            Err(PayloadError::IllegalNameChar(' '))
        );
    }

    #[test]
    fn test_display_time_format() {
        let msg = ChatMessage::new("bob", "hi").unwrap();
        let time = msg.display_time();
        // hh:mm AM/PM
        assert_eq!(time.len(), 8);
        assert!(time.ends_with("AM") || time.ends_with("PM"));
        assert_eq!(&time[2..3], ":");
    }
}
