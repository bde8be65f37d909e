//! Chat user identity.

use std::fmt;
use std::str::FromStr;

use crate::error::{PayloadError, Result};

/// Maximum user name length in bytes.
pub const NAME_MAX_LEN: usize = 32;

/// A chat participant, identified by name.
///
/// Names are non-empty, at most [`NAME_MAX_LEN`] bytes, and contain no
/// whitespace or control characters. The no-whitespace rule is what makes
/// the message payload format (`<from> :<text>`) unambiguous, so it is
/// enforced at construction and again on parse.
///
/// Serializes to exactly one line's payload: the name itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatUser {
    name: String,
}

impl ChatUser {
    /// Create a user from a name, validating it.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name })
    }

    /// The user's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Check the name rules shared by construction and parsing.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PayloadError::EmptyName);
    }
    if name.len() > NAME_MAX_LEN {
        return Err(PayloadError::NameTooLong {
            actual: name.len(),
            limit: NAME_MAX_LEN,
        });
    }
    if let Some(c) = name.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(PayloadError::IllegalNameChar(c));
    }
    Ok(())
}

impl FromStr for ChatUser {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ChatUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
