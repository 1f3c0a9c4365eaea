//! Message types for model conversations.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A text message in a model conversation.
///
/// # Examples
///
/// ```
/// use reelcraft_core::{Message, Role};
///
/// let message = Message::user("Analyze this ad");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "Analyze this ad");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text of the message
    pub content: String,
}

impl Message {
    /// Create a message with the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// System instruction.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// User turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
