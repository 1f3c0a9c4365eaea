//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Sender of a message in a model conversation.
///
/// # Examples
///
/// ```
/// use reelcraft_core::Role;
///
/// assert_ne!(Role::System, Role::User);
/// assert_eq!(format!("{}", Role::System), "system");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages set the model's persona and rules
    #[display("system")]
    System,
    /// User messages carry the prompt
    #[display("user")]
    User,
    /// Assistant messages are earlier model turns
    #[display("assistant")]
    Assistant,
}
