//! OpenAI chat-completions driver.
//!
//! Works against any OpenAI-compatible endpoint; the URL is configurable.

mod client;
mod dto;

pub use client::{OPENAI_API_KEY_VAR, OPENAI_CHAT_COMPLETIONS_URL, OpenAIClient};
