//! Google Gemini driver.

mod client;

pub use client::{GEMINI_API_KEY_VAR, GeminiClient};
