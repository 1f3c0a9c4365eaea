//! LLM provider drivers for Reelcraft.
//!
//! Each driver implements [`ModelDriver`](reelcraft_interface::ModelDriver)
//! and makes exactly one outbound call per request.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) through `gemini-rust`, used by the analysis stage
//! - **OpenAI** chat completions (or any compatible endpoint), used by the
//!   generation stage
//!
//! # Example
//!
//! ```no_run
//! use reelcraft_core::{GenerateRequest, Message, ResponseFormat};
//! use reelcraft_interface::ModelDriver;
//! use reelcraft_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env();
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Reply with {\"ok\": true}")])
//!     .response_format(ResponseFormat::Json)
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod openai;
mod redact;

pub use gemini::{GEMINI_API_KEY_VAR, GeminiClient};
pub use openai::{OPENAI_API_KEY_VAR, OPENAI_CHAT_COMPLETIONS_URL, OpenAIClient};
