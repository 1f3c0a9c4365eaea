//! Reelcraft - competitor marketing copy in, short-video scripts out.
//!
//! Reelcraft chains two language-model calls. An analysis model breaks a
//! competitor's marketing text down into structure, audience insights and
//! content ideas. A generation model then turns that analysis into script
//! variants for each requested short-video platform.
//!
//! # Quick Start
//!
//! ```no_run
//! use reelcraft::{Credentials, GenerationRequest, ReelcraftConfig, ScriptPipeline, build_pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ReelcraftConfig::load(None)?;
//!     let pipeline = build_pipeline(&config, Credentials::from_env())?;
//!
//!     let output = pipeline
//!         .run(GenerationRequest::new(
//!             "Lose 5kg in a week with our miracle tea!",
//!             "Weight Loss",
//!             ["tiktok", "youtube_shorts"],
//!         ))
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&output)?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `reelcraft_error` - Error types
//! - `reelcraft_core` - Request, analysis and script data types
//! - `reelcraft_interface` - `ModelDriver` and pipeline stage traits
//! - `reelcraft_models` - Gemini and OpenAI drivers
//! - `reelcraft_pipeline` - Templates, JSON extraction and the two-stage pipeline
//! - `reelcraft_server` - HTTP API
//!
//! This crate re-exports everything for convenience and adds configuration,
//! credential wiring and logging setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;
mod wiring;

pub use config::{
    AnalysisConfig, Credentials, GenerationConfig, LoggingConfig, PromptsConfig, ReelcraftConfig,
    ServerConfig,
};
pub use observability::{LogSettings, init_logging};
pub use wiring::{ReelcraftPipeline, build_pipeline};

pub use reelcraft_core::*;
pub use reelcraft_error::*;
pub use reelcraft_interface::*;
pub use reelcraft_models::{
    GEMINI_API_KEY_VAR, GeminiClient, OPENAI_API_KEY_VAR, OPENAI_CHAT_COMPLETIONS_URL,
    OpenAIClient,
};
pub use reelcraft_pipeline::{
    AnalysisClient, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT, GenerationClient, Pipeline, PromptSet,
    missing_substitutions, parse_loose, parse_loose_as, prompts, render,
    unresolved_placeholders,
};
pub use reelcraft_server::{ApiError, AppState, PlatformInfo, create_router, serve};
