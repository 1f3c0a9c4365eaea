//! Core data types for Reelcraft.
//!
//! This crate holds the types shared by every stage of the script pipeline:
//! the inbound [`GenerationRequest`], the structured [`AnalysisResult`] and
//! [`GenerationResult`] produced by the two model stages, the combined
//! [`PipelineOutput`], and the provider-neutral [`GenerateRequest`] /
//! [`GenerateResponse`] pair exchanged with model drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod content;
mod input;
mod message;
mod output;
mod platform;
mod request;
mod role;

pub use analysis::{AnalysisResult, Idea, Insights, Structure};
pub use content::{ContentVariant, GenerationResult, PlatformContent};
pub use input::{GenerationRequest, ValidatedRequest};
pub use message::Message;
pub use output::{FailureBody, PipelineOutput};
pub use platform::Platform;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, ResponseFormat};
pub use role::Role;
