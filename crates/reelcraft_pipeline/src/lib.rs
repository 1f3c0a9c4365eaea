//! Two-stage script pipeline for Reelcraft.
//!
//! A request flows through [`Pipeline::run`]:
//!
//! 1. the request is validated;
//! 2. [`AnalysisClient`] renders the analysis prompt and asks a JSON-mode model
//!    for an [`AnalysisResult`](reelcraft_core::AnalysisResult);
//! 3. [`GenerationClient`] feeds that analysis into the generation prompt and
//!    parses per-platform scripts.
//!
//! Model output goes through [`parse_loose_as`], which accepts bare JSON or
//! JSON wrapped in a markdown fence.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod call;
mod extraction;
mod generation;
mod orchestrator;
pub mod prompts;
mod template;

pub use analysis::AnalysisClient;
pub use call::DEFAULT_TIMEOUT;
pub use extraction::{parse_loose, parse_loose_as};
pub use generation::{DEFAULT_TEMPERATURE, GenerationClient};
pub use orchestrator::Pipeline;
pub use prompts::PromptSet;
pub use template::{missing_substitutions, render, unresolved_placeholders};
