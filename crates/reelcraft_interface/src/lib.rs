//! Trait definitions for Reelcraft.
//!
//! These traits are the seams of the pipeline: model drivers talk to
//! providers, stages turn prompts into structured results, and a
//! [`ScriptPipeline`] runs a whole request. Each layer receives the one below
//! it as a value, so tests can swap any of them for a mock.

mod traits;

pub use traits::{AnalysisStage, GenerationStage, ModelDriver, ScriptPipeline};
