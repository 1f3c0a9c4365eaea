//! Shared handler state.

use reelcraft_interface::ScriptPipeline;
use std::sync::Arc;

/// State shared by every request: the pipeline, built once at start-up.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<dyn ScriptPipeline>,
}

impl AppState {
    /// Wrap a pipeline for sharing across handlers.
    pub fn new(pipeline: impl ScriptPipeline + 'static) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// The pipeline.
    pub fn pipeline(&self) -> &dyn ScriptPipeline {
        self.pipeline.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
