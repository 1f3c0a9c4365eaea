//! Output of the generation stage.

use serde::{Deserialize, Serialize};

/// Generated scripts for every requested platform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationResult {
    /// One entry per platform
    pub platform_contents: Vec<PlatformContent>,
}

/// Script variants for one platform.
///
/// `platform` is kept as the string the model returned so that an unexpected
/// label is carried through instead of failing the request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformContent {
    /// Platform identifier
    pub platform: String,
    /// Variants for this platform
    pub items: Vec<ContentVariant>,
}

/// One alternative script/caption/hashtag bundle for an idea on a platform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentVariant {
    /// Idea this variant was written for
    pub idea_id: String,
    /// 1-based variant number
    pub variant_index: u32,
    /// Video title
    pub title: String,
    /// Spoken/visual script
    pub script: String,
    /// Post caption
    pub caption: String,
    /// Hashtags, with or without the leading `#`
    pub hashtags: Vec<String>,
}

impl GenerationResult {
    /// Content for the given platform identifier, if the model produced any.
    pub fn for_platform(&self, platform: &str) -> Option<&PlatformContent> {
        self.platform_contents
            .iter()
            .find(|pc| pc.platform == platform)
    }
}
