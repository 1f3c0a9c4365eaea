//! Distribution platforms that scripts are generated for.

use reelcraft_error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A short-video distribution channel.
///
/// Serialized as its identifier (`tiktok`, `youtube_shorts`, `facebook_reels`).
///
/// # Examples
///
/// ```
/// use reelcraft_core::Platform;
///
/// let platform: Platform = "youtube_shorts".parse().unwrap();
/// assert_eq!(platform, Platform::YoutubeShorts);
/// assert_eq!(platform.label(), "YouTube Shorts");
/// assert!("myspace".parse::<Platform>().is_err());
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
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// TikTok
    #[display("tiktok")]
    Tiktok,
    /// YouTube Shorts
    #[display("youtube_shorts")]
    YoutubeShorts,
    /// Facebook Reels
    #[display("facebook_reels")]
    FacebookReels,
}

impl Platform {
    /// Every known platform, in display order.
    pub const ALL: [Platform; 3] = [
        Platform::Tiktok,
        Platform::YoutubeShorts,
        Platform::FacebookReels,
    ];

    /// Wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::YoutubeShorts => "youtube_shorts",
            Platform::FacebookReels => "facebook_reels",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Tiktok => "TikTok",
            Platform::YoutubeShorts => "YouTube Shorts",
            Platform::FacebookReels => "Facebook Reels",
        }
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| {
                let known: Vec<&str> = Platform::ALL.iter().map(Platform::id).collect();
                ValidationError::new(
                    "platforms",
                    format!("unknown platform '{}' (known: {})", id, known.join(", ")),
                )
            })
    }
}
