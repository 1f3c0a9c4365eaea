//! The inbound pipeline request and its validated form.

use crate::Platform;
use derive_getters::Getters;
use reelcraft_error::{ReelcraftResult, ValidationError};
use serde::{Deserialize, Serialize};

/// Request as received from the caller.
///
/// Absent fields deserialize as empty so that [`validate`](Self::validate)
/// reports them as validation failures.
///
/// # Examples
///
/// ```
/// use reelcraft_core::{GenerationRequest, Platform};
///
/// let request: GenerationRequest = serde_json::from_str(
///     r#"{"rawText": "Lose 5kg in a week!", "niche": "Weight Loss", "platforms": ["tiktok"]}"#,
/// ).unwrap();
///
/// let validated = request.validate().unwrap();
/// assert_eq!(validated.platforms(), &vec![Platform::Tiktok]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    /// Competitor marketing text
    pub raw_text: String,
    /// Target market / industry
    pub niche: String,
    /// Platform identifiers, in the order results should appear
    pub platforms: Vec<String>,
}

/// A request that passed validation. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ValidatedRequest {
    /// Competitor marketing text
    raw_text: String,
    /// Target market / industry, trimmed
    niche: String,
    /// Requested platforms, caller order, no duplicates
    platforms: Vec<Platform>,
}

impl GenerationRequest {
    /// Create a request from its parts.
    pub fn new(
        raw_text: impl Into<String>,
        niche: impl Into<String>,
        platforms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            niche: niche.into(),
            platforms: platforms.into_iter().map(Into::into).collect(),
        }
    }

    /// Check required fields and resolve platform identifiers.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `rawText` or `niche` is blank, if
    /// `platforms` is empty, or if a platform is unknown or repeated.
    pub fn validate(self) -> ReelcraftResult<ValidatedRequest> {
        if self.raw_text.trim().is_empty() {
            return Err(ValidationError::new("rawText", "rawText must not be empty").into());
        }
        if self.niche.trim().is_empty() {
            return Err(ValidationError::new("niche", "niche must not be empty").into());
        }
        if self.platforms.is_empty() {
            return Err(
                ValidationError::new("platforms", "at least one platform is required").into(),
            );
        }

        let mut platforms = Vec::with_capacity(self.platforms.len());
        for id in &self.platforms {
            let platform: Platform = id.parse()?;
            if platforms.contains(&platform) {
                return Err(ValidationError::new(
                    "platforms",
                    format!("platform '{}' is listed more than once", platform),
                )
                .into());
            }
            platforms.push(platform);
        }

        Ok(ValidatedRequest {
            raw_text: self.raw_text,
            niche: self.niche.trim().to_string(),
            platforms,
        })
    }
}
