//! The asset request record: one catalog entry, one image to generate.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One requested image asset.
///
/// Immutable once constructed; the workflow builder reads it, it is
/// never mutated by the generation pipeline. `filename` is relative to
/// the batch output root and may contain subdirectories
/// (e.g. `room-backgrounds/room1-attic.png`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetRequest {
    /// Destination filename, relative to the output root.
    pub filename: String,
    /// Positive prompt text.
    pub prompt: String,
    /// Negative prompt text.
    pub negative: String,
    /// Canvas width override (default 512).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Canvas height override (default 512).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Sampling step override (default 25).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Pinned seed. When `None`, a fresh seed is drawn per workflow build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AssetRequest {
    /// Create a request with default canvas size, steps, and a random seed.
    pub fn new(
        filename: impl Into<String>,
        prompt: impl Into<String>,
        negative: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            prompt: prompt.into(),
            negative: negative.into(),
            width: None,
            height: None,
            steps: None,
            seed: None,
        }
    }

    /// Override the latent canvas dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Override the sampling step count.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Pin the sampling seed. Omitting this re-randomizes on every build.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Validate an asset request before submission.
///
/// - `filename` and `prompt` must be non-empty.
/// - Dimension and step overrides, when present, must be non-zero.
pub fn validate_request(request: &AssetRequest) -> Result<(), CoreError> {
    if request.filename.trim().is_empty() {
        return Err(CoreError::Validation(
            "Asset filename must not be empty".to_string(),
        ));
    }
    if request.prompt.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Asset '{}' has an empty prompt",
            request.filename
        )));
    }
    for (name, value) in [
        ("width", request.width),
        ("height", request.height),
        ("steps", request.steps),
    ] {
        if value == Some(0) {
            return Err(CoreError::Validation(format!(
                "Asset '{}' has a zero {name}",
                request.filename
            )));
        }
    }
    Ok(())
}
