//! Batch configuration loaded from environment variables.

use std::path::PathBuf;

use crate::generation::DEFAULT_POLL_TIMEOUT_SECS;

/// Batch configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local ComfyUI instance.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// ComfyUI base HTTP URL (default: `http://localhost:8188`).
    pub comfyui_url: String,
    /// Root directory downloaded assets are written under.
    pub output_dir: PathBuf,
    /// Checkpoint model file loaded by every workflow.
    pub checkpoint: String,
    /// Wall-clock budget per job before it counts as timed out.
    pub poll_timeout_secs: u64,
    /// Courtesy pause between successive assets, in seconds. May be zero.
    pub pause_between_assets_secs: u64,
}

impl BatchConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                             |
    /// |----------------------------|-------------------------------------|
    /// | `COMFYUI_URL`              | `http://localhost:8188`             |
    /// | `OUTPUT_DIR`               | `generated-assets`                  |
    /// | `CHECKPOINT`               | `DreamShaper_8_pruned.safetensors`  |
    /// | `POLL_TIMEOUT_SECS`        | `300`                               |
    /// | `PAUSE_BETWEEN_ASSETS_SECS`| `1`                                 |
    pub fn from_env() -> Self {
        let comfyui_url =
            std::env::var("COMFYUI_URL").unwrap_or_else(|_| "http://localhost:8188".into());

        let output_dir: PathBuf = std::env::var("OUTPUT_DIR")
            .unwrap_or_else(|_| "generated-assets".into())
            .into();

        let checkpoint = std::env::var("CHECKPOINT")
            .unwrap_or_else(|_| "DreamShaper_8_pruned.safetensors".into());

        let poll_timeout_secs: u64 = std::env::var("POLL_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_POLL_TIMEOUT_SECS.to_string())
            .parse()
            .expect("POLL_TIMEOUT_SECS must be a valid u64");

        let pause_between_assets_secs: u64 = std::env::var("PAUSE_BETWEEN_ASSETS_SECS")
            .unwrap_or_else(|_| "1".into())
            .parse()
            .expect("PAUSE_BETWEEN_ASSETS_SECS must be a valid u64");

        Self {
            comfyui_url,
            output_dir,
            checkpoint,
            poll_timeout_secs,
            pause_between_assets_secs,
        }
    }
}
