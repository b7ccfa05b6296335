//! Generation defaults and fixed sampling parameters.
//!
//! These mirror the parameters the workflow builder wires into every
//! submitted graph. Dimensions and step count can be overridden per
//! asset; the sampler configuration is fixed for the whole catalog.

// ---------------------------------------------------------------------------
// Canvas defaults
// ---------------------------------------------------------------------------

/// Default latent canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 512;
/// Default latent canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 512;
/// One image per submission; the batch loop handles repetition.
pub const BATCH_SIZE: u32 = 1;

// ---------------------------------------------------------------------------
// Sampler defaults
// ---------------------------------------------------------------------------

/// Default number of sampling steps.
pub const DEFAULT_STEPS: u32 = 25;
/// Classifier-free guidance scale.
pub const CFG_SCALE: f64 = 7.5;
/// Sampler algorithm name.
pub const SAMPLER_NAME: &str = "dpmpp_2m";
/// Noise scheduler name.
pub const SCHEDULER: &str = "karras";
/// Full denoise strength (text-to-image, no img2img blending).
pub const DENOISE: f64 = 1.0;

/// Exclusive upper bound for randomly drawn seeds.
///
/// Seeds are drawn uniformly from `[1, SEED_MAX)` when an asset request
/// does not pin one explicitly.
pub const SEED_MAX: u64 = 999_999_999;

// ---------------------------------------------------------------------------
// Polling defaults
// ---------------------------------------------------------------------------

/// Seconds between successive history polls.
pub const POLL_INTERVAL_SECS: u64 = 2;
/// Wall-clock budget for one job to complete, in seconds.
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 300;
