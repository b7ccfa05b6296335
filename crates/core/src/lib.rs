//! Domain types and pure logic for the asset generation batch.
//!
//! Holds the [`asset::AssetRequest`] record, generation defaults,
//! destination-path resolution, environment configuration, and batch
//! outcome accounting. No network or filesystem I/O lives here.

pub mod asset;
pub mod config;
pub mod error;
pub mod generation;
pub mod paths;
pub mod summary;
