//! ComfyUI REST client library.
//!
//! Provides a typed workflow-graph builder, HTTP API wrappers for the
//! `/prompt`, `/history`, and `/view` endpoints, history-output
//! flattening, and the per-request generation state machine used by the
//! asset batch.

pub mod api;
pub mod client;
pub mod history;
pub mod workflow;
