//! Per-request generation orchestration.
//!
//! [`JobClient`] turns one [`AssetRequest`] into one downloaded file,
//! end to end: build the workflow graph, submit it, poll history until
//! the job appears, flatten its output references, and download the
//! first produced image. Each request walks the state machine
//! `Built -> Submitted -> {Completed | TimedOut} -> {Downloaded | Failed}`
//! with no retries; every failure is terminal for that request and
//! reported to the caller as a boolean so the batch can keep going.

use std::path::Path;
use std::time::Duration;

use atelier_core::asset::AssetRequest;
use atelier_core::generation::{DEFAULT_POLL_TIMEOUT_SECS, POLL_INTERVAL_SECS};

use crate::api::{ComfyUiApi, ComfyUiApiError};
use crate::history::{self, OutputRef};
use crate::workflow::{build_workflow, Workflow, WorkflowSettings};

/// Handle for one submitted job.
///
/// Valid only for the single submission that created it; never reused
/// across requests.
#[derive(Debug, Clone)]
pub struct JobHandle {
    /// Server-assigned prompt id.
    pub prompt_id: String,
    /// Locally generated client id echoed to the server for correlation.
    pub client_id: String,
}

/// Errors while fetching or writing downloaded image bytes.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// The `/view` request failed.
    #[error(transparent)]
    Api(#[from] ComfyUiApiError),

    /// Writing the destination file (or its parent directories) failed.
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Sequential job client for a single ComfyUI instance.
pub struct JobClient {
    api: ComfyUiApi,
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl JobClient {
    /// Create a client with the default 2 s poll interval and 300 s timeout.
    pub fn new(api: ComfyUiApi) -> Self {
        Self {
            api,
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
            poll_timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
        }
    }

    /// Override the poll interval and timeout (tests use millisecond scales).
    pub fn with_polling(mut self, interval: Duration, timeout: Duration) -> Self {
        self.poll_interval = interval;
        self.poll_timeout = timeout;
        self
    }

    /// The underlying REST API client.
    pub fn api(&self) -> &ComfyUiApi {
        &self.api
    }

    /// Submit a workflow, pairing it with a fresh client id.
    pub async fn submit(&self, workflow: &Workflow) -> Result<JobHandle, ComfyUiApiError> {
        let client_id = uuid::Uuid::new_v4().to_string();
        let prompt_id = self.api.submit_workflow(workflow, &client_id).await?;
        Ok(JobHandle {
            prompt_id,
            client_id,
        })
    }

    /// Poll history until the prompt id appears or the timeout elapses.
    ///
    /// Returns whether the job completed in time. Timeout is an expected,
    /// non-fatal outcome. Transient poll errors (network failure, non-2xx,
    /// malformed body) are logged and swallowed; they never shorten the
    /// wall-clock deadline or abort the poll loop.
    pub async fn await_completion(&self, prompt_id: &str) -> bool {
        let start = std::time::Instant::now();

        while start.elapsed() < self.poll_timeout {
            match self.api.history(prompt_id).await {
                Ok(history) => {
                    if history::is_complete(&history, prompt_id) {
                        return true;
                    }
                }
                Err(e) => {
                    tracing::warn!(prompt_id, error = %e, "Error checking job status");
                }
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        false
    }

    /// Re-query history and flatten the job's output references.
    ///
    /// Empty when the prompt id is absent (nothing produced yet) — not an
    /// error; the caller decides what an empty list means.
    pub async fn fetch_outputs(&self, prompt_id: &str) -> Result<Vec<OutputRef>, ComfyUiApiError> {
        let history = self.api.history(prompt_id).await?;
        Ok(history::flatten_outputs(&history, prompt_id))
    }

    /// Download one output image to `destination`, creating missing
    /// parent directories first.
    ///
    /// Returns false (logging the cause) on any network or I/O failure
    /// instead of propagating, so the caller's success/failure counter
    /// can simply skip the asset.
    pub async fn download(&self, output: &OutputRef, destination: &Path) -> bool {
        match self.try_download(output, destination).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    filename = %output.filename,
                    destination = %destination.display(),
                    error = %e,
                    "Error downloading image"
                );
                false
            }
        }
    }

    async fn try_download(
        &self,
        output: &OutputRef,
        destination: &Path,
    ) -> Result<(), DownloadError> {
        let bytes = self
            .api
            .view(&output.filename, &output.subfolder, &output.kind)
            .await?;
        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(destination, bytes).await?;
        Ok(())
    }

    /// Resolve one asset request end to end.
    ///
    /// Runs build -> submit -> await -> fetch -> download in strict
    /// sequence, short-circuiting at the first failing step with a log
    /// line naming the reason. Only the first produced output is
    /// downloaded even when the job yields several.
    pub async fn generate(
        &self,
        settings: &WorkflowSettings,
        request: &AssetRequest,
        destination: &Path,
    ) -> bool {
        let workflow = build_workflow(settings, request);

        let handle = match self.submit(&workflow).await {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!(filename = %request.filename, error = %e, "Error queueing workflow");
                return false;
            }
        };
        tracing::info!(
            filename = %request.filename,
            prompt_id = %handle.prompt_id,
            client_id = %handle.client_id,
            "Workflow queued"
        );

        if !self.await_completion(&handle.prompt_id).await {
            tracing::error!(
                filename = %request.filename,
                prompt_id = %handle.prompt_id,
                "Timeout waiting for completion"
            );
            return false;
        }

        let outputs = match self.fetch_outputs(&handle.prompt_id).await {
            Ok(outputs) => outputs,
            Err(e) => {
                tracing::error!(prompt_id = %handle.prompt_id, error = %e, "Error fetching outputs");
                return false;
            }
        };
        let Some(first) = outputs.first() else {
            tracing::error!(prompt_id = %handle.prompt_id, "No images generated");
            return false;
        };

        if self.download(first, destination).await {
            tracing::info!(destination = %destination.display(), "Image saved");
            true
        } else {
            tracing::error!(prompt_id = %handle.prompt_id, "Failed to download image");
            false
        }
    }
}
