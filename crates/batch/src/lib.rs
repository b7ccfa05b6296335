//! Sequential batch runner.
//!
//! Walks a catalog one asset at a time: validate, resolve the
//! destination path, hand the request to the [`JobClient`], and record
//! the boolean outcome. A failed asset never aborts the batch; the
//! summary carries the counts and the process exit code reflects them.

use std::path::Path;
use std::time::Duration;

use atelier_catalog::Catalog;
use atelier_comfyui::client::JobClient;
use atelier_comfyui::workflow::WorkflowSettings;
use atelier_core::asset::validate_request;
use atelier_core::paths::resolve_destination;
use atelier_core::summary::BatchSummary;

/// Longest prompt slice shown in progress logs.
const PROMPT_PREVIEW_CHARS: usize = 80;

/// Truncate a prompt for log output, respecting char boundaries.
pub fn prompt_preview(prompt: &str) -> &str {
    match prompt.char_indices().nth(PROMPT_PREVIEW_CHARS) {
        Some((idx, _)) => &prompt[..idx],
        None => prompt,
    }
}

/// Generate every asset in one catalog, sequentially.
///
/// `pause` is the courtesy delay between successive assets (not applied
/// after the last one). Validation or path-resolution failures count as
/// failed assets and are logged, same as generation failures.
pub async fn run_catalog(
    client: &JobClient,
    catalog: &Catalog,
    settings: &WorkflowSettings,
    output_root: &Path,
    pause: Duration,
) -> BatchSummary {
    let total = catalog.assets.len();
    let mut summary = BatchSummary::default();

    for (index, asset) in catalog.assets.iter().enumerate() {
        tracing::info!(
            catalog = catalog.name,
            progress = %format!("{}/{total}", index + 1),
            filename = %asset.filename,
            prompt = prompt_preview(&asset.prompt),
            "Generating asset"
        );

        let ok = match prepare(asset, output_root) {
            Ok(destination) => client.generate(settings, asset, &destination).await,
            Err(e) => {
                tracing::error!(filename = %asset.filename, error = %e, "Skipping invalid asset");
                false
            }
        };
        summary.record(ok);

        if index + 1 < total && !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }

    summary
}

fn prepare(
    asset: &atelier_core::asset::AssetRequest,
    output_root: &Path,
) -> Result<std::path::PathBuf, atelier_core::error::CoreError> {
    validate_request(asset)?;
    resolve_destination(output_root, &asset.filename)
}

/// Run several catalogs back to back, merging their summaries.
pub async fn run_catalogs(
    client: &JobClient,
    catalogs: &[Catalog],
    checkpoint: &str,
    output_root: &Path,
    pause: Duration,
) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for catalog in catalogs {
        let settings = WorkflowSettings {
            checkpoint: checkpoint.to_string(),
            filename_prefix: catalog.filename_prefix.to_string(),
        };
        let result = run_catalog(client, catalog, &settings, output_root, pause).await;
        tracing::info!(
            catalog = catalog.name,
            successful = result.successful,
            failed = result.failed,
            "Catalog complete"
        );
        summary.merge(result);
    }
    summary
}
