use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_batch::run_catalogs;
use atelier_catalog::{select, SELECT_ALL};
use atelier_comfyui::api::ComfyUiApi;
use atelier_comfyui::client::JobClient;
use atelier_core::config::BatchConfig;
use atelier_core::generation::POLL_INTERVAL_SECS;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier_batch=info,atelier_comfyui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let selection = std::env::args().nth(1).unwrap_or_else(|| SELECT_ALL.into());
    let catalogs = match select(&selection) {
        Ok(catalogs) => catalogs,
        Err(e) => {
            tracing::error!(error = %e, "Invalid catalog selection");
            return ExitCode::from(2);
        }
    };

    let config = BatchConfig::from_env();
    let total: usize = catalogs.iter().map(|c| c.assets.len()).sum();
    tracing::info!(
        comfyui_url = %config.comfyui_url,
        output_dir = %config.output_dir.display(),
        checkpoint = %config.checkpoint,
        selection = %selection,
        total_assets = total,
        "Starting asset generation batch"
    );

    let api = ComfyUiApi::new(config.comfyui_url.clone());
    let client = JobClient::new(api).with_polling(
        Duration::from_secs(POLL_INTERVAL_SECS),
        Duration::from_secs(config.poll_timeout_secs),
    );

    let summary = run_catalogs(
        &client,
        &catalogs,
        &config.checkpoint,
        &config.output_dir,
        Duration::from_secs(config.pause_between_assets_secs),
    )
    .await;

    tracing::info!(
        successful = summary.successful,
        failed = summary.failed,
        total = summary.total(),
        "Generation complete"
    );

    if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
