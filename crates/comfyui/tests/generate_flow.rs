//! Integration tests for the generation state machine against an
//! in-process mock ComfyUI server.
//!
//! The mock serves the three endpoints the client touches: `POST
//! /prompt`, `GET /history/{id}`, and `GET /view`. History responses are
//! scripted per test (pending, transient 500s, completed), so the full
//! `Built -> Submitted -> {Completed | TimedOut} -> {Downloaded | Failed}`
//! walk can be exercised without a real instance. Poll intervals are
//! scaled down to milliseconds to keep the suite fast.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::{Path as UrlPath, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use atelier_comfyui::api::{ComfyUiApi, ComfyUiApiError};
use atelier_comfyui::client::JobClient;
use atelier_comfyui::workflow::{build_workflow, WorkflowSettings};
use atelier_core::asset::AssetRequest;

// ---------------------------------------------------------------------------
// Mock ComfyUI server
// ---------------------------------------------------------------------------

/// Scripted behaviour for one `GET /history/{id}` call.
#[derive(Debug, Clone)]
enum HistoryStep {
    /// Respond with HTTP 500.
    Error,
    /// Respond with an empty history map (job not finished).
    Pending,
    /// Respond with the given completed history map.
    Complete(serde_json::Value),
}

struct MockComfyUi {
    /// Body returned by `POST /prompt`.
    submit_body: serde_json::Value,
    /// Scripted history responses; the last step repeats forever.
    history_steps: Mutex<Vec<HistoryStep>>,
    /// Whether `GET /view` succeeds.
    view_ok: bool,
    /// Bytes served by a successful `GET /view`.
    view_bytes: Vec<u8>,
    /// Last body received by `POST /prompt`.
    last_submit: Mutex<Option<serde_json::Value>>,
    /// Query parameters of the last `GET /view`.
    last_view_query: Mutex<Option<Vec<(String, String)>>>,
    history_calls: AtomicUsize,
    view_calls: AtomicUsize,
}

impl MockComfyUi {
    fn new(submit_body: serde_json::Value, history_steps: Vec<HistoryStep>) -> Arc<Self> {
        Arc::new(Self {
            submit_body,
            history_steps: Mutex::new(history_steps),
            view_ok: true,
            view_bytes: b"not-really-a-png".to_vec(),
            last_submit: Mutex::new(None),
            last_view_query: Mutex::new(None),
            history_calls: AtomicUsize::new(0),
            view_calls: AtomicUsize::new(0),
        })
    }

    fn with_failing_view(submit_body: serde_json::Value, history_steps: Vec<HistoryStep>) -> Arc<Self> {
        let mut mock = Self::new(submit_body, history_steps);
        Arc::get_mut(&mut mock).unwrap().view_ok = false;
        mock
    }
}

async fn handle_prompt(
    State(state): State<Arc<MockComfyUi>>,
    Json(body): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    *state.last_submit.lock().unwrap() = Some(body);
    Json(state.submit_body.clone())
}

async fn handle_history(
    State(state): State<Arc<MockComfyUi>>,
    UrlPath(_id): UrlPath<String>,
) -> Response {
    state.history_calls.fetch_add(1, Ordering::SeqCst);
    let step = {
        let mut steps = state.history_steps.lock().unwrap();
        if steps.len() > 1 {
            steps.remove(0)
        } else {
            steps[0].clone()
        }
    };
    match step {
        HistoryStep::Error => (StatusCode::INTERNAL_SERVER_ERROR, "mock failure").into_response(),
        HistoryStep::Pending => Json(json!({})).into_response(),
        HistoryStep::Complete(history) => Json(history).into_response(),
    }
}

async fn handle_view(
    State(state): State<Arc<MockComfyUi>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    state.view_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_view_query.lock().unwrap() = Some(params);
    if state.view_ok {
        state.view_bytes.clone().into_response()
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "mock view failure").into_response()
    }
}

/// Spawn the mock server on an ephemeral port and return its base URL.
async fn serve(state: Arc<MockComfyUi>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock local addr");
    let app = Router::new()
        .route("/prompt", post(handle_prompt))
        .route("/history/{id}", get(handle_history))
        .route("/view", get(handle_view))
        .with_state(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------

fn settings() -> WorkflowSettings {
    WorkflowSettings {
        checkpoint: "DreamShaper_8_pruned.safetensors".to_string(),
        filename_prefix: "puzzle_asset".to_string(),
    }
}

fn request() -> AssetRequest {
    AssetRequest::new("x.png", "p", "n")
}

/// Completed history for prompt `abc` with one image from node 9.
fn completed_history() -> serde_json::Value {
    json!({
        "abc": {
            "outputs": {
                "9": {
                    "images": [
                        {"filename": "out.png", "subfolder": "", "type": "output"}
                    ]
                }
            }
        }
    })
}

fn fast_client(base_url: String) -> JobClient {
    JobClient::new(ComfyUiApi::new(base_url))
        .with_polling(Duration::from_millis(20), Duration::from_secs(5))
}

// ---------------------------------------------------------------------------
// Test: end-to-end happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_downloads_exactly_one_file() {
    let mock = MockComfyUi::new(
        json!({"prompt_id": "abc"}),
        vec![HistoryStep::Pending, HistoryStep::Complete(completed_history())],
    );
    let client = fast_client(serve(mock.clone()).await);

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("x.png");

    assert!(client.generate(&settings(), &request(), &destination).await);

    assert_eq!(
        std::fs::read(&destination).unwrap(),
        b"not-really-a-png".to_vec()
    );
    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1, "exactly one file must be written");
    assert_eq!(mock.view_calls.load(Ordering::SeqCst), 1);

    // The download query must carry the output reference verbatim.
    let query = mock.last_view_query.lock().unwrap().clone().unwrap();
    assert!(query.contains(&("filename".to_string(), "out.png".to_string())));
    assert!(query.contains(&("subfolder".to_string(), String::new())));
    assert!(query.contains(&("type".to_string(), "output".to_string())));
}

#[tokio::test]
async fn submitted_body_carries_workflow_and_client_id() {
    let mock = MockComfyUi::new(
        json!({"prompt_id": "abc"}),
        vec![HistoryStep::Complete(completed_history())],
    );
    // Reuse an externally built reqwest client, as a caller pooling
    // connections across instances would.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let api = ComfyUiApi::with_client(http, serve(mock.clone()).await);
    let client = JobClient::new(api)
        .with_polling(Duration::from_millis(20), Duration::from_secs(5));

    let workflow = build_workflow(&settings(), &request());
    let handle = client.submit(&workflow).await.unwrap();
    assert_eq!(handle.prompt_id, "abc");

    let body = mock.last_submit.lock().unwrap().clone().unwrap();
    assert_eq!(body["client_id"], handle.client_id);
    assert!(!handle.client_id.is_empty());
    // All seven graph nodes must be present in the submitted prompt.
    for node in ["3", "4", "5", "6", "7", "8", "9"] {
        assert!(body["prompt"][node].is_object(), "missing node {node}");
    }
}

// ---------------------------------------------------------------------------
// Test: submission failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_without_prompt_id_is_an_error() {
    let mock = MockComfyUi::new(json!({}), vec![HistoryStep::Pending]);
    let client = fast_client(serve(mock).await);

    let workflow = build_workflow(&settings(), &request());
    let result = client.submit(&workflow).await;
    assert_matches!(result, Err(ComfyUiApiError::MissingPromptId));
}

#[tokio::test]
async fn generate_fails_fast_when_submission_is_rejected() {
    let mock = MockComfyUi::new(json!({}), vec![HistoryStep::Pending]);
    let client = fast_client(serve(mock.clone()).await);

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("x.png");

    assert!(!client.generate(&settings(), &request(), &destination).await);
    assert_eq!(mock.history_calls.load(Ordering::SeqCst), 0);
    assert_eq!(mock.view_calls.load(Ordering::SeqCst), 0);
    assert!(!destination.exists());
}

// ---------------------------------------------------------------------------
// Test: polling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn await_completion_survives_transient_errors() {
    let mock = MockComfyUi::new(
        json!({"prompt_id": "abc"}),
        vec![
            HistoryStep::Error,
            HistoryStep::Pending,
            HistoryStep::Error,
            HistoryStep::Complete(completed_history()),
        ],
    );
    let client = fast_client(serve(mock.clone()).await);

    assert!(client.await_completion("abc").await);
    assert_eq!(mock.history_calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn await_completion_times_out_under_error_noise() {
    let mock = MockComfyUi::new(json!({"prompt_id": "abc"}), vec![HistoryStep::Error]);
    let client = JobClient::new(ComfyUiApi::new(serve(mock.clone()).await))
        .with_polling(Duration::from_millis(10), Duration::from_millis(100));

    assert!(!client.await_completion("abc").await);
    assert!(mock.history_calls.load(Ordering::SeqCst) >= 1);
}

#[tokio::test]
async fn generate_times_out_after_a_single_poll_and_skips_download() {
    // Timeout shorter than one poll interval: the loop gets exactly one
    // history call before the deadline check stops it (the original
    // 1 s timeout vs 2 s interval scenario, scaled to milliseconds).
    let mock = MockComfyUi::new(json!({"prompt_id": "abc"}), vec![HistoryStep::Pending]);
    let client = JobClient::new(ComfyUiApi::new(serve(mock.clone()).await))
        .with_polling(Duration::from_millis(50), Duration::from_millis(25));

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("x.png");

    assert!(!client.generate(&settings(), &request(), &destination).await);
    assert_eq!(mock.history_calls.load(Ordering::SeqCst), 1);
    assert_eq!(mock.view_calls.load(Ordering::SeqCst), 0);
    assert!(!destination.exists());
}

// ---------------------------------------------------------------------------
// Test: output fetching
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_outputs_is_empty_when_job_unknown() {
    let mock = MockComfyUi::new(json!({"prompt_id": "abc"}), vec![HistoryStep::Pending]);
    let client = fast_client(serve(mock).await);

    let outputs = client.fetch_outputs("abc").await.unwrap();
    assert!(outputs.is_empty());
}

#[tokio::test]
async fn generate_fails_when_job_completes_with_no_outputs() {
    let empty = json!({"abc": {"outputs": {}}});
    let mock = MockComfyUi::new(
        json!({"prompt_id": "abc"}),
        vec![HistoryStep::Complete(empty)],
    );
    let client = fast_client(serve(mock.clone()).await);

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("x.png");

    assert!(!client.generate(&settings(), &request(), &destination).await);
    assert_eq!(mock.view_calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test: download
// ---------------------------------------------------------------------------

#[tokio::test]
async fn download_creates_missing_parent_directories() {
    let mock = MockComfyUi::new(
        json!({"prompt_id": "abc"}),
        vec![HistoryStep::Complete(completed_history())],
    );
    let client = fast_client(serve(mock).await);

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("room-backgrounds/deep/nested/room1.png");

    let output = client.fetch_outputs("abc").await.unwrap()[0].clone();
    assert!(client.download(&output, &destination).await);
    assert!(destination.exists());
}

#[tokio::test]
async fn download_returns_false_when_view_fails() {
    let mock = MockComfyUi::with_failing_view(
        json!({"prompt_id": "abc"}),
        vec![HistoryStep::Complete(completed_history())],
    );
    let client = fast_client(serve(mock).await);

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("x.png");

    let output = client.fetch_outputs("abc").await.unwrap()[0].clone();
    assert!(!client.download(&output, &destination).await);
    assert!(!destination.exists());
}
