//! History record parsing and output-reference flattening.
//!
//! ComfyUI's `/history/{id}` endpoint returns a JSON map keyed by prompt
//! id. Once a job finishes, its entry carries an `outputs` map from node
//! id to `{"images": [...]}`. This module extracts those image entries
//! into typed [`OutputRef`]s.

use serde::Deserialize;

/// Storage class ComfyUI assigns to final outputs (vs intermediates).
pub const OUTPUT_KIND: &str = "output";

/// Pointer to a produced image still resident on the ComfyUI server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputRef {
    /// Remote file name.
    pub filename: String,
    /// Remote subfolder; empty when the server omits it.
    #[serde(default)]
    pub subfolder: String,
    /// Remote storage class; defaults to `"output"` when omitted.
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
}

fn default_kind() -> String {
    OUTPUT_KIND.to_string()
}

/// Whether the history map reports the given prompt id as finished.
pub fn is_complete(history: &serde_json::Value, prompt_id: &str) -> bool {
    history.get(prompt_id).is_some()
}

/// Flatten every output image for a prompt into [`OutputRef`]s.
///
/// Returns an empty list when the prompt id is absent from the history
/// map (job unfinished or unknown) — the caller treats "nothing
/// produced" as a per-request failure, not an error. Entries that do not
/// carry a `filename` are skipped.
pub fn flatten_outputs(history: &serde_json::Value, prompt_id: &str) -> Vec<OutputRef> {
    let Some(outputs) = history
        .get(prompt_id)
        .and_then(|record| record.get("outputs"))
        .and_then(|outputs| outputs.as_object())
    else {
        return Vec::new();
    };

    let mut refs = Vec::new();
    for node_output in outputs.values() {
        let Some(images) = node_output.get("images").and_then(|i| i.as_array()) else {
            continue;
        };
        for image in images {
            match serde_json::from_value::<OutputRef>(image.clone()) {
                Ok(output_ref) => refs.push(output_ref),
                Err(e) => {
                    tracing::warn!(prompt_id, error = %e, "Skipping malformed image entry");
                }
            }
        }
    }
    refs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
