//! Typed ComfyUI workflow graph builder.
//!
//! Every submission uses the same fixed seven-node text-to-image graph:
//! checkpoint loader, positive/negative CLIP text encoders, empty latent
//! canvas, KSampler, VAE decode, and a SaveImage sink. Node inputs that
//! consume another node's output are expressed as
//! `(node id, output index)` pairs, which serialize to the two-element
//! JSON arrays ComfyUI expects.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use atelier_core::asset::AssetRequest;
use atelier_core::generation::{
    BATCH_SIZE, CFG_SCALE, DEFAULT_HEIGHT, DEFAULT_STEPS, DEFAULT_WIDTH, DENOISE, SAMPLER_NAME,
    SCHEDULER, SEED_MAX,
};

// ---------------------------------------------------------------------------
// Node identifiers
// ---------------------------------------------------------------------------

/// KSampler node id.
pub const NODE_SAMPLER: &str = "3";
/// CheckpointLoaderSimple node id.
pub const NODE_CHECKPOINT: &str = "4";
/// EmptyLatentImage node id.
pub const NODE_LATENT: &str = "5";
/// Positive CLIPTextEncode node id.
pub const NODE_POSITIVE: &str = "6";
/// Negative CLIPTextEncode node id.
pub const NODE_NEGATIVE: &str = "7";
/// VAEDecode node id.
pub const NODE_DECODE: &str = "8";
/// SaveImage node id.
pub const NODE_SAVE: &str = "9";

// ---------------------------------------------------------------------------
// Graph types
// ---------------------------------------------------------------------------

/// Reference to another node's output slot.
///
/// Serializes as `["<node id>", <output index>]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeRef(pub &'static str, pub u32);

/// Inputs for `CheckpointLoaderSimple`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckpointLoaderInputs {
    pub ckpt_name: String,
}

/// Inputs for `CLIPTextEncode`.
#[derive(Debug, Clone, Serialize)]
pub struct ClipTextEncodeInputs {
    pub text: String,
    pub clip: NodeRef,
}

/// Inputs for `EmptyLatentImage`.
#[derive(Debug, Clone, Serialize)]
pub struct EmptyLatentInputs {
    pub width: u32,
    pub height: u32,
    pub batch_size: u32,
}

/// Inputs for `KSampler`.
#[derive(Debug, Clone, Serialize)]
pub struct KSamplerInputs {
    pub seed: u64,
    pub steps: u32,
    pub cfg: f64,
    pub sampler_name: &'static str,
    pub scheduler: &'static str,
    pub denoise: f64,
    pub model: NodeRef,
    pub positive: NodeRef,
    pub negative: NodeRef,
    pub latent_image: NodeRef,
}

/// Inputs for `VAEDecode`.
#[derive(Debug, Clone, Serialize)]
pub struct VaeDecodeInputs {
    pub samples: NodeRef,
    pub vae: NodeRef,
}

/// Inputs for `SaveImage`.
#[derive(Debug, Clone, Serialize)]
pub struct SaveImageInputs {
    pub filename_prefix: String,
    pub images: NodeRef,
}

/// One typed node in the workflow graph.
///
/// Serializes via the `class_type` tag with `inputs` content, yielding
/// the `{"class_type": "...", "inputs": {...}}` shape ComfyUI consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "class_type", content = "inputs")]
pub enum WorkflowNode {
    #[serde(rename = "CheckpointLoaderSimple")]
    CheckpointLoader(CheckpointLoaderInputs),
    #[serde(rename = "CLIPTextEncode")]
    ClipTextEncode(ClipTextEncodeInputs),
    #[serde(rename = "EmptyLatentImage")]
    EmptyLatent(EmptyLatentInputs),
    #[serde(rename = "KSampler")]
    Sampler(KSamplerInputs),
    #[serde(rename = "VAEDecode")]
    VaeDecode(VaeDecodeInputs),
    #[serde(rename = "SaveImage")]
    SaveImage(SaveImageInputs),
}

/// A complete workflow graph keyed by node id.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Workflow {
    nodes: BTreeMap<&'static str, WorkflowNode>,
}

impl Workflow {
    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&WorkflowNode> {
        self.nodes.get(id)
    }

    /// The seed wired into the KSampler node.
    pub fn seed(&self) -> u64 {
        match &self.nodes[NODE_SAMPLER] {
            WorkflowNode::Sampler(inputs) => inputs.seed,
            _ => unreachable!("sampler node id always holds a KSampler"),
        }
    }

}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Fixed per-catalog workflow parameters.
#[derive(Debug, Clone)]
pub struct WorkflowSettings {
    /// Checkpoint model file loaded by the graph.
    pub checkpoint: String,
    /// Server-side filename prefix for the SaveImage sink.
    pub filename_prefix: String,
}

/// Build the text-to-image workflow graph for one asset request.
///
/// Deterministic apart from the seed: when the request does not pin one,
/// a fresh seed is drawn uniformly from `[1, SEED_MAX)` on every call.
pub fn build_workflow(settings: &WorkflowSettings, request: &AssetRequest) -> Workflow {
    let seed = request
        .seed
        .unwrap_or_else(|| rand::rng().random_range(1..SEED_MAX));

    let mut nodes = BTreeMap::new();
    nodes.insert(
        NODE_SAMPLER,
        WorkflowNode::Sampler(KSamplerInputs {
            seed,
            steps: request.steps.unwrap_or(DEFAULT_STEPS),
            cfg: CFG_SCALE,
            sampler_name: SAMPLER_NAME,
            scheduler: SCHEDULER,
            denoise: DENOISE,
            model: NodeRef(NODE_CHECKPOINT, 0),
            positive: NodeRef(NODE_POSITIVE, 0),
            negative: NodeRef(NODE_NEGATIVE, 0),
            latent_image: NodeRef(NODE_LATENT, 0),
        }),
    );
    nodes.insert(
        NODE_CHECKPOINT,
        WorkflowNode::CheckpointLoader(CheckpointLoaderInputs {
            ckpt_name: settings.checkpoint.clone(),
        }),
    );
    nodes.insert(
        NODE_LATENT,
        WorkflowNode::EmptyLatent(EmptyLatentInputs {
            width: request.width.unwrap_or(DEFAULT_WIDTH),
            height: request.height.unwrap_or(DEFAULT_HEIGHT),
            batch_size: BATCH_SIZE,
        }),
    );
    nodes.insert(
        NODE_POSITIVE,
        WorkflowNode::ClipTextEncode(ClipTextEncodeInputs {
            text: request.prompt.clone(),
            clip: NodeRef(NODE_CHECKPOINT, 1),
        }),
    );
    nodes.insert(
        NODE_NEGATIVE,
        WorkflowNode::ClipTextEncode(ClipTextEncodeInputs {
            text: request.negative.clone(),
            clip: NodeRef(NODE_CHECKPOINT, 1),
        }),
    );
    nodes.insert(
        NODE_DECODE,
        WorkflowNode::VaeDecode(VaeDecodeInputs {
            samples: NodeRef(NODE_SAMPLER, 0),
            vae: NodeRef(NODE_CHECKPOINT, 2),
        }),
    );
    nodes.insert(
        NODE_SAVE,
        WorkflowNode::SaveImage(SaveImageInputs {
            filename_prefix: settings.filename_prefix.clone(),
            images: NodeRef(NODE_DECODE, 0),
        }),
    );

    Workflow { nodes }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
