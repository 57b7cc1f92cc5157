use serde::Serialize;

use crate::engine::types::Knobs;
use crate::platforms::sdxl::{
    BATCH_DEFAULT, BATCH_RANGE, CFG_DEFAULT, CFG_RANGE, RANDOM_SEED, STEPS_DEFAULT, STEPS_RANGE,
};
use crate::platforms::{clamp_f32, clamp_u32, PlatformConfig};

pub const CHECKPOINT_NAME: &str = "sd_xl_base_1.0.safetensors";

#[derive(Debug, Serialize)]
pub struct ComfyUiConfig {
    pub positive: String,
    pub negative: String,
    pub nodes_hint: NodeHints,
}

#[derive(Debug, Serialize)]
pub struct NodeHints {
    #[serde(rename = "KSampler")]
    pub k_sampler: KSamplerHint,
    #[serde(rename = "EmptyLatentImage")]
    pub empty_latent_image: EmptyLatentHint,
    #[serde(rename = "CheckpointLoaderSimple")]
    pub checkpoint_loader: CheckpointHint,
}

#[derive(Debug, Serialize)]
pub struct KSamplerHint {
    pub steps: u32,
    pub cfg: f32,
    pub sampler_name: &'static str,
    pub scheduler: &'static str,
    pub seed: i64,
}

#[derive(Debug, Serialize)]
pub struct EmptyLatentHint {
    pub width: u32,
    pub height: u32,
    pub batch_size: u32,
}

#[derive(Debug, Serialize)]
pub struct CheckpointHint {
    pub ckpt_name: &'static str,
}

pub fn build(prompt: &str, negative: &str, knobs: Knobs) -> PlatformConfig {
    let (width, height) = knobs.aspect.resolution();
    PlatformConfig::ComfyUi(ComfyUiConfig {
        positive: prompt.to_string(),
        negative: negative.to_string(),
        nodes_hint: NodeHints {
            k_sampler: KSamplerHint {
                steps: clamp_u32(knobs.steps, STEPS_DEFAULT, STEPS_RANGE.0, STEPS_RANGE.1),
                cfg: clamp_f32(knobs.cfg_scale, CFG_DEFAULT, CFG_RANGE.0, CFG_RANGE.1),
                sampler_name: knobs.sampler.comfy_name(),
                scheduler: knobs.sampler.comfy_scheduler(),
                seed: knobs.seed.unwrap_or(RANDOM_SEED),
            },
            empty_latent_image: EmptyLatentHint {
                width,
                height,
                batch_size: clamp_u32(knobs.batch_size, BATCH_DEFAULT, BATCH_RANGE.0, BATCH_RANGE.1),
            },
            checkpoint_loader: CheckpointHint {
                ckpt_name: CHECKPOINT_NAME,
            },
        },
    })
}
