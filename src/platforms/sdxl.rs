use serde::Serialize;

use crate::engine::types::Knobs;
use crate::platforms::{clamp_f32, clamp_u32, PlatformConfig};

pub const STEPS_DEFAULT: u32 = 30;
pub const STEPS_RANGE: (u32, u32) = (10, 60);
pub const CFG_DEFAULT: f32 = 7.0;
pub const CFG_RANGE: (f32, f32) = (1.0, 20.0);
pub const BATCH_DEFAULT: u32 = 1;
pub const BATCH_RANGE: (u32, u32) = (1, 4);
// Seed marker understood by SDXL frontends as "pick a random seed".
pub const RANDOM_SEED: i64 = -1;

#[derive(Debug, Serialize)]
pub struct SdxlConfig {
    pub prompt: String,
    pub negative: String,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub cfg_scale: f32,
    pub sampler: &'static str,
    pub seed: i64,
    pub batch_size: u32,
}

pub fn build(prompt: &str, negative: &str, knobs: Knobs) -> PlatformConfig {
    let (width, height) = knobs.aspect.resolution();
    PlatformConfig::Sdxl(SdxlConfig {
        prompt: prompt.to_string(),
        negative: negative.to_string(),
        width,
        height,
        steps: clamp_u32(knobs.steps, STEPS_DEFAULT, STEPS_RANGE.0, STEPS_RANGE.1),
        cfg_scale: clamp_f32(knobs.cfg_scale, CFG_DEFAULT, CFG_RANGE.0, CFG_RANGE.1),
        sampler: knobs.sampler.as_str(),
        seed: knobs.seed.unwrap_or(RANDOM_SEED),
        batch_size: clamp_u32(knobs.batch_size, BATCH_DEFAULT, BATCH_RANGE.0, BATCH_RANGE.1),
    })
}
