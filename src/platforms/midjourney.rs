use serde::Serialize;

use crate::engine::types::Knobs;
use crate::platforms::PlatformConfig;

pub const VERSION: u32 = 6;
pub const STYLIZE: u32 = 200;
pub const CHAOS: u32 = 5;

#[derive(Debug, Serialize)]
pub struct MidjourneyConfig {
    pub command: String,
    pub negative: String,
}

pub fn build(prompt: &str, negative: &str, knobs: Knobs) -> PlatformConfig {
    // Midjourney reads "8k" literally; spell the intent out instead.
    let compatible = prompt.replace("8k", "ultra high detail");
    let mut command = format!(
        "{compatible} --v {VERSION} --ar {} --stylize {STYLIZE} --chaos {CHAOS}",
        knobs.aspect.ratio()
    );
    if let Some(seed) = knobs.seed {
        command.push_str(&format!(" --seed {seed}"));
    }
    PlatformConfig::Midjourney(MidjourneyConfig {
        command,
        negative: negative.to_string(),
    })
}
