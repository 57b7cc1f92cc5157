pub mod comfyui;
pub mod midjourney;
pub mod pika;
pub mod runway;
pub mod sdxl;

use serde::Serialize;

use crate::engine::types::Knobs;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PlatformConfig {
    Sdxl(sdxl::SdxlConfig),
    ComfyUi(comfyui::ComfyUiConfig),
    Midjourney(midjourney::MidjourneyConfig),
    Pika(pika::PikaConfig),
    Runway(runway::RunwayConfig),
}

#[derive(Debug, Serialize)]
pub struct Platforms {
    pub sdxl: PlatformConfig,
    pub comfy: PlatformConfig,
    pub midjourney: PlatformConfig,
    pub pika: PlatformConfig,
    pub runway: PlatformConfig,
}

impl Platforms {
    pub fn build(prompt: &str, negative: &str, knobs: Knobs) -> Self {
        Platforms {
            sdxl: sdxl::build(prompt, negative, knobs),
            comfy: comfyui::build(prompt, negative, knobs),
            midjourney: midjourney::build(prompt, negative, knobs),
            pika: pika::build(prompt, negative, knobs),
            runway: runway::build(prompt, negative, knobs),
        }
    }
}

pub(crate) fn clamp_u32(value: Option<u32>, default: u32, min: u32, max: u32) -> u32 {
    value.unwrap_or(default).clamp(min, max)
}

pub(crate) fn clamp_f32(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    value.unwrap_or(default).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_knobs_take_defaults_and_out_of_range_values_clamp() {
        assert_eq!(clamp_u32(None, 30, 10, 60), 30);
        assert_eq!(clamp_u32(Some(500), 30, 10, 60), 60);
        assert_eq!(clamp_u32(Some(1), 30, 10, 60), 10);
        assert_eq!(clamp_f32(Some(-3.0), 7.0, 1.0, 20.0), 1.0);
        assert_eq!(clamp_f32(None, 7.0, 1.0, 20.0), 7.0);
    }
}
