use serde::Serialize;

use crate::engine::types::Knobs;
use crate::platforms::{clamp_f32, clamp_u32, PlatformConfig};

pub const MOTION_DEFAULT: f32 = 5.0;
pub const MOTION_RANGE: (f32, f32) = (1.0, 10.0);
pub const DURATION_DEFAULT: u32 = 5;
pub const DURATION_RANGE: (u32, u32) = (2, 16);
pub const CAMERA_MOTION: &str = "push_in";

#[derive(Debug, Serialize)]
pub struct RunwayConfig {
    pub text_prompt: String,
    pub negative_prompt: String,
    pub motion_strength: f32,
    pub duration_secs: u32,
    pub camera_motion: &'static str,
}

pub fn build(prompt: &str, negative: &str, knobs: Knobs) -> PlatformConfig {
    PlatformConfig::Runway(RunwayConfig {
        text_prompt: prompt.to_string(),
        negative_prompt: negative.to_string(),
        motion_strength: clamp_f32(
            knobs.motion_strength,
            MOTION_DEFAULT,
            MOTION_RANGE.0,
            MOTION_RANGE.1,
        ),
        duration_secs: clamp_u32(
            knobs.duration_secs,
            DURATION_DEFAULT,
            DURATION_RANGE.0,
            DURATION_RANGE.1,
        ),
        camera_motion: CAMERA_MOTION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{AspectRatio, Sampler};

    #[test]
    fn one_duration_knob_clamps_independently_per_platform() {
        let knobs = Knobs {
            aspect: AspectRatio::Landscape,
            sampler: Sampler::from_input(None),
            steps: None,
            cfg_scale: None,
            seed: None,
            batch_size: None,
            motion_strength: Some(0.2),
            duration_secs: Some(14),
        };
        let PlatformConfig::Runway(config) = build("a quiet harbor", "lowres", knobs) else {
            panic!("expected runway config");
        };
        // 14 s fits Runway's window but would clamp to 10 on Pika
        assert_eq!(config.duration_secs, 14);
        assert_eq!(config.motion_strength, MOTION_RANGE.0);
        assert_eq!(config.camera_motion, "push_in");
    }

    #[test]
    fn defaults_apply_when_no_motion_knobs_are_supplied() {
        let knobs = Knobs {
            aspect: AspectRatio::Landscape,
            sampler: Sampler::from_input(None),
            steps: None,
            cfg_scale: None,
            seed: None,
            batch_size: None,
            motion_strength: None,
            duration_secs: None,
        };
        let PlatformConfig::Runway(config) = build("p", "n", knobs) else {
            panic!("expected runway config");
        };
        assert_eq!(config.motion_strength, MOTION_DEFAULT);
        assert_eq!(config.duration_secs, DURATION_DEFAULT);
    }
}
