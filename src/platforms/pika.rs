use serde::Serialize;

use crate::engine::types::Knobs;
use crate::platforms::{clamp_f32, clamp_u32, PlatformConfig};

pub const MOTION_DEFAULT: f32 = 2.0;
pub const MOTION_RANGE: (f32, f32) = (0.0, 4.0);
pub const DURATION_DEFAULT: u32 = 6;
pub const DURATION_RANGE: (u32, u32) = (1, 10);

#[derive(Debug, Serialize)]
pub struct PikaConfig {
    pub prompt: String,
    pub avoid: String,
    pub motion_strength: f32,
    pub duration_secs: u32,
}

pub fn build(prompt: &str, negative: &str, knobs: Knobs) -> PlatformConfig {
    PlatformConfig::Pika(PikaConfig {
        prompt: format!("{prompt}, smooth motion, temporal consistency"),
        avoid: negative.to_string(),
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
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{AspectRatio, Sampler};

    #[test]
    fn motion_and_duration_clamp_to_pika_ranges() {
        let knobs = Knobs {
            aspect: AspectRatio::Landscape,
            sampler: Sampler::from_input(None),
            steps: None,
            cfg_scale: None,
            seed: None,
            batch_size: None,
            motion_strength: Some(9.5),
            duration_secs: Some(20),
        };
        let PlatformConfig::Pika(config) = build("a quiet harbor", "lowres", knobs) else {
            panic!("expected pika config");
        };
        assert_eq!(config.motion_strength, MOTION_RANGE.1);
        assert_eq!(config.duration_secs, DURATION_RANGE.1);
        assert!(config.prompt.ends_with("smooth motion, temporal consistency"));
        assert_eq!(config.avoid, "lowres");
    }
}
