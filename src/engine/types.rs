use serde::{Deserialize, Serialize};

use crate::platforms::Platforms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Quality,
    Subject,
    Style,
    Lighting,
    Composition,
    Mood,
    ColorGrade,
    ExtraTags,
}

impl Category {
    // Fixed assembly order; never derived from data.
    pub const ORDER: [Category; 8] = [
        Category::Quality,
        Category::Subject,
        Category::Style,
        Category::Lighting,
        Category::Composition,
        Category::Mood,
        Category::ColorGrade,
        Category::ExtraTags,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Quality => "quality",
            Category::Subject => "subject",
            Category::Style => "style",
            Category::Lighting => "lighting",
            Category::Composition => "composition",
            Category::Mood => "mood",
            Category::ColorGrade => "color_grade",
            Category::ExtraTags => "extra_tags",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Segment {
    pub label: &'static str,
    pub phrases: Vec<String>,
}

impl Segment {
    pub fn new(label: &'static str, phrases: Vec<String>) -> Self {
        Segment { label, phrases }
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Portrait,
    Landscape,
    Widescreen,
}

impl AspectRatio {
    pub fn from_input(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return AspectRatio::Landscape;
        };
        match value.trim().to_lowercase().as_str() {
            "square" | "1:1" => AspectRatio::Square,
            "portrait" | "2:3" | "9:16" => AspectRatio::Portrait,
            "widescreen" | "16:9" => AspectRatio::Widescreen,
            _ => AspectRatio::Landscape,
        }
    }

    pub const fn resolution(self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1024, 1024),
            AspectRatio::Portrait => (832, 1216),
            AspectRatio::Landscape => (1216, 832),
            AspectRatio::Widescreen => (1344, 768),
        }
    }

    pub const fn ratio(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "2:3",
            AspectRatio::Landscape => "3:2",
            AspectRatio::Widescreen => "16:9",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampler {
    DpmppTwoMKarras,
    DpmppSdeKarras,
    EulerAncestral,
    Euler,
    UniPc,
    Ddim,
}

impl Sampler {
    pub fn from_input(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Sampler::DpmppTwoMKarras;
        };
        match value.trim().to_lowercase().as_str() {
            "dpm++ 2m karras" | "dpmpp_2m" | "dpmpp_2m_karras" => Sampler::DpmppTwoMKarras,
            "dpm++ sde karras" | "dpmpp_sde" | "dpmpp_sde_karras" => Sampler::DpmppSdeKarras,
            "euler a" | "euler_ancestral" => Sampler::EulerAncestral,
            "euler" => Sampler::Euler,
            "unipc" | "uni_pc" => Sampler::UniPc,
            "ddim" => Sampler::Ddim,
            _ => Sampler::DpmppTwoMKarras,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Sampler::DpmppTwoMKarras => "DPM++ 2M Karras",
            Sampler::DpmppSdeKarras => "DPM++ SDE Karras",
            Sampler::EulerAncestral => "Euler a",
            Sampler::Euler => "Euler",
            Sampler::UniPc => "UniPC",
            Sampler::Ddim => "DDIM",
        }
    }

    pub const fn comfy_name(self) -> &'static str {
        match self {
            Sampler::DpmppTwoMKarras => "dpmpp_2m",
            Sampler::DpmppSdeKarras => "dpmpp_sde",
            Sampler::EulerAncestral => "euler_ancestral",
            Sampler::Euler => "euler",
            Sampler::UniPc => "uni_pc",
            Sampler::Ddim => "ddim",
        }
    }

    pub const fn comfy_scheduler(self) -> &'static str {
        match self {
            Sampler::DpmppTwoMKarras | Sampler::DpmppSdeKarras => "karras",
            _ => "normal",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnhancementRequest {
    #[serde(default)]
    pub idea: String,
    #[serde(default)]
    pub negative: Option<String>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub lighting: Option<String>,
    #[serde(default)]
    pub color_grade: Option<String>,
    #[serde(default)]
    pub extra_tags: Option<String>,
    #[serde(default)]
    pub steps: Option<u32>,
    #[serde(default)]
    pub cfg_scale: Option<f32>,
    #[serde(default)]
    pub sampler: Option<String>,
    #[serde(default)]
    pub seed: Option<i64>,
    #[serde(default)]
    pub batch_size: Option<u32>,
    #[serde(default)]
    pub motion_strength: Option<f32>,
    #[serde(default)]
    pub duration_secs: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
pub struct Knobs {
    pub aspect: AspectRatio,
    pub sampler: Sampler,
    pub steps: Option<u32>,
    pub cfg_scale: Option<f32>,
    pub seed: Option<i64>,
    pub batch_size: Option<u32>,
    pub motion_strength: Option<f32>,
    pub duration_secs: Option<u32>,
}

impl Knobs {
    pub fn from_request(request: &EnhancementRequest) -> Self {
        Knobs {
            aspect: AspectRatio::from_input(request.aspect_ratio.as_deref()),
            sampler: Sampler::from_input(request.sampler.as_deref()),
            steps: request.steps,
            cfg_scale: request.cfg_scale,
            seed: request.seed,
            batch_size: request.batch_size,
            motion_strength: request.motion_strength,
            duration_secs: request.duration_secs,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub aspect_ratio: &'static str,
    pub sampler: &'static str,
    pub softened: bool,
}

#[derive(Debug, Serialize)]
pub struct Hints {
    pub faces: &'static str,
    pub motion: &'static str,
    pub busy: &'static str,
}

impl Default for Hints {
    fn default() -> Self {
        Hints {
            faces: "For better faces: add 'portrait, detailed face, sharp focus' and keep 'bad anatomy' in the negative",
            motion: "For video: use motion cues like 'gentle camera movement' but avoid 'warping, morphing'",
            busy: "If output is too busy: reduce adjectives and focus on 1-2 key elements",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EnhancementResponse {
    pub prompt: String,
    pub negative: String,
    pub platforms: Platforms,
    pub meta: ResponseMeta,
    pub hints: Hints,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_defaults_to_landscape_for_unknown_values() {
        assert_eq!(AspectRatio::from_input(None), AspectRatio::Landscape);
        assert_eq!(AspectRatio::from_input(Some("panoramic")), AspectRatio::Landscape);
        assert_eq!(AspectRatio::from_input(Some("Widescreen")), AspectRatio::Widescreen);
        assert_eq!(AspectRatio::from_input(Some("16:9")), AspectRatio::Widescreen);
    }

    #[test]
    fn widescreen_resolves_to_sdxl_wide_resolution() {
        assert_eq!(AspectRatio::Widescreen.resolution(), (1344, 768));
        assert_eq!(AspectRatio::Square.resolution(), (1024, 1024));
    }

    #[test]
    fn unknown_sampler_falls_back_to_default() {
        assert_eq!(Sampler::from_input(Some("bogus")), Sampler::DpmppTwoMKarras);
        assert_eq!(Sampler::from_input(None), Sampler::DpmppTwoMKarras);
        assert_eq!(Sampler::from_input(Some("Euler A")), Sampler::EulerAncestral);
    }

    #[test]
    fn sampler_maps_to_comfy_naming() {
        assert_eq!(Sampler::DpmppTwoMKarras.comfy_name(), "dpmpp_2m");
        assert_eq!(Sampler::DpmppTwoMKarras.comfy_scheduler(), "karras");
        assert_eq!(Sampler::Euler.comfy_scheduler(), "normal");
    }

    #[test]
    fn request_deserializes_with_only_an_idea() {
        let request: EnhancementRequest =
            serde_json::from_str(r#"{"idea": "a quiet harbor"}"#).expect("valid request");
        assert_eq!(request.idea, "a quiet harbor");
        assert!(request.negative.is_none());
        assert!(request.steps.is_none());
    }
}
