use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::Deserialize;
use tracing::info;

use crate::utils::text::phrase_matcher;

pub const POSITIVE_CATEGORIES: &[&str] = &[
    "quality",
    "art_styles",
    "photography",
    "lighting",
    "composition",
    "mood",
    "color_grades",
];

pub const NEGATIVE_CATEGORIES: &[&str] = &["anatomy", "artifacts", "branding", "style"];

const BUILTIN_QUALITY: &[&str] = &[
    "ultra detailed",
    "masterpiece",
    "best quality",
    "8k",
    "highres",
    "sharp focus",
    "intricate",
    "professional",
];

const BUILTIN_ART_STYLES: &[&str] = &[
    "photorealistic",
    "hyperrealistic",
    "cinematic",
    "digital art",
    "oil painting",
    "watercolor",
    "anime",
    "manga",
    "concept art",
    "impressionist",
    "cyberpunk",
    "steampunk",
    "minimalist",
    "baroque",
    "art nouveau",
];

const BUILTIN_PHOTOGRAPHY: &[&str] = &[
    "bokeh",
    "depth of field",
    "macro",
    "wide angle",
    "telephoto",
    "85mm lens",
    "street photography",
    "documentary",
    "fashion photography",
];

const BUILTIN_LIGHTING: &[&str] = &[
    "soft lighting",
    "hard lighting",
    "natural lighting",
    "studio lighting",
    "golden hour",
    "blue hour",
    "backlighting",
    "rim lighting",
    "volumetric lighting",
    "chiaroscuro",
    "neon glow",
];

const BUILTIN_COMPOSITION: &[&str] = &[
    "rule of thirds",
    "centered",
    "symmetrical",
    "leading lines",
    "negative space",
    "close-up",
    "medium shot",
    "wide shot",
    "bird's eye view",
];

const BUILTIN_MOOD: &[&str] = &[
    "dramatic",
    "moody",
    "serene",
    "melancholic",
    "uplifting",
    "mysterious",
    "romantic",
    "energetic",
    "peaceful",
    "tense",
    "nostalgic",
    "futuristic",
];

const BUILTIN_COLOR_GRADES: &[&str] = &[
    "vibrant",
    "desaturated",
    "monochrome",
    "sepia",
    "teal and orange",
    "warm tones",
    "cool tones",
    "high contrast",
    "film grain",
];

const BUILTIN_NEG_ANATOMY: &[&str] = &[
    "bad anatomy",
    "bad hands",
    "missing fingers",
    "extra digit",
    "fewer digits",
    "extra limbs",
    "malformed limbs",
    "fused fingers",
    "long neck",
    "bad proportions",
    "deformed",
    "mutation",
];

const BUILTIN_NEG_ARTIFACTS: &[&str] = &[
    "lowres",
    "worst quality",
    "low quality",
    "jpeg artifacts",
    "blurry",
    "soft focus",
    "cropped",
    "duplicate",
    "tiling",
    "overexposed",
    "underexposed",
];

const BUILTIN_NEG_BRANDING: &[&str] = &["watermark", "text", "signature", "username", "logo"];

const BUILTIN_NEG_STYLE: &[&str] = &[
    "poorly drawn hands",
    "poorly drawn face",
    "flat shading",
    "oversaturated",
    "frame out of subject",
];

#[derive(Debug)]
struct LexiconEntry {
    category: String,
    phrases: Vec<String>,
    matchers: Vec<Regex>,
}

#[derive(Debug)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    fn from_categories(
        required: &[&str],
        mut categories: HashMap<String, Vec<String>>,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(required.len());
        for &category in required {
            let phrases: Vec<String> = categories
                .remove(category)
                .unwrap_or_default()
                .into_iter()
                .map(|phrase| phrase.trim().to_string())
                .filter(|phrase| !phrase.is_empty())
                .collect();
            if phrases.is_empty() {
                bail!("lexicon category '{category}' is missing or empty");
            }
            let matchers = phrases
                .iter()
                .filter_map(|phrase| phrase_matcher(phrase))
                .collect();
            entries.push(LexiconEntry {
                category: category.to_string(),
                phrases,
                matchers,
            });
        }
        Ok(Lexicon { entries })
    }

    fn builtin(required: &[&str], tables: &[&[&str]]) -> Self {
        let categories = required
            .iter()
            .zip(tables)
            .map(|(category, phrases)| {
                (
                    category.to_string(),
                    phrases.iter().map(|phrase| phrase.to_string()).collect(),
                )
            })
            .collect();
        Lexicon::from_categories(required, categories).expect("builtin lexicon is valid")
    }

    pub fn phrases(&self, category: &str) -> &[String] {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.phrases.as_slice())
            .unwrap_or(&[])
    }

    pub fn default_phrase(&self, category: &str) -> Option<&str> {
        self.phrases(category).first().map(String::as_str)
    }

    // Lowercased lexicon phrases that occur in the text on word boundaries.
    pub fn present_phrases(&self, text: &str) -> HashSet<String> {
        let mut present = HashSet::new();
        for entry in &self.entries {
            for (phrase, matcher) in entry.phrases.iter().zip(&entry.matchers) {
                if matcher.is_match(text) {
                    present.insert(phrase.to_lowercase());
                }
            }
        }
        present
    }
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    positive: HashMap<String, Vec<String>>,
    negative: HashMap<String, Vec<String>>,
}

#[derive(Debug)]
pub struct LexiconSet {
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl LexiconSet {
    pub fn builtin() -> Self {
        LexiconSet {
            positive: Lexicon::builtin(
                POSITIVE_CATEGORIES,
                &[
                    BUILTIN_QUALITY,
                    BUILTIN_ART_STYLES,
                    BUILTIN_PHOTOGRAPHY,
                    BUILTIN_LIGHTING,
                    BUILTIN_COMPOSITION,
                    BUILTIN_MOOD,
                    BUILTIN_COLOR_GRADES,
                ],
            ),
            negative: Lexicon::builtin(
                NEGATIVE_CATEGORIES,
                &[
                    BUILTIN_NEG_ANATOMY,
                    BUILTIN_NEG_ARTIFACTS,
                    BUILTIN_NEG_BRANDING,
                    BUILTIN_NEG_STYLE,
                ],
            ),
        }
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(LexiconSet::builtin());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon config at {}", path.display()))?;
        let parsed: LexiconFile = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse lexicon config at {}", path.display()))?;
        let set = LexiconSet {
            positive: Lexicon::from_categories(POSITIVE_CATEGORIES, parsed.positive)
                .with_context(|| format!("invalid lexicon config at {}", path.display()))?,
            negative: Lexicon::from_categories(NEGATIVE_CATEGORIES, parsed.negative)
                .with_context(|| format!("invalid lexicon config at {}", path.display()))?,
        };
        info!("Loaded lexicon config from {}", path.display());
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lexicon_validates_and_exposes_defaults() {
        let set = LexiconSet::builtin();
        assert_eq!(set.positive.default_phrase("quality"), Some("ultra detailed"));
        assert_eq!(set.positive.default_phrase("art_styles"), Some("photorealistic"));
        for category in NEGATIVE_CATEGORIES {
            assert!(!set.negative.phrases(category).is_empty());
        }
    }

    #[test]
    fn present_phrase_scan_is_boundary_aware_and_case_insensitive() {
        let set = LexiconSet::builtin();
        let present = set
            .positive
            .present_phrases("a Cinematic alley with neon glow, anime-adjacent");
        assert!(present.contains("cinematic"));
        assert!(present.contains("neon glow"));
        assert!(present.contains("anime"));
        assert!(!present.contains("macro"));
    }

    #[test]
    fn missing_category_in_file_is_a_fatal_load_error() {
        let mut positive: HashMap<String, Vec<String>> = HashMap::new();
        positive.insert("quality".to_string(), vec!["crisp".to_string()]);
        let result = Lexicon::from_categories(POSITIVE_CATEGORIES, positive);
        let message = result.expect_err("must fail").to_string();
        assert!(message.contains("art_styles"));
    }

    #[test]
    fn blank_phrases_are_discarded_before_validation() {
        let mut categories: HashMap<String, Vec<String>> = HashMap::new();
        categories.insert("anatomy".to_string(), vec!["  ".to_string()]);
        categories.insert("artifacts".to_string(), vec!["lowres".to_string()]);
        categories.insert("branding".to_string(), vec!["watermark".to_string()]);
        categories.insert("style".to_string(), vec!["flat shading".to_string()]);
        let result = Lexicon::from_categories(NEGATIVE_CATEGORIES, categories);
        assert!(result.is_err());
    }
}
