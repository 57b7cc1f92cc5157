use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::engine::lexicon::LexiconSet;
use crate::engine::types::Category;
use crate::utils::text::phrase_matcher;

pub struct TriggerRule {
    pub trigger: &'static str,
    pub category: Category,
    pub phrase: &'static str,
}

// Evaluated top to bottom; the first matching rule per category wins.
// Hint phrases intentionally differ from their trigger word so that a
// trigger occurring in the idea does not suppress its own hint.
pub const TRIGGER_RULES: &[TriggerRule] = &[
    TriggerRule { trigger: "cyberpunk", category: Category::Style, phrase: "cyberpunk aesthetic" },
    TriggerRule { trigger: "cyberpunk", category: Category::Lighting, phrase: "neon glow" },
    TriggerRule { trigger: "cyberpunk", category: Category::ColorGrade, phrase: "teal and orange" },
    TriggerRule { trigger: "neon", category: Category::Lighting, phrase: "neon glow" },
    TriggerRule { trigger: "neon", category: Category::ColorGrade, phrase: "vibrant" },
    TriggerRule { trigger: "noir", category: Category::ColorGrade, phrase: "monochrome" },
    TriggerRule { trigger: "noir", category: Category::Lighting, phrase: "chiaroscuro" },
    TriggerRule { trigger: "noir", category: Category::Mood, phrase: "mysterious" },
    TriggerRule { trigger: "cinematic", category: Category::Lighting, phrase: "cinematic lighting" },
    TriggerRule { trigger: "cinematic", category: Category::Composition, phrase: "medium shot" },
    TriggerRule { trigger: "portrait", category: Category::Composition, phrase: "close-up" },
    TriggerRule { trigger: "portrait", category: Category::Lighting, phrase: "studio lighting" },
    TriggerRule { trigger: "analog", category: Category::ColorGrade, phrase: "film grain" },
    TriggerRule { trigger: "fantasy", category: Category::Style, phrase: "epic fantasy concept art" },
    TriggerRule { trigger: "fantasy", category: Category::Lighting, phrase: "volumetric lighting" },
    TriggerRule { trigger: "scifi", category: Category::Style, phrase: "futuristic concept art" },
    TriggerRule { trigger: "sunset", category: Category::Lighting, phrase: "golden hour" },
    TriggerRule { trigger: "moody", category: Category::ColorGrade, phrase: "desaturated" },
    TriggerRule { trigger: "rainy", category: Category::Mood, phrase: "melancholic" },
    TriggerRule { trigger: "rain", category: Category::Mood, phrase: "melancholic" },
    TriggerRule { trigger: "minimalist", category: Category::Composition, phrase: "negative space" },
];

static COMPILED_TRIGGERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    TRIGGER_RULES
        .iter()
        .map(|rule| phrase_matcher(rule.trigger).expect("valid trigger word"))
        .collect()
});

#[derive(Debug)]
pub struct Classification {
    pub present: HashSet<String>,
    pub hints: HashMap<Category, &'static str>,
}

pub fn classify(idea: &str, lexicons: &LexiconSet) -> Classification {
    let present = lexicons.positive.present_phrases(idea);

    let mut hints: HashMap<Category, &'static str> = HashMap::new();
    for (rule, matcher) in TRIGGER_RULES.iter().zip(COMPILED_TRIGGERS.iter()) {
        if hints.contains_key(&rule.category) {
            continue;
        }
        if matcher.is_match(idea) {
            hints.insert(rule.category, rule.phrase);
        }
    }

    debug!(
        "Classified idea: {} present phrase(s), {} hint(s)",
        present.len(),
        hints.len()
    );
    Classification { present, hints }
}
