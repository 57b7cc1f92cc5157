use crate::engine::classifier::Classification;
use crate::engine::lexicon::LexiconSet;
use crate::engine::types::{Category, EnhancementRequest};
use crate::utils::text::split_terms;

// Override beats hint beats lexicon default. The subject is always the
// cleaned idea text and extra tags stay empty unless supplied.
pub fn select_segments(
    request: &EnhancementRequest,
    subject: &str,
    classification: &Classification,
    lexicons: &LexiconSet,
) -> Vec<(Category, Vec<String>)> {
    Category::ORDER
        .iter()
        .map(|&category| {
            let phrases = match category {
                Category::Subject => vec![subject.to_string()],
                Category::ExtraTags => request
                    .extra_tags
                    .as_deref()
                    .map(split_terms)
                    .unwrap_or_default(),
                Category::Quality => resolve(None, category, "quality", classification, lexicons),
                Category::Style => resolve(
                    request.style.as_deref(),
                    category,
                    "art_styles",
                    classification,
                    lexicons,
                ),
                Category::Lighting => resolve(
                    request.lighting.as_deref(),
                    category,
                    "lighting",
                    classification,
                    lexicons,
                ),
                Category::Composition => {
                    resolve(None, category, "composition", classification, lexicons)
                }
                Category::Mood => resolve(None, category, "mood", classification, lexicons),
                Category::ColorGrade => resolve(
                    request.color_grade.as_deref(),
                    category,
                    "color_grades",
                    classification,
                    lexicons,
                ),
            };
            (category, phrases)
        })
        .collect()
}

fn resolve(
    override_value: Option<&str>,
    category: Category,
    lexicon_category: &str,
    classification: &Classification,
    lexicons: &LexiconSet,
) -> Vec<String> {
    if let Some(value) = override_value {
        let terms = split_terms(value);
        if !terms.is_empty() {
            return terms;
        }
    }
    if let Some(hint) = classification.hints.get(&category) {
        return vec![hint.to_string()];
    }
    lexicons
        .positive
        .default_phrase(lexicon_category)
        .map(|phrase| vec![phrase.to_string()])
        .unwrap_or_default()
}
