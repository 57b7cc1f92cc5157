use std::collections::HashSet;

use crate::engine::classifier::Classification;
use crate::engine::types::{Category, Segment};
use crate::utils::text::contains_phrase;

// Mutually exclusive style phrases; the earlier occurrence wins.
pub const CONFLICT_PAIRS: &[(&str, &str)] = &[
    ("photorealistic", "anime"),
    ("photorealistic", "cartoon"),
    ("photorealistic", "watercolor"),
    ("photorealistic", "oil painting"),
    ("hyperrealistic", "anime"),
    ("monochrome", "vibrant"),
];

// Drops any phrase that already occurred in the idea or in an earlier
// segment; the subject itself is carried verbatim. The subject text is
// also checked on word boundaries so re-running the engine on its own
// output does not re-insert hint or override phrases.
pub fn assemble(
    resolved: Vec<(Category, Vec<String>)>,
    classification: &Classification,
    subject: &str,
) -> Vec<Segment> {
    let mut seen: HashSet<String> = classification.present.clone();
    let mut segments = Vec::with_capacity(resolved.len());
    for (category, phrases) in resolved {
        let mut kept = Vec::new();
        if category == Category::Subject {
            for phrase in phrases {
                seen.insert(phrase.to_lowercase());
                kept.push(phrase);
            }
        } else {
            for phrase in phrases {
                let key = phrase.to_lowercase();
                if seen.contains(&key)
                    || conflicts_with(&key, &seen)
                    || contains_phrase(subject, &phrase)
                {
                    continue;
                }
                seen.insert(key);
                kept.push(phrase);
            }
        }
        segments.push(Segment::new(category.as_str(), kept));
    }
    segments
}

fn conflicts_with(candidate: &str, seen: &HashSet<String>) -> bool {
    CONFLICT_PAIRS.iter().any(|(first, second)| {
        (candidate == *first && seen.contains(*second))
            || (candidate == *second && seen.contains(*first))
    })
}

pub fn render(segments: &[Segment]) -> String {
    segments
        .iter()
        .flat_map(|segment| segment.phrases.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn classification_with_present(present: &[&str]) -> Classification {
        Classification {
            present: present.iter().map(|phrase| phrase.to_string()).collect(),
            hints: HashMap::new(),
        }
    }

    #[test]
    fn repeated_phrases_keep_their_first_position() {
        let resolved = vec![
            (Category::Quality, vec!["ultra detailed".to_string()]),
            (Category::Subject, vec!["a quiet harbor".to_string()]),
            (Category::Style, vec!["cinematic".to_string()]),
            (Category::Mood, vec!["Cinematic".to_string(), "serene".to_string()]),
        ];
        let segments = assemble(resolved, &classification_with_present(&[]), "a quiet harbor");
        assert_eq!(
            render(&segments),
            "ultra detailed, a quiet harbor, cinematic, serene"
        );
    }

    #[test]
    fn phrases_already_in_the_idea_are_not_reinserted() {
        let subject = "neon glow over wet asphalt";
        let resolved = vec![
            (Category::Subject, vec![subject.to_string()]),
            (Category::Lighting, vec!["neon glow".to_string()]),
        ];
        let segments = assemble(resolved, &classification_with_present(&["neon glow"]), subject);
        assert_eq!(render(&segments), "neon glow over wet asphalt");
    }

    #[test]
    fn non_lexicon_phrases_inside_the_subject_are_still_suppressed() {
        let subject = "a street in cyberpunk aesthetic at dusk";
        let resolved = vec![
            (Category::Subject, vec![subject.to_string()]),
            (Category::Style, vec!["cyberpunk aesthetic".to_string()]),
        ];
        let segments = assemble(resolved, &classification_with_present(&[]), subject);
        assert_eq!(render(&segments), subject);
    }

    #[test]
    fn conflicting_style_pair_keeps_the_earlier_phrase() {
        let resolved = vec![
            (Category::Style, vec!["anime".to_string()]),
            (Category::ColorGrade, vec!["photorealistic".to_string()]),
        ];
        let segments = assemble(resolved, &classification_with_present(&[]), "a harbor");
        assert_eq!(render(&segments), "anime");
    }

    #[test]
    fn conflict_against_phrase_present_in_idea_drops_the_candidate() {
        let subject = "an anime heroine on a rooftop";
        let resolved = vec![
            (Category::Subject, vec![subject.to_string()]),
            (Category::Style, vec!["photorealistic".to_string()]),
        ];
        let segments = assemble(resolved, &classification_with_present(&["anime"]), subject);
        assert_eq!(render(&segments), "an anime heroine on a rooftop");
    }
}
