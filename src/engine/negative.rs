use std::collections::HashSet;

use crate::engine::clamper::{clamp_segments, NEGATIVE_CHAR_BUDGET, NEGATIVE_DROP_ORDER};
use crate::engine::lexicon::LexiconSet;
use crate::engine::types::Segment;
use crate::utils::text::split_terms;

// Caller terms lead and are protected, like the subject on the positive
// side; the tail segments are droppable in NEGATIVE_DROP_ORDER.
const NEGATIVE_SEGMENT_ORDER: &[&str] = &["anatomy", "artifacts", "style", "branding"];

pub fn build_negative(user_terms: Option<&str>, lexicons: &LexiconSet) -> String {
    let mut seen: HashSet<String> = HashSet::new();
    let mut segments = Vec::with_capacity(NEGATIVE_SEGMENT_ORDER.len() + 1);

    let user_phrases = user_terms.map(split_terms).unwrap_or_default();
    segments.push(Segment::new("user", dedup(user_phrases, &mut seen)));

    for &category in NEGATIVE_SEGMENT_ORDER {
        let defaults = lexicons.negative.phrases(category).to_vec();
        segments.push(Segment::new(category, dedup(defaults, &mut seen)));
    }

    clamp_segments(segments, NEGATIVE_DROP_ORDER, NEGATIVE_CHAR_BUDGET)
}

fn dedup(phrases: Vec<String>, seen: &mut HashSet<String>) -> Vec<String> {
    let mut kept = Vec::new();
    for phrase in phrases {
        if seen.insert(phrase.to_lowercase()) {
            kept.push(phrase);
        }
    }
    kept
}
