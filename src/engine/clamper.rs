use tracing::debug;

use crate::engine::assembler::render;
use crate::engine::types::Segment;

pub const PROMPT_CHAR_BUDGET: usize = 850;
pub const NEGATIVE_CHAR_BUDGET: usize = 850;

// Removal priority when over budget; labels absent from the list are
// never dropped.
pub const POSITIVE_DROP_ORDER: &[&str] = &[
    "extra_tags",
    "color_grade",
    "mood",
    "composition",
    "lighting",
    "style",
];
pub const NEGATIVE_DROP_ORDER: &[&str] = &["branding", "style", "artifacts"];

pub fn clamp_segments(mut segments: Vec<Segment>, drop_order: &[&str], budget: usize) -> String {
    let mut rendered = render(&segments);
    if char_len(&rendered) <= budget {
        return rendered;
    }
    for label in drop_order {
        let Some(segment) = segments
            .iter_mut()
            .find(|segment| segment.label == *label && !segment.is_empty())
        else {
            continue;
        };
        segment.phrases.clear();
        debug!("Dropped {label} segment to fit the character budget");
        rendered = render(&segments);
        if char_len(&rendered) <= budget {
            return rendered;
        }
    }
    truncate_at_whitespace(&rendered, budget)
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub fn truncate_at_whitespace(text: &str, budget: usize) -> String {
    if char_len(text) <= budget {
        return text.to_string();
    }
    let head: String = text.chars().take(budget).collect();
    // Cut at the last whitespace so no token is split; a single token
    // longer than the whole budget is cut at the budget.
    let cut = head.rfind(char::is_whitespace).unwrap_or(head.len());
    head[..cut]
        .trim_end_matches(|c: char| c.is_whitespace() || c == ',')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(label: &'static str, phrases: &[&str]) -> Segment {
        Segment::new(label, phrases.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn in_budget_prompts_pass_through_unchanged() {
        let segments = vec![
            segment("quality", &["ultra detailed"]),
            segment("subject", &["a quiet harbor"]),
        ];
        assert_eq!(
            clamp_segments(segments, POSITIVE_DROP_ORDER, PROMPT_CHAR_BUDGET),
            "ultra detailed, a quiet harbor"
        );
    }

    #[test]
    fn extra_tags_are_dropped_before_any_other_segment() {
        let long_tags: Vec<String> = (0..120).map(|i| format!("tag number {i}")).collect();
        let segments = vec![
            segment("quality", &["ultra detailed"]),
            segment("subject", &["a quiet harbor"]),
            segment("mood", &["serene"]),
            Segment::new("extra_tags", long_tags),
        ];
        let clamped = clamp_segments(segments, POSITIVE_DROP_ORDER, PROMPT_CHAR_BUDGET);
        assert_eq!(clamped, "ultra detailed, a quiet harbor, serene");
        assert!(clamped.chars().count() <= PROMPT_CHAR_BUDGET);
    }

    #[test]
    fn protected_segments_survive_and_truncation_is_word_safe() {
        let subject = "harbor lights ".repeat(100);
        let segments = vec![
            segment("quality", &["ultra detailed"]),
            Segment::new("subject", vec![subject]),
        ];
        let clamped = clamp_segments(segments, POSITIVE_DROP_ORDER, PROMPT_CHAR_BUDGET);
        assert!(clamped.chars().count() <= PROMPT_CHAR_BUDGET);
        assert!(clamped.starts_with("ultra detailed"));
        assert!(clamped.ends_with("harbor") || clamped.ends_with("lights"));
    }

    #[test]
    fn single_oversized_token_is_cut_at_the_budget() {
        let token = "x".repeat(2000);
        let truncated = truncate_at_whitespace(&token, 850);
        assert_eq!(truncated.chars().count(), 850);
    }

    #[test]
    fn multibyte_text_is_never_split_inside_a_character() {
        let text = "日本 ".repeat(600);
        let truncated = truncate_at_whitespace(&text, 850);
        assert!(truncated.chars().count() <= 850);
        assert!(truncated.ends_with('本') || truncated.ends_with('日'));
    }
}
